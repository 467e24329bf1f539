use crate::{TermInt, Coords};
use crate::render::{self, Palette};
use crate::state::Snapshot;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::style::{SetBackgroundColor, SetForegroundColor, ResetColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

const BOARD_TOP_LEFT: Coords = (1, 1);

/// Largest grid whose border, cells and status line still have valid
/// terminal coordinates.
pub const MAX_BOARD_WIDTH: usize = (TermInt::MAX as usize - 2) / 2;
pub const MAX_BOARD_HEIGHT: usize = TermInt::MAX as usize - 3;

pub struct TermManager<W: Write = Stdout> {
    stdout: W,
    palette: Palette,
    active: bool,
}

impl TermManager {
    pub fn new(palette: Palette) -> Self {
        TermManager::with_writer(stdout(), palette)
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_writer(stdout: W, palette: Palette) -> Self {
        TermManager { stdout, palette, active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle("snake"))?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.active = true;
        self.clear()
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Draws the whole board with its border and the status line below it.
    pub fn draw(&mut self, snapshot: &Snapshot) -> Result<()> {
        let (left, top) = BOARD_TOP_LEFT;
        let inner_width = (snapshot.width * 2) as TermInt;
        let inner_height = snapshot.height as TermInt;
        let palette = self.palette;

        queue!(self.stdout, SetBackgroundColor(palette.background), SetForegroundColor(palette.grid))?;
        self.draw_borders((left - 1, top - 1), inner_width + 2, inner_height + 2)?;

        for (y, row) in render::frame_rows(snapshot).iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(left, top + y as TermInt))?;
            for &tile in row {
                queue!(self.stdout, SetForegroundColor(palette.color(tile)), style::Print(tile.glyph()))?;
            }
        }

        queue!(
            self.stdout,
            ResetColor,
            cursor::MoveTo(left, top + inner_height + 1),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print(render::status_line(snapshot))
        )?;
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        self.clear()?;
        for (i, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(2, 1 + i as TermInt), style::Print(line))?;
        }
        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, ResetColor, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self, top_left: Coords, width: TermInt, height: TermInt) -> Result<()> {
        let (x0, y0) = top_left;
        let (end_x, end_y) = (x0 + width - 1, y0 + height - 1);

        for x in x0..=end_x {
            let ch = if x == x0 || x == end_x {'+'} else {'-'};
            self.print_at((x, y0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in y0 + 1..end_y {
            self.print_at((x0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        Ok(())
    }

    fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }
}

impl<W: Write> Drop for TermManager<W> {
    fn drop(&mut self) {
        // Leave the user's terminal usable even if the game loop bailed out
        if let Err(e) = self.restore() {
            log::error!("could not restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_board_and_status_into_writer() {
        let snapshot = Snapshot { body: &[6, 5], food: 15, width: 4, height: 4, paused: true };
        let mut term = TermManager::with_writer(Vec::new(), Palette::default());

        term.draw(&snapshot).unwrap();

        let out = String::from_utf8_lossy(&term.stdout).into_owned();
        assert!(out.contains("Length: 2 paused"));
        assert!(out.contains("██"));
        assert!(out.contains('+'));
    }
}
