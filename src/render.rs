use crossterm::style::Color;

use crate::state::Snapshot;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Head,
    Body,
    Food,
}

impl Tile {
    /// Two columns per cell keeps the board roughly square in a terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            Tile::Empty => " ·",
            Tile::Head | Tile::Body | Tile::Food => "██",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub head: Color,
    pub body: Color,
    pub food: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: rgb(0.14, 0.16, 0.18),
            grid: rgb(0.91, 0.91, 0.91),
            head: rgb(0.5, 1.0, 0.5),
            body: rgb(0.6, 0.88, 0.6),
            food: rgb(1.0, 0.5, 0.5),
        }
    }
}

impl Palette {
    pub fn color(&self, tile: Tile) -> Color {
        match tile {
            Tile::Empty => self.grid,
            Tile::Head => self.head,
            Tile::Body => self.body,
            Tile::Food => self.food,
        }
    }
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    let channel = |v: f32| (v * 255.0).round() as u8;
    Color::Rgb { r: channel(r), g: channel(g), b: channel(b) }
}

/// Lays the snapshot out as rows of tiles, row 0 at the top. The head is
/// placed last so it always shows.
pub fn frame_rows(snapshot: &Snapshot) -> Vec<Vec<Tile>> {
    let mut tiles = vec![Tile::Empty; snapshot.width * snapshot.height];

    tiles[snapshot.food] = Tile::Food;
    for &cell in &snapshot.body[1..] {
        tiles[cell] = Tile::Body;
    }
    tiles[snapshot.body[0]] = Tile::Head;

    tiles.chunks(snapshot.width).map(|row| row.to_vec()).collect()
}

pub fn status_line(snapshot: &Snapshot) -> String {
    let mut line = format!("Length: {}", snapshot.body.len());
    if snapshot.paused {
        line.push_str(" paused");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn picture(rows: &[Vec<Tile>]) -> Vec<String> {
        rows.iter()
            .map(|row| row.iter().map(|t| match t {
                Tile::Empty => '.',
                Tile::Head => '@',
                Tile::Body => 'o',
                Tile::Food => '*',
            }).collect())
            .collect()
    }

    #[test]
    fn draws_head_body_and_food() {
        let snapshot = Snapshot { body: &[6, 5, 1], food: 15, width: 4, height: 4, paused: false };
        assert_eq!(picture(&frame_rows(&snapshot)), vec![
            ".o..",
            ".o@.",
            "....",
            "...*",
        ]);
    }

    #[test]
    fn status_mentions_pause() {
        let snapshot = Snapshot { body: &[0], food: 3, width: 2, height: 2, paused: true };
        assert_eq!(status_line(&snapshot), "Length: 1 paused");
    }

    #[test]
    fn status_has_no_trailing_space_when_running() {
        let snapshot = Snapshot { body: &[0, 1], food: 3, width: 2, height: 2, paused: false };
        assert_eq!(status_line(&snapshot), "Length: 2");
    }

    #[test]
    fn palette_matches_board_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Tile::Food), Color::Rgb { r: 255, g: 128, b: 128 });
        assert_eq!(palette.head, Color::Rgb { r: 128, g: 255, b: 128 });
    }
}
