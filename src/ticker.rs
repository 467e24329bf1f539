/// Turns per-frame time deltas into fixed-rate simulation ticks.
///
/// Whenever the accumulated time reaches one interval a tick fires and the
/// accumulator goes back to zero, so any overshoot is dropped rather than
/// carried into the next tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ticker {
    interval: f64,
    sum: f64,
}

impl Ticker {
    pub fn new(tick_rate: u32) -> Self {
        Ticker { interval: 1.0 / tick_rate as f64, sum: 0.0 }
    }

    #[cfg(test)]
    pub fn elapsed(&self) -> f64 {
        self.sum
    }

    /// Adds `delta` seconds, returns whether a tick is due.
    pub fn advance(&mut self, delta: f64) -> bool {
        self.sum += delta;

        if self.sum >= self.interval {
            self.sum = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.sum = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_interval_is_reached() {
        let mut ticker = Ticker::new(4);
        assert!(!ticker.advance(0.125));
        assert!(ticker.advance(0.125));
        assert_eq!(ticker.elapsed(), 0.0);
    }

    #[test]
    fn overshoot_is_discarded() {
        let mut ticker = Ticker::new(4);
        assert!(ticker.advance(0.75));
        // A late frame still yields only one tick and nothing carries over
        assert!(!ticker.advance(0.125));
        assert_eq!(ticker.elapsed(), 0.125);
    }

    #[test]
    fn reset_restarts_the_interval() {
        let mut ticker = Ticker::new(4);
        ticker.advance(0.2);
        ticker.reset();
        assert!(!ticker.advance(0.2));
    }
}
