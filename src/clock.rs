use std::time::Duration;

/// Most ticks handed out for a single frame, a long stall drops the rest
const MAX_CATCH_UP: u32 = 5;

/// Turns variable frame times into a fixed number of simulation ticks.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: Duration,
    accumulated: Duration,
}

impl FrameClock {
    pub fn new(fps: f64) -> Self {
        FrameClock {
            interval: Duration::from_secs_f64(1. / fps),
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `dt` of real time and returns how many ticks are due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulated += dt;

        let mut ticks = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            ticks += 1;
            if ticks == MAX_CATCH_UP {
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_leftover_time() {
        let mut clock = FrameClock::new(30.);

        assert_eq!(clock.advance(Duration::from_millis(20)), 0);
        assert_eq!(clock.advance(Duration::from_millis(20)), 1);
        assert_eq!(clock.advance(Duration::from_millis(110)), 3);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new(60.);

        assert_eq!(clock.advance(Duration::from_secs(2)), MAX_CATCH_UP);
        assert_eq!(clock.advance(Duration::from_millis(1)), 0);
    }
}
