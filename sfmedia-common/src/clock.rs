use crate::Time;
use std::time::Instant;

/// Measures elapsed time from a reference point.
///
/// A clock starts running when created. Stopping freezes the elapsed time until
/// the clock is started again.
#[derive(Debug, Copy, Clone)]
pub struct Clock {
    ref_point: Instant,
    stop_point: Option<Instant>,
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

impl Clock {
    pub fn new() -> Clock {
        Clock {
            ref_point: Instant::now(),
            stop_point: None,
        }
    }

    pub fn elapsed_time(&self) -> Time {
        let end = self.stop_point.unwrap_or_else(Instant::now);
        Time::from(end.duration_since(self.ref_point))
    }

    pub fn is_running(&self) -> bool {
        self.stop_point.is_none()
    }

    /// Resume a stopped clock. Elapsed time accumulated before the stop is kept.
    pub fn start(&mut self) {
        if let Some(stop_point) = self.stop_point.take() {
            self.ref_point += Instant::now().duration_since(stop_point);
        }
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.stop_point = Some(Instant::now());
        }
    }

    /// Reset to zero and keep running. Returns the time elapsed before the reset.
    pub fn restart(&mut self) -> Time {
        let elapsed = self.elapsed_time();
        self.ref_point = Instant::now();
        self.stop_point = None;
        elapsed
    }

    /// Reset to zero and stop. Returns the time elapsed before the reset.
    pub fn reset(&mut self) -> Time {
        let elapsed = self.elapsed_time();
        let now = Instant::now();
        self.ref_point = now;
        self.stop_point = Some(now);
        elapsed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stopped_clock_is_frozen() {
        let mut clock = Clock::new();
        clock.stop();
        assert!(!clock.is_running());
        let a = clock.elapsed_time();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(a, clock.elapsed_time());
        clock.start();
        assert!(clock.is_running());
    }

    #[test]
    fn reset_stops_at_zero() {
        let mut clock = Clock::new();
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(Time::ZERO, clock.elapsed_time());
    }
}
