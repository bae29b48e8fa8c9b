use std::time::Instant;

/// Per-frame timing handed to the camera update and the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTiming {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Seconds since the timer started.
    pub elapsed: f32,
}

impl FrameTiming {
    pub fn new(dt: f32, elapsed: f32) -> Self {
        Self { dt, elapsed }
    }
}

/// Derives [`FrameTiming`] from a monotonic clock.
///
/// The clock is passed in rather than read here so frame timing can be driven
/// by tests and headless runs.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    start: Instant,
    last: Instant,
}

impl FrameTimer {
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
        }
    }

    /// Advance to `now`. An instant earlier than the previous tick yields
    /// `dt == 0`.
    pub fn tick(&mut self, now: Instant) -> FrameTiming {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        if now > self.last {
            self.last = now;
        }
        FrameTiming {
            dt,
            elapsed: self.last.saturating_duration_since(self.start).as_secs_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_at_start_is_zero() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0);
        assert_eq!(timer.tick(t0), FrameTiming::new(0.0, 0.0));
    }

    #[test]
    fn dt_is_time_since_previous_tick() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0);

        let a = timer.tick(t0 + Duration::from_millis(250));
        assert!((a.dt - 0.25).abs() < 1e-6);
        assert!((a.elapsed - 0.25).abs() < 1e-6);

        let b = timer.tick(t0 + Duration::from_millis(1000));
        assert!((b.dt - 0.75).abs() < 1e-6);
        assert!((b.elapsed - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0);
        timer.tick(t0 + Duration::from_secs(2));

        let back = timer.tick(t0 + Duration::from_secs(1));
        assert_eq!(back.dt, 0.0);
        assert!((back.elapsed - 2.0).abs() < 1e-6);
    }
}
