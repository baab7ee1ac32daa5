/// Pure timing gate: add `delta` to `accumulated` and report whether a tick is due.
///
/// When the interval is reached the accumulator resets to zero rather than
/// carrying the remainder, so a long frame yields one tick, never a burst.
pub fn advance(accumulated: f32, delta: f32, interval: f32) -> (bool, f32) {
    let accumulated = accumulated + delta;
    if accumulated >= interval {
        (true, 0.0)
    } else {
        (false, accumulated)
    }
}

pub const MIN_TICKS_PER_SECOND: f32 = 1.0;
pub const MAX_TICKS_PER_SECOND: f32 = 60.0;

/// TickTimer decouples the simulation rate from the frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickTimer {
    accumulated: f32,
    ticks_per_second: f32,
}

impl TickTimer {
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            accumulated: 0.0,
            ticks_per_second: ticks_per_second.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND),
        }
    }

    pub fn interval(&self) -> f32 {
        1.0 / self.ticks_per_second
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Feed one frame's delta time; true when exactly one tick should run
    pub fn advance(&mut self, delta: f32) -> bool {
        let (should_tick, accumulated) = advance(self.accumulated, delta, self.interval());
        self.accumulated = accumulated;
        should_tick
    }

    /// Change the simulation rate, keeping it within [1, 60] ticks per second
    pub fn adjust_speed(&mut self, delta: f32) {
        self.ticks_per_second =
            (self.ticks_per_second + delta).clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delta_never_ticks() {
        let mut timer = TickTimer::new(10.0);
        for _ in 0..1000 {
            assert!(!timer.advance(0.0));
        }
        assert_eq!(timer.accumulated(), 0.0);
    }

    #[test]
    fn test_ticks_once_interval_reached() {
        let (tick, acc) = advance(0.0, 0.25, 0.5);
        assert!(!tick);
        assert_eq!(acc, 0.25);
        let (tick, acc) = advance(acc, 0.25, 0.5);
        assert!(tick);
        assert_eq!(acc, 0.0);
    }

    #[test]
    fn test_long_frame_ticks_once_and_resets() {
        let mut timer = TickTimer::new(2.0);
        assert!(timer.advance(3.0));
        assert_eq!(timer.accumulated(), 0.0);
        assert!(!timer.advance(0.1));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut timer = TickTimer::new(100.0);
        assert_eq!(timer.ticks_per_second(), MAX_TICKS_PER_SECOND);
        timer.adjust_speed(-500.0);
        assert_eq!(timer.ticks_per_second(), MIN_TICKS_PER_SECOND);
        assert_eq!(timer.interval(), 1.0);
    }
}
