//! Time sources and the fixed-step accumulator

use std::time::{Duration, Instant};

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Monotonic time since the host loop started
pub trait Clock {
    fn now(&self) -> Duration;

    /// Yield until roughly `frame` has passed
    fn wait(&mut self, frame: Duration);
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn wait(&mut self, frame: Duration) {
        std::thread::sleep(frame);
    }
}

/// Clock that only moves when told to; waiting advances it instantly
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn wait(&mut self, frame: Duration) {
        self.advance(frame);
    }
}

/// Turns irregular host frames into whole fixed simulation steps
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    accumulator: f32,
    last: Option<Duration>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `SIM_DT` steps to run for a host frame ending at `now`.
    ///
    /// Long stalls are clamped to `MAX_FRAME_DT` and at most `MAX_SUBSTEPS`
    /// steps are returned, so the simulation never tries to catch up forever.
    pub fn advance(&mut self, now: Duration) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        let raw = now.saturating_sub(last).as_secs_f32();
        let dt = raw.min(MAX_FRAME_DT);
        if raw > MAX_FRAME_DT {
            log::warn!(
                "Host frame took {:.3}s, clamped to {:.3}s",
                raw,
                MAX_FRAME_DT
            );
        }
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Forget the previous frame (after a pause in the host loop)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_first_frame_runs_nothing() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.advance(millis(500)), 0);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut timer = FrameTimer::new();
        timer.advance(millis(0));
        assert_eq!(timer.advance(millis(10)), 0);
        assert_eq!(timer.advance(millis(20)), 1);
        assert_eq!(timer.advance(millis(54)), 2);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut timer = FrameTimer::new();
        timer.advance(millis(0));
        // 0.1s at 60Hz is about 6 steps, well under the substep cap
        let steps = timer.advance(millis(5_000));
        assert!((5..=6).contains(&steps));
    }

    #[test]
    fn test_manual_clock_waits_instantly() {
        let mut clock = ManualClock::default();
        clock.wait(millis(16));
        clock.advance(millis(4));
        assert_eq!(clock.now(), millis(20));
    }

    #[test]
    fn test_reset_drops_history() {
        let mut timer = FrameTimer::new();
        timer.advance(millis(0));
        timer.reset();
        assert_eq!(timer.advance(millis(1_000)), 0);
    }
}
