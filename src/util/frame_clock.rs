//! Session clock for hosts: frame time, smoothed FPS and frame limiting.

use web_time::{Duration, Instant};

/// Monotonic session clock with FPS smoothing and optional frame limiting.
///
/// Hosts feed [`FrameClock::elapsed_secs`] to the engine as the frame time.
pub struct FrameClock {
    /// Session start
    started: Instant,
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames ended so far
    frames: u64,
}

impl FrameClock {
    /// Start a clock now with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        let now = Instant::now();

        Self {
            started: now,
            target_fps,
            min_frame_duration,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Seconds since the clock was created.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Whether enough time has passed since the last frame to produce
    /// another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left before the next frame is due.
    #[must_use]
    pub fn until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after producing a frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames ended so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_clock_always_renders() {
        let clock = FrameClock::new(0);
        assert!(clock.should_render());
        assert_eq!(clock.until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = FrameClock::new(120);
        let first = clock.elapsed_secs();
        std::thread::sleep(Duration::from_millis(2));
        clock.end_frame();
        assert!(clock.elapsed_secs() >= first);
        assert_eq!(clock.frames(), 1);
        assert!(clock.fps() > 0.0);
    }
}
