use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Tracks wall-clock time across frames. `tick` is called once per redraw
/// and hands back the timing for that frame.
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();
        self.last_frame_time = now;

        let info = FrameInfo {
            number: self.frame_number,
            time,
            delta,
        };
        self.frame_number += 1;
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds per-frame deltas into an FPS reading on a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    elapsed: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Accumulate one frame; returns the averaged FPS once per interval.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            let fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_counter_fires_on_interval() {
        let mut counter = FpsCounter::new(1.0);

        // 0.25 is exact in binary, so four ticks land on the interval.
        for _ in 0..3 {
            assert!(counter.tick(0.25).is_none());
        }

        let fps = counter.tick(0.25).expect("interval elapsed");
        assert!((fps - 4.0).abs() < 1e-6, "got {fps}");
    }

    #[test]
    fn fps_counter_resets_after_firing() {
        let mut counter = FpsCounter::new(0.1);

        assert!(counter.tick(0.2).is_some());
        assert!(counter.tick(0.05).is_none());
    }

    #[test]
    fn frame_clock_numbers_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
    }
}
