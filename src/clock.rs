use quanta::{Clock, Instant};

/// Measures the time between rendered frames.
pub struct FrameClock {
    clock: Clock,
    start: Instant,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock::with_clock(Clock::new())
    }

    pub fn with_clock(clock: Clock) -> Self {
        let now = clock.now();
        FrameClock {
            clock,
            start: now,
            last_frame: now,
        }
    }

    /// Seconds since the previous tick, or since construction on the first one.
    pub fn tick(&mut self) -> f32 {
        let now = self.clock.now();
        let delta_time = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        delta_time.as_secs_f32()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.now().saturating_duration_since(self.start).as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new()
    }
}

/// Rate limits FPS readouts in the window title.
pub struct TitleCountdown {
    interval: f32,
    remaining: f32,
}

impl TitleCountdown {
    pub fn new(interval: f32) -> Self {
        TitleCountdown {
            interval,
            remaining: interval,
        }
    }

    /// Returns the current FPS once the countdown has run out.
    pub fn update(&mut self, delta_time: f32) -> Option<f32> {
        self.remaining -= delta_time;
        if self.remaining <= 0.0 && delta_time > 0.0 {
            self.remaining = self.interval;
            return Some(1.0 / delta_time);
        }
        None
    }
}
