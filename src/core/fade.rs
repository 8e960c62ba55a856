//! Linear opacity ramps for showing and dismissing the popup.

use std::time::{Duration, Instant};

pub const FADE_IN: Fade = Fade::new(0.0, 1.0, Duration::from_millis(800));
pub const FADE_OUT: Fade = Fade::new(1.0, 0.0, Duration::from_millis(400));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: Duration,
}

impl Fade {
    pub const fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn opacity(&self, elapsed: Duration) -> f32 {
        if self.is_finished(elapsed) {
            return self.to;
        }

        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        self.from + (self.to - self.from) * progress
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// A [`Fade`] bound to the clock. The clock starts on the first frame it
/// sees, so time spent before the window is mapped does not eat the ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    fade: Fade,
    started: Option<Instant>,
    opacity: f32,
    finished: bool,
}

impl Animation {
    pub fn new(fade: Fade) -> Self {
        Self {
            fade,
            started: None,
            opacity: fade.from,
            finished: false,
        }
    }

    /// Advances to `now` and reports whether the ramp has completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);

        self.opacity = self.fade.opacity(elapsed);
        self.finished = self.fade.is_finished(elapsed);

        self.finished
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_running(&self) -> bool {
        !self.finished
    }
}
