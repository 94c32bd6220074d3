//! Easing curves and progress-sample tweens.
//!
//! Animations are modeled as finite, restartable sequences of progress
//! samples in `[0, 1]`: callers advance a [`Tween`] by wall-clock (or test)
//! delta time and read back an eased sample. Nothing here schedules itself;
//! the controller's `tick` is the only clock.

pub type Ease = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t
}

/// Gentle deceleration (quadratic out).
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Stronger deceleration (cubic out).
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Pronounced deceleration (quartic out).
pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Symm. slow-fast-slow (quartic in/out).
pub fn ease_in_out_quart(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Symm. slow-fast-slow with a harder snap (quintic in/out).
pub fn ease_in_out_quint(t: f32) -> f32 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Raw progress of a sub-window `[start, start + duration)` within a longer
/// sequence, clamped to `[0, 1]`. Used for staggered/overlapping steps.
pub fn window(elapsed: f32, start: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= start { 1.0 } else { 0.0 };
    }
    ((elapsed - start) / duration).clamp(0.0, 1.0)
}

/// A single finite tween: fixed duration, one ease curve, advanced by delta
/// time. Samples are monotonic and clamp at 1.0.
#[derive(Debug, Clone)]
pub struct Tween {
    elapsed: f32,
    duration: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            ease,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Eased progress in `[0, 1]`.
    pub fn sample(&self) -> f32 {
        let raw = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        (self.ease)(raw)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Interpolate a value along the current sample.
    pub fn lerp(&self, from: f32, to: f32) -> f32 {
        lerp(from, to, self.sample())
    }
}
