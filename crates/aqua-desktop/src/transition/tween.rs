//! Single property tween

use crate::visual::VisualProps;
use super::Ease;

/// A single interpolation between two visual property sets
#[derive(Clone, Debug)]
pub struct Tween {
    /// Start time (ms timestamp)
    start_ms: f64,
    /// Duration in milliseconds
    duration_ms: u32,
    /// Easing curve
    ease: Ease,
    /// Starting properties
    from: VisualProps,
    /// Target properties
    to: VisualProps,
}

impl Tween {
    /// Create a new tween
    pub fn new(start_ms: f64, duration_ms: u32, ease: Ease, from: VisualProps, to: VisualProps) -> Self {
        Self {
            start_ms,
            duration_ms,
            ease,
            from,
            to,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if the tween is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Sample the current properties
    pub fn sample(&self, now_ms: f64) -> VisualProps {
        let t = self.ease.apply(self.progress(now_ms));
        VisualProps::lerp(&self.from, &self.to, t)
    }

    /// Get the target properties
    pub fn final_props(&self) -> VisualProps {
        self.to
    }
}
