//! Easing functions for animations
//!
//! The named curves mirror the motion tokens of the original design:
//! quart-out for opens, cubic-in for closes and minimizes, quad-out for the
//! anticipatory squash, and overshooting back-out for maximize/restore.

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-in cubic function
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Ease-out quadratic function
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(2)
}

/// Ease-out quartic function
#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Ease-out with overshoot; `overshoot` controls how far past the target
/// the curve swings before settling (1.7 is the classic back ease)
#[inline]
pub fn ease_out_back(t: f32, overshoot: f32) -> f32 {
    let c1 = overshoot;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}

/// Easing curve selector carried by tweens
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    InOutCubic,
    InCubic,
    OutQuad,
    OutCubic,
    OutQuart,
    OutBack(f32),
}

impl Ease {
    /// Apply the curve to a normalized progress value
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::InOutCubic => ease_in_out(t),
            Ease::InCubic => ease_in_cubic(t),
            Ease::OutQuad => ease_out_quad(t),
            Ease::OutCubic => ease_out_cubic(t),
            Ease::OutQuart => ease_out_quart(t),
            Ease::OutBack(overshoot) => ease_out_back(t, overshoot),
        }
    }
}
