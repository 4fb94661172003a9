//! Presented visual state of a window element
//!
//! A `WindowVisual` is what a renderer paints each frame: whether the element
//! is in the layout at all, and the transform/opacity/corner values the
//! transition system is currently driving. Logical state lives in the
//! registry; this is its visual shadow.

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Corner radius of a windowed (non-maximized) frame, in pixels
pub const WINDOW_CORNER_RADIUS: f32 = 12.0;

/// Transform origin used when interpolating scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformOrigin {
    /// Scale around the element's own center (open/close/maximize)
    #[default]
    Center,
    /// Scale around the bottom edge midpoint (minimize collapse)
    BottomCenter,
}

/// Interpolatable visual properties of a window element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualProps {
    /// Offset from the element's laid-out position
    pub translate: Vec2,
    /// Per-axis scale factor
    pub scale: Vec2,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Corner radius in pixels
    pub corner_radius: f32,
}

impl VisualProps {
    /// Resting properties: no transform, fully opaque, rounded corners
    pub fn identity() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: Vec2::splat(1.0),
            opacity: 1.0,
            corner_radius: WINDOW_CORNER_RADIUS,
        }
    }

    /// Interpolate between two property sets
    pub fn lerp(a: &VisualProps, b: &VisualProps, t: f32) -> VisualProps {
        VisualProps {
            translate: Vec2::lerp(a.translate, b.translate, t),
            scale: Vec2::lerp(a.scale, b.scale, t),
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            corner_radius: a.corner_radius + (b.corner_radius - a.corner_radius) * t,
        }
    }
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::identity()
    }
}

/// Full visual state of one window element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowVisual {
    /// Whether the element participates in layout (`display` in the DOM)
    pub display: bool,
    /// Transform origin for the current/last animation
    pub origin: TransformOrigin,
    /// Current interpolated properties
    pub props: VisualProps,
}

impl WindowVisual {
    /// Hidden element with no leftover transform
    pub fn hidden() -> Self {
        Self {
            display: false,
            origin: TransformOrigin::Center,
            props: VisualProps::identity(),
        }
    }

    /// Visible element at rest
    pub fn shown() -> Self {
        Self {
            display: true,
            origin: TransformOrigin::Center,
            props: VisualProps::identity(),
        }
    }
}

impl Default for WindowVisual {
    fn default() -> Self {
        Self::hidden()
    }
}
