//! Host environment abstraction
//!
//! Geometry queries and the reduced-motion preference live behind traits so
//! the core runs identically against a real DOM and against fixed rects in
//! tests. All coordinates are viewport space, y-down, CSS pixels.

use std::collections::HashMap;
use crate::math::{Rect, Size, Vec2};

/// Source of on-screen geometry for windows and launcher icons
pub trait GeometryProvider {
    /// Current rect of a window's frame, if it is laid out
    fn window_rect(&self, key: &str) -> Option<Rect>;

    /// Current rect of a window's header (the draggable strip)
    fn header_rect(&self, key: &str) -> Option<Rect>;

    /// Current rect of an app's launcher icon
    fn icon_rect(&self, app_id: &str) -> Option<Rect>;

    /// Size of the viewport windows live in
    fn viewport_size(&self) -> Size;
}

/// Source of the user's motion preference
pub trait MotionPreference {
    /// Whether the user has asked for reduced motion
    ///
    /// Queried at each transition start, not cached, so a live preference
    /// change applies to the next transition.
    fn prefers_reduced_motion(&self) -> bool;
}

/// Fixed-geometry platform for tests and headless use
#[derive(Default)]
pub struct StaticPlatform {
    window_rects: HashMap<String, Rect>,
    header_rects: HashMap<String, Rect>,
    icon_rects: HashMap<String, Rect>,
    viewport: Size,
    reduced_motion: bool,
}

impl StaticPlatform {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn with_window_rect(mut self, key: &str, rect: Rect) -> Self {
        self.window_rects.insert(key.to_string(), rect);
        self
    }

    pub fn with_header_rect(mut self, key: &str, rect: Rect) -> Self {
        self.header_rects.insert(key.to_string(), rect);
        self
    }

    pub fn with_icon_rect(mut self, app_id: &str, rect: Rect) -> Self {
        self.icon_rects.insert(app_id.to_string(), rect);
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn set_window_rect(&mut self, key: &str, rect: Rect) {
        self.window_rects.insert(key.to_string(), rect);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }
}

impl GeometryProvider for StaticPlatform {
    fn window_rect(&self, key: &str) -> Option<Rect> {
        self.window_rects.get(key).copied()
    }

    fn header_rect(&self, key: &str) -> Option<Rect> {
        self.header_rects.get(key).copied()
    }

    fn icon_rect(&self, app_id: &str) -> Option<Rect> {
        self.icon_rects.get(app_id).copied()
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

impl MotionPreference for StaticPlatform {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Default minimize anchor when neither a dock icon position nor a launch
/// icon rect is known: bottom-center of the viewport, just above the edge.
pub fn fallback_minimize_anchor(viewport: Size) -> Vec2 {
    Vec2::new(viewport.width / 2.0, viewport.height - 40.0)
}
