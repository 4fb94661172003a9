//! Header drag and double-click detection

use crate::math::Vec2;

/// Two presses closer together than this toggle maximize
pub const DOUBLE_CLICK_MS: f64 = 300.0;

/// What a header press resolved to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressAction {
    /// Bring the window to the front and start tracking a drag
    Focus,
    /// Second click within the double-click window
    ToggleMaximize,
}

/// An active header drag
///
/// Captures the pointer position and the element's translate at press time;
/// moves are applied as a direct transform relative to both.
#[derive(Clone, Copy, Debug)]
pub struct DragHandle {
    grab: Vec2,
    base_translate: Vec2,
}

impl DragHandle {
    pub fn new(pointer: Vec2, base_translate: Vec2) -> Self {
        Self {
            grab: pointer,
            base_translate,
        }
    }

    /// The translate the element should have for the given pointer position
    pub fn translate_for(&self, pointer: Vec2) -> Vec2 {
        self.base_translate + (pointer - self.grab)
    }
}

/// Detects double clicks from a stream of press timestamps
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickTracker {
    last_press_ms: Option<f64>,
}

impl ClickTracker {
    /// Record a press; true when it completes a double click
    pub fn press(&mut self, now_ms: f64) -> bool {
        let double = self
            .last_press_ms
            .is_some_and(|last| now_ms - last < DOUBLE_CLICK_MS);
        // A completed double click does not seed a triple
        self.last_press_ms = if double { None } else { Some(now_ms) };
        double
    }

    /// Forget the pending press (window closed or minimized)
    pub fn reset(&mut self) {
        self.last_press_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_translate() {
        let drag = DragHandle::new(Vec2::new(400.0, 120.0), Vec2::new(10.0, -5.0));
        let t = drag.translate_for(Vec2::new(430.0, 100.0));
        assert!((t.x - 40.0).abs() < 0.001);
        assert!((t.y - -25.0).abs() < 0.001);
    }

    #[test]
    fn test_double_click_within_threshold() {
        let mut clicks = ClickTracker::default();
        assert!(!clicks.press(1000.0));
        assert!(clicks.press(1200.0));
    }

    #[test]
    fn test_slow_clicks_do_not_double() {
        let mut clicks = ClickTracker::default();
        assert!(!clicks.press(1000.0));
        assert!(!clicks.press(1000.0 + DOUBLE_CLICK_MS));
    }

    #[test]
    fn test_triple_click_is_one_double() {
        let mut clicks = ClickTracker::default();
        assert!(!clicks.press(0.0));
        assert!(clicks.press(100.0));
        assert!(!clicks.press(200.0));
    }
}
