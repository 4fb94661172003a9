//! Logical state of one window

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Vec2};

/// Resting z-index of closed windows; open windows stack above this
pub const BASE_Z_INDEX: i32 = 1000;

/// Logical state of a window in the registry
///
/// A minimized window stays `is_open = true`; it is collapsed into the dock,
/// not closed. `is_maximized` is orthogonal and only meaningful while open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowEntry {
    /// Window title shown in the chrome
    pub title: String,
    /// Logically present (not necessarily painted)
    pub is_open: bool,
    /// Collapsed into the dock; implies `is_open`
    pub is_minimized: bool,
    /// Occupies the full viewport
    pub is_maximized: bool,
    /// Stacking order; higher paints on top
    pub z_index: i32,
    /// Launcher icon rect captured when the window was opened or restored
    pub icon_position: Option<Rect>,
    /// Distinct minimize anchor, when different from the launch icon
    pub dock_icon_position: Option<Vec2>,
    /// Opaque payload forwarded to window content
    pub data: Option<serde_json::Value>,
    /// Bumped on every effective mutation; controllers re-sync on change
    pub(crate) revision: u64,
}

impl WindowEntry {
    /// Create a closed entry at the base layer
    pub fn closed(title: impl Into<String>, base_z_index: i32) -> Self {
        Self {
            title: title.into(),
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: base_z_index,
            icon_position: None,
            dock_icon_position: None,
            data: None,
            revision: 0,
        }
    }

    /// Current revision of this entry
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
