//! Window registry: mutation API and stacking order

use std::collections::HashMap;
use crate::math::Rect;
use super::{DesktopConfig, WindowEntry, WindowKey};

/// Registry of all windows, keyed by stable identifier
///
/// Windows are pre-declared from configuration; the set never grows or
/// shrinks afterwards, only the entries' fields mutate. Every operation on
/// an unknown key is a silent no-op, so callers never pre-validate.
///
/// The `next_z_index` counter is registry-wide and only ever increments; it
/// is the sole arbiter of stacking order and of "most recently interacted
/// with". All mutation goes through `&mut self`, so assigned values are
/// unique by construction.
pub struct WindowRegistry {
    windows: HashMap<WindowKey, WindowEntry>,
    next_z_index: i32,
    base_z_index: i32,
}

impl WindowRegistry {
    /// Create an empty registry with the given base layer value
    pub fn new(base_z_index: i32) -> Self {
        Self {
            windows: HashMap::new(),
            next_z_index: base_z_index + 1,
            base_z_index,
        }
    }

    /// Build a registry from static configuration, all windows closed
    pub fn from_config(config: &DesktopConfig) -> Self {
        let mut registry = Self::new(config.base_z_index);
        for decl in &config.windows {
            registry.declare(&decl.key, &decl.title);
        }
        registry
    }

    /// Pre-declare a window in the closed state (startup only)
    pub fn declare(&mut self, key: &str, title: &str) {
        self.windows.insert(
            key.to_string(),
            WindowEntry::closed(title, self.base_z_index),
        );
    }

    /// Get a window entry by key
    pub fn get(&self, key: &str) -> Option<&WindowEntry> {
        self.windows.get(key)
    }

    /// Check whether a key is declared
    pub fn contains(&self, key: &str) -> bool {
        self.windows.contains_key(key)
    }

    /// Iterate all declared keys
    pub fn keys(&self) -> impl Iterator<Item = &WindowKey> {
        self.windows.keys()
    }

    /// Get entries sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<(&WindowKey, &WindowEntry)> {
        let mut entries: Vec<_> = self.windows.iter().collect();
        entries.sort_by_key(|(_, e)| e.z_index);
        entries
    }

    /// Open a window (or restore it from minimize) and bring it to the front
    ///
    /// `data` replaces the stored payload only when non-null; `icon_position`
    /// always replaces the stored rect, including with `None`.
    pub fn open(&mut self, key: &str, data: Option<serde_json::Value>, icon_position: Option<Rect>) {
        let next = self.next_z_index;
        let Some(entry) = self.windows.get_mut(key) else {
            return;
        };

        entry.is_open = true;
        entry.is_minimized = false;
        entry.z_index = next;
        if data.is_some() {
            entry.data = data;
        }
        entry.icon_position = icon_position;
        entry.revision += 1;
        self.next_z_index += 1;
    }

    /// Close a window and reset its state to the base layer
    pub fn close(&mut self, key: &str) {
        let base = self.base_z_index;
        let Some(entry) = self.windows.get_mut(key) else {
            return;
        };

        entry.is_open = false;
        entry.is_minimized = false;
        entry.is_maximized = false;
        entry.z_index = base;
        entry.data = None;
        entry.icon_position = None;
        entry.revision += 1;
    }

    /// Bring a window to the front without altering any other field
    pub fn focus(&mut self, key: &str) {
        let next = self.next_z_index;
        let Some(entry) = self.windows.get_mut(key) else {
            return;
        };

        entry.z_index = next;
        entry.revision += 1;
        self.next_z_index += 1;
    }

    /// Minimize a window (hidden but still open)
    pub fn minimize(&mut self, key: &str) {
        let Some(entry) = self.windows.get_mut(key) else {
            return;
        };

        entry.is_minimized = true;
        entry.revision += 1;
    }

    /// Toggle the maximize state of a window
    pub fn maximize(&mut self, key: &str) {
        let Some(entry) = self.windows.get_mut(key) else {
            return;
        };

        entry.is_maximized = !entry.is_maximized;
        entry.revision += 1;
    }

    /// Record a distinct minimize anchor for a window
    pub fn set_dock_icon_position(&mut self, key: &str, position: Option<crate::math::Vec2>) {
        let Some(entry) = self.windows.get_mut(key) else {
            return;
        };

        entry.dock_icon_position = position;
        entry.revision += 1;
    }

    /// The next z-index that will be assigned
    #[inline]
    pub fn next_z_index(&self) -> i32 {
        self.next_z_index
    }

    /// The base layer value closed windows rest at
    #[inline]
    pub fn base_z_index(&self) -> i32 {
        self.base_z_index
    }

    /// Number of declared windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}
