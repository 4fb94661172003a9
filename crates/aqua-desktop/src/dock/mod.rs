//! Dock: application launcher and minimize target
//!
//! The dock owns no window state. Clicking an icon resolves against the
//! registry into exactly one of three intents: open a closed window, restore
//! a minimized one, or minimize an open one.

use crate::math::Rect;
use crate::registry::{DesktopConfig, DockApp, WindowRegistry};

/// What a dock click resolved to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockAction {
    /// The window was closed and is now opening
    Opened,
    /// The window was open and is now minimizing
    Minimized,
    /// The window was minimized and is now restoring
    Restored,
    /// Nothing happened (unknown app, or the icon cannot open)
    Ignored,
}

/// The dock: an ordered list of application icons
pub struct Dock {
    apps: Vec<DockApp>,
}

impl Dock {
    /// Build the dock from static configuration
    pub fn from_config(config: &DesktopConfig) -> Self {
        Self {
            apps: config.dock.clone(),
        }
    }

    /// Icons in display order
    pub fn apps(&self) -> &[DockApp] {
        &self.apps
    }

    /// Look up an app by id
    pub fn app(&self, id: &str) -> Option<&DockApp> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// Resolve a click on a dock icon into a registry mutation
    ///
    /// `icon_rect` is the icon's current on-screen rect, captured at click
    /// time; it seeds the open animation's launch origin.
    pub fn click(
        &self,
        registry: &mut WindowRegistry,
        app_id: &str,
        icon_rect: Option<Rect>,
    ) -> DockAction {
        let Some(app) = self.app(app_id) else {
            log::warn!("dock click on unknown app '{}'", app_id);
            return DockAction::Ignored;
        };
        if !app.can_open {
            return DockAction::Ignored;
        }

        let Some(entry) = registry.get(app_id) else {
            log::warn!("dock app '{}' has no declared window", app_id);
            return DockAction::Ignored;
        };

        if entry.is_minimized {
            registry.open(app_id, None, icon_rect);
            DockAction::Restored
        } else if entry.is_open {
            registry.minimize(app_id);
            DockAction::Minimized
        } else {
            registry.open(app_id, None, icon_rect);
            DockAction::Opened
        }
    }
}
