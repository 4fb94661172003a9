//! Desktop shell: registry, dock, and controllers under one API
//!
//! The shell is what a frontend embeds. It owns the registry and one
//! controller per declared window, routes pointer input, and exposes a
//! single `tick` that advances every animation against injected time.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::controller::{PressAction, WindowController};
use crate::dock::{Dock, DockAction};
use crate::error::DesktopResult;
use crate::math::Vec2;
use crate::platform::{GeometryProvider, MotionPreference};
use crate::registry::{DesktopConfig, WindowEntry, WindowKey, WindowRegistry};
use crate::transition::PoofBurst;
use crate::visual::WindowVisual;

/// The desktop shell
pub struct DesktopShell<P> {
    platform: P,
    registry: WindowRegistry,
    dock: Dock,
    controllers: HashMap<WindowKey, WindowController>,
    rng: StdRng,
    drag_target: Option<WindowKey>,
}

impl<P: GeometryProvider + MotionPreference> DesktopShell<P> {
    /// Build a shell from configuration
    pub fn new(config: &DesktopConfig, platform: P) -> Self {
        let registry = WindowRegistry::from_config(config);
        let controllers = config
            .windows
            .iter()
            .map(|decl| (decl.key.clone(), WindowController::new(&decl.key)))
            .collect();

        Self {
            platform,
            registry,
            dock: Dock::from_config(config),
            controllers,
            rng: StdRng::from_entropy(),
            drag_target: None,
        }
    }

    /// Build a shell from a JSON configuration string
    pub fn from_json(json: &str, platform: P) -> DesktopResult<Self> {
        Ok(Self::new(&DesktopConfig::from_json(json)?, platform))
    }

    /// Build a shell with the standard desktop configuration
    pub fn standard(platform: P) -> Self {
        Self::new(&DesktopConfig::standard(), platform)
    }

    /// The logical window registry
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// The dock
    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    /// The host platform
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the host platform
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// A window's presented visual state
    pub fn visual(&self, key: &str) -> Option<&WindowVisual> {
        self.controllers.get(key).map(|c| c.visual())
    }

    /// A window's active close burst, if one is playing
    pub fn poof(&self, key: &str) -> Option<&PoofBurst> {
        self.controllers.get(key).and_then(|c| c.poof())
    }

    /// A window's controller
    pub fn controller(&self, key: &str) -> Option<&WindowController> {
        self.controllers.get(key)
    }

    /// Window entries in paint order (back to front)
    pub fn windows_by_z(&self) -> Vec<(&WindowKey, &WindowEntry)> {
        self.registry.windows_by_z()
    }

    /// Open a window, capturing the launcher icon rect as animation origin
    pub fn open(&mut self, key: &str, data: Option<serde_json::Value>, now_ms: f64) {
        let icon = self.platform.icon_rect(key);
        self.registry.open(key, data, icon);
        self.sync(now_ms);
    }

    /// Close a window (chrome button)
    pub fn close(&mut self, key: &str, now_ms: f64) {
        self.registry.close(key);
        self.sync(now_ms);
    }

    /// Minimize a window (chrome button)
    pub fn minimize(&mut self, key: &str, now_ms: f64) {
        self.registry.minimize(key);
        self.sync(now_ms);
    }

    /// Toggle a window's maximize state (chrome button)
    pub fn maximize(&mut self, key: &str, now_ms: f64) {
        self.registry.maximize(key);
        self.sync(now_ms);
    }

    /// Bring a window to the front
    pub fn focus(&mut self, key: &str, now_ms: f64) {
        self.registry.focus(key);
        self.sync(now_ms);
    }

    /// Record a distinct minimize anchor for a window
    pub fn set_dock_icon_position(&mut self, key: &str, position: Option<Vec2>, now_ms: f64) {
        self.registry.set_dock_icon_position(key, position);
        self.sync(now_ms);
    }

    /// Handle a click on a dock icon
    pub fn dock_click(&mut self, app_id: &str, now_ms: f64) -> DockAction {
        let icon = self.platform.icon_rect(app_id);
        let action = self.dock.click(&mut self.registry, app_id, icon);
        self.sync(now_ms);
        action
    }

    /// Handle a pointer press on a window header
    pub fn pointer_down(&mut self, key: &str, pointer: Vec2, now_ms: f64) {
        let Some(controller) = self.controllers.get_mut(key) else {
            return;
        };
        match controller.press_header(pointer, now_ms) {
            Some(PressAction::Focus) => {
                self.drag_target = Some(key.to_string());
                self.registry.focus(key);
            }
            Some(PressAction::ToggleMaximize) => {
                // Every press raises the window, the toggling one included
                self.registry.focus(key);
                self.registry.maximize(key);
            }
            None => {}
        }
        self.sync(now_ms);
    }

    /// Handle a pointer move while a drag may be active
    pub fn pointer_move(&mut self, pointer: Vec2) {
        let Some(key) = &self.drag_target else {
            return;
        };
        if let Some(controller) = self.controllers.get_mut(key) {
            controller.drag_to(pointer);
        }
    }

    /// Handle pointer release
    pub fn pointer_up(&mut self) {
        if let Some(key) = self.drag_target.take() {
            if let Some(controller) = self.controllers.get_mut(&key) {
                controller.release();
            }
        }
    }

    /// Advance all animations; true while any window is still animating
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.sync(now_ms);

        let mut animating = false;
        for controller in self.controllers.values_mut() {
            animating |= controller.tick(now_ms);
        }
        animating
    }

    /// Let every controller react to registry changes since its last look
    fn sync(&mut self, now_ms: f64) {
        for (key, controller) in self.controllers.iter_mut() {
            controller.observe(
                self.registry.get(key),
                &self.platform,
                &self.platform,
                &mut self.rng,
                now_ms,
            );
        }
    }
}
