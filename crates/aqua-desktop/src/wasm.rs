//! WASM exports for the desktop shell
//!
//! This module provides wasm-bindgen exports wrapping `DesktopShell` with a
//! JS-friendly API, plus a `WebPlatform` that answers geometry queries from
//! live DOM rects and the motion preference from `matchMedia`.
//!
//! DOM id conventions: window frames are `window-{key}`, headers are
//! `window-{key}-header`, dock icons are `dock-{app_id}`.

use wasm_bindgen::prelude::*;

use crate::math::{Rect, Size, Vec2};
use crate::platform::{GeometryProvider, MotionPreference};
use crate::shell::DesktopShell;

// Import js_sys::Date for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Platform backed by the browser DOM
pub struct WebPlatform;

impl WebPlatform {
    fn rect_of(dom_id: &str) -> Option<Rect> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(dom_id)?;
        let r = element.get_bounding_client_rect();
        Some(Rect::new(
            r.x() as f32,
            r.y() as f32,
            r.width() as f32,
            r.height() as f32,
        ))
    }
}

impl GeometryProvider for WebPlatform {
    fn window_rect(&self, key: &str) -> Option<Rect> {
        Self::rect_of(&format!("window-{}", key))
    }

    fn header_rect(&self, key: &str) -> Option<Rect> {
        Self::rect_of(&format!("window-{}-header", key))
    }

    fn icon_rect(&self, app_id: &str) -> Option<Rect> {
        Self::rect_of(&format!("dock-{}", app_id))
    }

    fn viewport_size(&self) -> Size {
        web_sys::window()
            .and_then(|w| {
                let width = w.inner_width().ok()?.as_f64()?;
                let height = w.inner_height().ok()?.as_f64()?;
                Some(Size::new(width as f32, height as f32))
            })
            .unwrap_or(Size::ZERO)
    }
}

impl MotionPreference for WebPlatform {
    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false)
    }
}

/// Desktop shell for WASM - wraps DesktopShell with a JS-friendly API
#[wasm_bindgen]
pub struct AquaShell {
    shell: DesktopShell<WebPlatform>,
}

#[wasm_bindgen]
impl AquaShell {
    /// Create a shell with the standard desktop configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            shell: DesktopShell::standard(WebPlatform),
        }
    }

    /// Create a shell from a JSON configuration string
    #[wasm_bindgen]
    pub fn from_config(json: &str) -> Result<AquaShell, JsValue> {
        DesktopShell::from_json(json, WebPlatform)
            .map(|shell| Self { shell })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    /// Open a window; the launcher icon rect is read from the DOM
    #[wasm_bindgen]
    pub fn open(&mut self, key: &str) {
        self.shell.open(key, None, date_now());
    }

    /// Open a window with a JSON data payload for its content
    #[wasm_bindgen]
    pub fn open_with_data(&mut self, key: &str, data_json: &str) {
        let data = serde_json::from_str(data_json).ok();
        self.shell.open(key, data, date_now());
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close(&mut self, key: &str) {
        self.shell.close(key, date_now());
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize(&mut self, key: &str) {
        self.shell.minimize(key, date_now());
    }

    /// Toggle a window's maximize state
    #[wasm_bindgen]
    pub fn maximize(&mut self, key: &str) {
        self.shell.maximize(key, date_now());
    }

    /// Bring a window to the front
    #[wasm_bindgen]
    pub fn focus(&mut self, key: &str) {
        self.shell.focus(key, date_now());
    }

    /// Handle a dock icon click; returns the resolved action name
    #[wasm_bindgen]
    pub fn dock_click(&mut self, app_id: &str) -> String {
        format!("{:?}", self.shell.dock_click(app_id, date_now()))
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer press on a window header
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, key: &str, x: f32, y: f32) {
        self.shell.pointer_down(key, Vec2::new(x, y), date_now());
    }

    /// Pointer move (drag)
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.shell.pointer_move(Vec2::new(x, y));
    }

    /// Pointer release
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.shell.pointer_up();
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance animations; true while anything is still animating
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.shell.tick(date_now())
    }

    // =========================================================================
    // Render state
    // =========================================================================

    /// A window's visual state as JSON
    #[wasm_bindgen]
    pub fn get_visual_json(&self, key: &str) -> String {
        self.shell
            .visual(key)
            .and_then(|v| serde_json::to_string(v).ok())
            .unwrap_or_else(|| "null".to_string())
    }

    /// All window entries in paint order as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let windows: Vec<_> = self
            .shell
            .windows_by_z()
            .into_iter()
            .map(|(key, entry)| {
                serde_json::json!({
                    "key": key,
                    "entry": entry,
                })
            })
            .collect();
        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    /// The active poof burst for a window as JSON (center + particle frames)
    #[wasm_bindgen]
    pub fn get_poof_json(&self, key: &str) -> String {
        let Some(burst) = self.shell.poof(key) else {
            return "null".to_string();
        };
        let center = burst.center();
        serde_json::to_string(&serde_json::json!({
            "center": { "x": center.x, "y": center.y },
            "frames": burst.sample(date_now()),
        }))
        .unwrap_or_else(|_| "null".to_string())
    }
}

impl Default for AquaShell {
    fn default() -> Self {
        Self::new()
    }
}
