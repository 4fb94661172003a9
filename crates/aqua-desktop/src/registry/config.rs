//! Static desktop configuration

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use super::BASE_Z_INDEX;

/// Declaration of one window in the fixed startup set
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindowDecl {
    /// Stable identifier ("safari", "terminal", ...)
    pub key: String,
    /// Title shown in the window chrome
    pub title: String,
}

/// One application icon in the dock
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DockApp {
    /// Window key this icon launches
    pub id: String,
    /// Display name (tooltip)
    pub name: String,
    /// Icon asset name
    pub icon: String,
    /// Whether clicking the icon does anything
    #[serde(default = "default_can_open")]
    pub can_open: bool,
}

fn default_can_open() -> bool {
    true
}

/// Static configuration: the fixed window set and the dock contents
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// Resting z-index for closed windows
    #[serde(default = "default_base_z_index")]
    pub base_z_index: i32,
    /// Pre-declared windows
    pub windows: Vec<WindowDecl>,
    /// Dock applications, in display order
    pub dock: Vec<DockApp>,
}

fn default_base_z_index() -> i32 {
    BASE_Z_INDEX
}

impl DesktopConfig {
    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        serde_json::from_str(json).map_err(|e| DesktopError::Config(e.to_string()))
    }

    /// The standard desktop: browser and terminal windows, plus a few
    /// decorative dock icons that cannot open
    pub fn standard() -> Self {
        Self {
            base_z_index: BASE_Z_INDEX,
            windows: vec![
                WindowDecl {
                    key: "safari".to_string(),
                    title: "Safari".to_string(),
                },
                WindowDecl {
                    key: "terminal".to_string(),
                    title: "Terminal".to_string(),
                },
            ],
            dock: vec![
                DockApp {
                    id: "safari".to_string(),
                    name: "Safari".to_string(),
                    icon: "safari.png".to_string(),
                    can_open: true,
                },
                DockApp {
                    id: "terminal".to_string(),
                    name: "Terminal".to_string(),
                    icon: "terminal.png".to_string(),
                    can_open: true,
                },
                DockApp {
                    id: "photos".to_string(),
                    name: "Photos".to_string(),
                    icon: "photos.png".to_string(),
                    can_open: false,
                },
                DockApp {
                    id: "trash".to_string(),
                    name: "Trash".to_string(),
                    icon: "trash.png".to_string(),
                    can_open: false,
                },
            ],
        }
    }
}
