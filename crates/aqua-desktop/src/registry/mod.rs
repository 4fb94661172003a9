//! Window registry module
//!
//! The registry is the single source of truth for logical window state.
//! Controllers and the dock read it; nothing else owns window booleans.

mod entry;
mod registry;
mod config;

pub use entry::{WindowEntry, BASE_Z_INDEX};
pub use registry::WindowRegistry;
pub use config::{DesktopConfig, DockApp, WindowDecl};

/// Stable window identifier ("safari", "terminal", ...)
pub type WindowKey = String;
