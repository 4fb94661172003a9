//! Window manager core for the Aqua web desktop
//!
//! This crate provides the state machine and animation orchestration behind
//! a browser-hosted desktop:
//! - Window registry (open, close, focus, minimize, maximize, z-order)
//! - Per-window lifecycle controllers with an explicit phase machine
//! - Sampled transitions (open, close + poof burst, minimize genie, restore,
//!   maximize) with injectable time
//! - Header drag-to-move and double-click maximize
//! - Reduced-motion support
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`registry`]: Logical window state and its mutation API
//! - [`dock`]: Icon launcher, bridging clicks to registry operations
//! - [`transition`]: Easing, tweens, timelines, the poof particle burst
//! - [`controller`]: Per-window phase machines and transition drivers
//! - [`platform`]: Geometry and motion-preference traits the host implements
//! - [`shell`]: `DesktopShell`, the embeddable top-level API
//!
//! ## Example
//!
//! ```rust
//! use aqua_desktop::{DesktopShell, Size, StaticPlatform};
//!
//! let platform = StaticPlatform::new(Size::new(1440.0, 900.0));
//! let mut shell = DesktopShell::standard(platform);
//!
//! shell.open("safari", None, 0.0);
//! assert!(shell.tick(16.0)); // animation in flight
//! assert!(!shell.tick(400.0)); // settled
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state and animation logic is testable without a browser
//! 2. **Time Abstraction**: Every animation samples an injected `now_ms` timestamp
//! 3. **Single Source of Truth**: Logical state lives only in the registry;
//!    controllers derive everything visual from it

pub mod controller;
pub mod dock;
pub mod math;
pub mod platform;
pub mod registry;
pub mod transition;

mod error;
mod shell;
mod visual;

pub use controller::{FramePhase, WindowController, WindowPhase};
pub use dock::{Dock, DockAction};
pub use error::{DesktopError, DesktopResult};
pub use math::{Rect, Size, Vec2};
pub use platform::{GeometryProvider, MotionPreference, StaticPlatform};
pub use registry::{DesktopConfig, WindowEntry, WindowKey, WindowRegistry};
pub use shell::DesktopShell;
pub use transition::{PoofBurst, PoofFrame};
pub use visual::{TransformOrigin, VisualProps, WindowVisual, WINDOW_CORNER_RADIUS};

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;
