//! Core geometry types
//!
//! Screen-space primitives shared by the registry, the controllers, and the
//! transition system. All coordinates are viewport pixels.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
