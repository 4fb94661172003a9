//! Transition and animation module
//!
//! Sampled animation primitives: every animation is a pure value that maps a
//! `now_ms` timestamp to visual properties. Nothing here schedules callbacks;
//! the shell ticks controllers with injected time, which keeps every
//! transition deterministic under test.

mod easing;
mod tween;
mod timeline;
mod poof;

pub use easing::{ease_in_cubic, ease_in_out, ease_out_back, ease_out_cubic, ease_out_quad, ease_out_quart, Ease};
pub use tween::Tween;
pub use timeline::Timeline;
pub use poof::{PoofBurst, PoofFrame};

/// Duration of the open (grow out of icon) animation in milliseconds
pub const OPEN_DURATION_MS: u32 = 400;

/// Duration of the close shrink animation in milliseconds
pub const CLOSE_DURATION_MS: u32 = 200;

/// Duration of the minimize collapse toward the dock in milliseconds
pub const MINIMIZE_DURATION_MS: u32 = 550;

/// Duration of the anticipatory squash before minimize in milliseconds
pub const SQUASH_DURATION_MS: u32 = 120;

/// Duration of the restore-from-minimize fade in milliseconds
pub const RESTORE_DURATION_MS: u32 = 300;

/// Duration of the maximize / restore-frame animation in milliseconds
pub const MAXIMIZE_DURATION_MS: u32 = 400;

/// Base duration of a poof particle in milliseconds
pub const POOF_DURATION_MS: u32 = 400;

/// Maximum random extra duration per poof particle in milliseconds
pub const POOF_DURATION_JITTER_MS: u32 = 200;

/// Number of particles in a poof burst
pub const POOF_PARTICLE_COUNT: usize = 16;
