//! Per-window behavior: phase machines, transitions, drag

mod controller;
mod drag;
mod phase;

pub use controller::WindowController;
pub use drag::{ClickTracker, DragHandle, PressAction, DOUBLE_CLICK_MS};
pub use phase::{
    classify, classify_frame, settled_frame, settled_phase, FramePhase, FrameTransition,
    TransitionKind, WindowPhase,
};
