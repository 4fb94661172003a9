//! Lifecycle and frame phase machines
//!
//! Transition classification is an ordered table lookup over the current
//! phase and the freshly observed registry booleans. At most one lifecycle
//! transition fires per update; the frame (maximize) machine is evaluated
//! independently in the same cycle.

/// Lifecycle phase of a window element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPhase {
    /// Not present; element hidden
    #[default]
    Closed,
    /// Open animation in flight
    Opening,
    /// Visible and at rest
    Open,
    /// Minimize animation in flight
    Minimizing,
    /// Collapsed into the dock; element hidden
    Minimized,
    /// Restore-from-minimize animation in flight
    Restoring,
    /// Close animation in flight
    Closing,
}

impl WindowPhase {
    /// Whether this phase counts as "was open" for classification
    pub fn was_open(self) -> bool {
        matches!(
            self,
            Self::Opening | Self::Open | Self::Minimizing | Self::Minimized | Self::Restoring
        )
    }

    /// Whether this phase counts as "was minimized" for classification
    pub fn was_minimized(self) -> bool {
        matches!(self, Self::Minimizing | Self::Minimized)
    }
}

/// Frame (maximize) phase of a window element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FramePhase {
    /// Normal rounded frame
    #[default]
    Windowed,
    /// Maximize animation in flight
    Maximizing,
    /// Covering the full viewport, square corners
    Maximized,
    /// Restore-to-windowed animation in flight
    RestoringFrame,
}

impl FramePhase {
    /// Whether this phase counts as "was maximized" for classification
    pub fn was_maximized(self) -> bool {
        matches!(self, Self::Maximizing | Self::Maximized)
    }
}

/// A lifecycle transition the controller must animate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    Open,
    Close,
    Minimize,
    Restore,
}

/// A frame transition the controller must animate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameTransition {
    Maximize,
    RestoreFrame,
}

/// Classify an observed registry state against the current lifecycle phase
///
/// Checked in priority order; branches are mutually exclusive. Returns
/// `None` when nothing fires, which covers both "no change" and states the
/// table has no animation for (closing an already-minimized window); the
/// caller snaps to the settled phase in that case.
pub fn classify(phase: WindowPhase, is_open: bool, is_minimized: bool) -> Option<TransitionKind> {
    let was_open = phase.was_open();
    let was_minimized = phase.was_minimized();

    if !was_open && is_open && !is_minimized {
        Some(TransitionKind::Open)
    } else if was_open && !is_open && !was_minimized {
        Some(TransitionKind::Close)
    } else if is_open && !was_minimized && is_minimized {
        Some(TransitionKind::Minimize)
    } else if was_minimized && !is_minimized && is_open {
        Some(TransitionKind::Restore)
    } else {
        None
    }
}

/// The resting phase matching an observed registry state
pub fn settled_phase(is_open: bool, is_minimized: bool) -> WindowPhase {
    if !is_open {
        WindowPhase::Closed
    } else if is_minimized {
        WindowPhase::Minimized
    } else {
        WindowPhase::Open
    }
}

/// Classify the frame machine against the observed maximize flag
pub fn classify_frame(frame: FramePhase, is_maximized: bool) -> Option<FrameTransition> {
    let was_maximized = frame.was_maximized();

    if !was_maximized && is_maximized {
        Some(FrameTransition::Maximize)
    } else if was_maximized && !is_maximized {
        Some(FrameTransition::RestoreFrame)
    } else {
        None
    }
}

/// The resting frame phase matching an observed maximize flag
pub fn settled_frame(is_maximized: bool) -> FramePhase {
    if is_maximized {
        FramePhase::Maximized
    } else {
        FramePhase::Windowed
    }
}
