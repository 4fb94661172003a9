//! Per-window controller: reacts to registry changes, drives transitions

use rand::Rng;

use crate::math::Vec2;
use crate::platform::{fallback_minimize_anchor, GeometryProvider, MotionPreference};
use crate::registry::{WindowEntry, WindowKey};
use crate::transition::{
    Ease, PoofBurst, Timeline, Tween, CLOSE_DURATION_MS, MAXIMIZE_DURATION_MS,
    MINIMIZE_DURATION_MS, OPEN_DURATION_MS, RESTORE_DURATION_MS, SQUASH_DURATION_MS,
};
use crate::visual::{TransformOrigin, VisualProps, WindowVisual, WINDOW_CORNER_RADIUS};

use super::drag::{ClickTracker, DragHandle, PressAction};
use super::phase::{
    classify, classify_frame, settled_frame, settled_phase, FramePhase, FrameTransition,
    TransitionKind, WindowPhase,
};

/// A running lifecycle animation: one tween, or a sequenced timeline
enum Track {
    Single(Tween),
    Sequence(Timeline),
}

impl Track {
    fn is_complete(&self, now_ms: f64) -> bool {
        match self {
            Self::Single(t) => t.is_complete(now_ms),
            Self::Sequence(t) => t.is_complete(now_ms),
        }
    }

    fn sample(&self, now_ms: f64) -> VisualProps {
        match self {
            Self::Single(t) => t.sample(now_ms),
            Self::Sequence(t) => t.sample(now_ms),
        }
    }

    fn final_props(&self) -> VisualProps {
        match self {
            Self::Single(t) => t.final_props(),
            Self::Sequence(t) => t.final_props(),
        }
    }
}

/// Controller for one window element
///
/// Observes the window's registry entry through its revision counter,
/// classifies each change against the lifecycle and frame phase machines,
/// and drives the matching animation. Owns the element's `WindowVisual`,
/// the close burst, and the header drag state.
pub struct WindowController {
    key: WindowKey,
    phase: WindowPhase,
    frame: FramePhase,
    last_revision: Option<u64>,
    visual: WindowVisual,
    lifecycle: Option<(TransitionKind, Track)>,
    frame_anim: Option<(FrameTransition, Tween)>,
    poof: Option<PoofBurst>,
    clicks: ClickTracker,
    drag: Option<DragHandle>,
    missing_warned: bool,
}

impl WindowController {
    /// Create an idle controller for a closed window
    pub fn new(key: impl Into<WindowKey>) -> Self {
        Self {
            key: key.into(),
            phase: WindowPhase::Closed,
            frame: FramePhase::Windowed,
            last_revision: None,
            visual: WindowVisual::hidden(),
            lifecycle: None,
            frame_anim: None,
            poof: None,
            clicks: ClickTracker::default(),
            drag: None,
            missing_warned: false,
        }
    }

    /// The window key this controller drives
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Current frame phase
    pub fn frame_phase(&self) -> FramePhase {
        self.frame
    }

    /// The element's presented visual state
    pub fn visual(&self) -> &WindowVisual {
        &self.visual
    }

    /// The active close burst, if one is playing
    pub fn poof(&self) -> Option<&PoofBurst> {
        self.poof.as_ref()
    }

    /// Whether any animation is still running
    pub fn is_animating(&self) -> bool {
        self.lifecycle.is_some() || self.frame_anim.is_some() || self.poof.is_some()
    }

    /// React to the window's registry entry if its revision advanced
    pub fn observe<R: Rng>(
        &mut self,
        entry: Option<&WindowEntry>,
        geometry: &dyn GeometryProvider,
        motion: &dyn MotionPreference,
        rng: &mut R,
        now_ms: f64,
    ) {
        let Some(entry) = entry else {
            if !self.missing_warned {
                log::warn!("controller has no registry entry for window '{}'", self.key);
                self.missing_warned = true;
            }
            return;
        };

        if self.last_revision == Some(entry.revision()) {
            return;
        }
        self.last_revision = Some(entry.revision());

        match classify(self.phase, entry.is_open, entry.is_minimized) {
            Some(kind) => self.begin(kind, entry, geometry, motion, rng, now_ms),
            None => {
                // No animation for this path (e.g. close while minimized):
                // adopt the resting state directly
                let settled = settled_phase(entry.is_open, entry.is_minimized);
                if settled != self.phase && self.lifecycle.is_none() {
                    self.snap_to(settled);
                }
            }
        }

        if let Some(kind) = classify_frame(self.frame, entry.is_maximized) {
            self.begin_frame(kind, motion, now_ms);
        }
    }

    /// Advance animations; true while anything is still running
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some((kind, track)) = self.lifecycle.take() {
            // A close waits for its burst before finalizing, so the renderer
            // never holds particles for a window that no longer exists
            let burst_pending = kind == TransitionKind::Close
                && self.poof.as_ref().is_some_and(|p| !p.is_complete(now_ms));

            if track.is_complete(now_ms) && !burst_pending {
                self.finalize(kind, track.final_props());
            } else {
                self.visual.props = track.sample(now_ms);
                self.lifecycle = Some((kind, track));
            }
        } else if let Some((kind, tween)) = self.frame_anim.take() {
            if tween.is_complete(now_ms) {
                self.visual.props = tween.final_props();
                self.frame = match kind {
                    FrameTransition::Maximize => FramePhase::Maximized,
                    FrameTransition::RestoreFrame => FramePhase::Windowed,
                };
            } else {
                self.visual.props = tween.sample(now_ms);
                self.frame_anim = Some((kind, tween));
            }
        }

        if self.poof.as_ref().is_some_and(|p| p.is_complete(now_ms)) {
            self.poof = None;
        }

        self.is_animating()
    }

    /// Handle a press on the window header
    ///
    /// Returns what the shell should do with the registry: focus (and start
    /// a drag), or toggle maximize on a double click. `None` while hidden.
    pub fn press_header(&mut self, pointer: Vec2, now_ms: f64) -> Option<PressAction> {
        if !self.visual.display {
            return None;
        }

        if self.clicks.press(now_ms) {
            self.drag = None;
            return Some(PressAction::ToggleMaximize);
        }

        // A maximized frame is pinned; the press still focuses
        if self.frame == FramePhase::Windowed && self.lifecycle.is_none() {
            self.drag = Some(DragHandle::new(pointer, self.visual.props.translate));
        }
        Some(PressAction::Focus)
    }

    /// Handle a pointer move during a header drag
    pub fn drag_to(&mut self, pointer: Vec2) {
        if self.lifecycle.is_some() {
            return;
        }
        if let Some(drag) = self.drag {
            self.visual.props.translate = drag.translate_for(pointer);
        }
    }

    /// Handle pointer release: ends any active drag
    pub fn release(&mut self) {
        self.drag = None;
    }

    fn begin<R: Rng>(
        &mut self,
        kind: TransitionKind,
        entry: &WindowEntry,
        geometry: &dyn GeometryProvider,
        motion: &dyn MotionPreference,
        rng: &mut R,
        now_ms: f64,
    ) {
        // Cancel rule: a new transition drops everything this controller
        // previously started on the element, burst and frame tween included
        self.lifecycle = None;
        self.poof = None;
        if self.frame_anim.take().is_some() {
            self.frame = settled_frame(entry.is_maximized);
        }

        if motion.prefers_reduced_motion() {
            match kind {
                TransitionKind::Open | TransitionKind::Restore => {
                    self.visual = WindowVisual::shown();
                    self.phase = WindowPhase::Open;
                }
                TransitionKind::Close => self.snap_to(WindowPhase::Closed),
                TransitionKind::Minimize => self.snap_to(WindowPhase::Minimized),
            }
            return;
        }

        match kind {
            TransitionKind::Open => {
                let from = match (entry.icon_position, geometry.window_rect(&self.key)) {
                    // Grow out of the launcher icon
                    (Some(icon), Some(win)) => VisualProps {
                        translate: icon.center() - win.center(),
                        scale: Vec2::splat(0.1),
                        opacity: 0.0,
                        corner_radius: WINDOW_CORNER_RADIUS,
                    },
                    // Rise from slightly below
                    _ => VisualProps {
                        translate: Vec2::new(0.0, 40.0),
                        scale: Vec2::splat(0.8),
                        opacity: 0.0,
                        corner_radius: WINDOW_CORNER_RADIUS,
                    },
                };
                self.visual.display = true;
                self.visual.origin = TransformOrigin::Center;
                self.visual.props = from;
                self.lifecycle = Some((
                    kind,
                    Track::Single(Tween::new(
                        now_ms,
                        OPEN_DURATION_MS,
                        Ease::OutQuart,
                        from,
                        VisualProps::identity(),
                    )),
                ));
                self.phase = WindowPhase::Opening;
            }
            TransitionKind::Close => {
                // Start from wherever the element currently is, so a close
                // that interrupts an open picks up mid-flight
                let from = self.visual.props;
                let to = VisualProps {
                    scale: Vec2::splat(0.5),
                    opacity: 0.0,
                    ..from
                };
                self.drag = None;
                self.visual.origin = TransformOrigin::Center;
                self.lifecycle = Some((
                    kind,
                    Track::Single(Tween::new(now_ms, CLOSE_DURATION_MS, Ease::InCubic, from, to)),
                ));
                if let Some(win) = geometry.window_rect(&self.key) {
                    self.poof = Some(PoofBurst::spawn(win.center(), now_ms, rng));
                }
                self.phase = WindowPhase::Closing;
            }
            TransitionKind::Minimize => {
                let Some(win) = geometry.window_rect(&self.key) else {
                    // Element not laid out; nothing to animate
                    self.snap_to(WindowPhase::Minimized);
                    return;
                };
                let anchor = entry
                    .dock_icon_position
                    .or_else(|| entry.icon_position.map(|r| r.center()))
                    .unwrap_or_else(|| fallback_minimize_anchor(geometry.viewport_size()));

                let from = self.visual.props;
                let squash = VisualProps {
                    scale: Vec2::new(0.98, 1.04),
                    ..from
                };
                let collapsed = VisualProps {
                    translate: from.translate + (anchor - win.bottom_center()),
                    scale: Vec2::new(0.15, 0.0),
                    opacity: 0.0,
                    corner_radius: from.corner_radius,
                };
                self.drag = None;
                self.visual.origin = TransformOrigin::BottomCenter;
                self.lifecycle = Some((
                    kind,
                    Track::Sequence(
                        Timeline::new(now_ms, from)
                            .then(SQUASH_DURATION_MS, Ease::OutQuad, squash)
                            .then(MINIMIZE_DURATION_MS, Ease::InCubic, collapsed),
                    ),
                ));
                self.phase = WindowPhase::Minimizing;
            }
            TransitionKind::Restore => {
                // Asymmetric with minimize: no travel back from the dock
                let from = VisualProps {
                    translate: Vec2::ZERO,
                    scale: Vec2::splat(0.95),
                    opacity: 0.0,
                    corner_radius: WINDOW_CORNER_RADIUS,
                };
                self.visual.display = true;
                self.visual.origin = TransformOrigin::Center;
                self.visual.props = from;
                self.lifecycle = Some((
                    kind,
                    Track::Single(Tween::new(
                        now_ms,
                        RESTORE_DURATION_MS,
                        Ease::OutCubic,
                        from,
                        VisualProps::identity(),
                    )),
                ));
                self.phase = WindowPhase::Restoring;
            }
        }
    }

    fn begin_frame(&mut self, kind: FrameTransition, motion: &dyn MotionPreference, now_ms: f64) {
        self.frame_anim = None;

        let maximized_props = VisualProps {
            translate: Vec2::ZERO,
            scale: Vec2::splat(1.0),
            opacity: 1.0,
            corner_radius: 0.0,
        };

        // A hidden element re-frames without animating
        if !self.visual.display || motion.prefers_reduced_motion() {
            match kind {
                FrameTransition::Maximize => {
                    if self.visual.display {
                        self.visual.props = maximized_props;
                    }
                    self.frame = FramePhase::Maximized;
                }
                FrameTransition::RestoreFrame => {
                    if self.visual.display {
                        self.visual.props = VisualProps::identity();
                    }
                    self.frame = FramePhase::Windowed;
                }
            }
            return;
        }

        match kind {
            FrameTransition::Maximize => {
                // The frame snaps to the full-viewport layout; any drag
                // offset is discarded with the old layout geometry
                let from = VisualProps {
                    translate: Vec2::ZERO,
                    scale: Vec2::splat(0.95),
                    opacity: 0.85,
                    corner_radius: WINDOW_CORNER_RADIUS,
                };
                self.drag = None;
                self.visual.origin = TransformOrigin::Center;
                self.visual.props = from;
                self.frame_anim = Some((
                    kind,
                    Tween::new(now_ms, MAXIMIZE_DURATION_MS, Ease::OutBack(1.2), from, maximized_props),
                ));
                self.frame = FramePhase::Maximizing;
            }
            FrameTransition::RestoreFrame => {
                let from = VisualProps {
                    corner_radius: 0.0,
                    ..self.visual.props
                };
                self.visual.origin = TransformOrigin::Center;
                self.frame_anim = Some((
                    kind,
                    Tween::new(
                        now_ms,
                        MAXIMIZE_DURATION_MS,
                        Ease::OutBack(1.7),
                        from,
                        VisualProps::identity(),
                    ),
                ));
                self.frame = FramePhase::RestoringFrame;
            }
        }
    }

    fn finalize(&mut self, kind: TransitionKind, final_props: VisualProps) {
        match kind {
            TransitionKind::Open | TransitionKind::Restore => {
                self.visual.display = true;
                self.visual.origin = TransformOrigin::Center;
                self.visual.props = final_props;
                self.phase = WindowPhase::Open;
            }
            TransitionKind::Close => {
                self.poof = None;
                self.snap_to(WindowPhase::Closed);
            }
            TransitionKind::Minimize => self.snap_to(WindowPhase::Minimized),
        }
    }

    /// Adopt a resting phase directly, discarding transform state so a
    /// later re-open measures true layout geometry
    fn snap_to(&mut self, settled: WindowPhase) {
        self.phase = settled;
        match settled {
            WindowPhase::Open => self.visual = WindowVisual::shown(),
            _ => {
                self.visual = WindowVisual::hidden();
                self.drag = None;
                self.clicks.reset();
            }
        }
    }
}
