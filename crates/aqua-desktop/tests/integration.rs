//! Integration tests for DesktopShell
//!
//! These tests verify the full desktop workflow including:
//! - Registry invariants (z-ordering, close reset, minimize semantics)
//! - Dock click cycling (open, minimize, restore)
//! - Transition orchestration and mid-flight cancellation
//! - Minimize anchor fallback order
//! - Drag-to-move and double-click maximize
//! - Reduced-motion instant finalization

use aqua_desktop::{
    DesktopConfig, DesktopShell, DockAction, Rect, Size, StaticPlatform, Vec2, WindowPhase,
};
use aqua_desktop::registry::{DockApp, WindowDecl, BASE_Z_INDEX};
use aqua_desktop::transition::{CLOSE_DURATION_MS, OPEN_DURATION_MS, POOF_PARTICLE_COUNT};
use aqua_desktop::VisualProps;

fn calendar_config() -> DesktopConfig {
    DesktopConfig {
        base_z_index: BASE_Z_INDEX,
        windows: vec![
            WindowDecl {
                key: "calendar".to_string(),
                title: "Calendar".to_string(),
            },
            WindowDecl {
                key: "notes".to_string(),
                title: "Notes".to_string(),
            },
        ],
        dock: vec![
            DockApp {
                id: "calendar".to_string(),
                name: "Calendar".to_string(),
                icon: "calendar.png".to_string(),
                can_open: true,
            },
            DockApp {
                id: "notes".to_string(),
                name: "Notes".to_string(),
                icon: "notes.png".to_string(),
                can_open: true,
            },
        ],
    }
}

fn calendar_platform() -> StaticPlatform {
    StaticPlatform::new(Size::new(1440.0, 900.0))
        .with_window_rect("calendar", Rect::new(400.0, 150.0, 640.0, 480.0))
        .with_header_rect("calendar", Rect::new(400.0, 150.0, 640.0, 32.0))
        .with_icon_rect("calendar", Rect::new(100.0, 800.0, 40.0, 40.0))
        .with_window_rect("notes", Rect::new(500.0, 220.0, 520.0, 400.0))
        .with_icon_rect("notes", Rect::new(160.0, 800.0, 40.0, 40.0))
}

fn calendar_shell() -> DesktopShell<StaticPlatform> {
    DesktopShell::new(&calendar_config(), calendar_platform())
}

// =============================================================================
// Registry Invariants
// =============================================================================

#[test]
fn test_close_resets_registry_entry() {
    let mut shell = calendar_shell();

    shell.open("calendar", Some(serde_json::json!({"month": 8})), 0.0);
    shell.maximize("calendar", 10.0);
    shell.close("calendar", 20.0);

    let entry = shell.registry().get("calendar").unwrap();
    assert!(!entry.is_open);
    assert!(!entry.is_minimized);
    assert!(!entry.is_maximized);
    assert_eq!(entry.z_index, BASE_Z_INDEX);
    assert!(entry.icon_position.is_none());
    assert!(entry.data.is_none());
}

#[test]
fn test_z_index_is_monotonic_across_opens() {
    let mut shell = calendar_shell();
    let mut last_z = BASE_Z_INDEX;

    for i in 0..5 {
        let now = i as f64 * 1000.0;
        shell.open("calendar", None, now);
        let z = shell.registry().get("calendar").unwrap().z_index;
        assert!(z > last_z);
        last_z = z;
        shell.close("calendar", now + 500.0);
    }
}

#[test]
fn test_minimize_keeps_open_and_z() {
    let mut shell = calendar_shell();

    shell.open("calendar", None, 0.0);
    let z = shell.registry().get("calendar").unwrap().z_index;

    shell.minimize("calendar", 500.0);

    let entry = shell.registry().get("calendar").unwrap();
    assert!(entry.is_open);
    assert!(entry.is_minimized);
    assert_eq!(entry.z_index, z);
}

#[test]
fn test_unknown_key_changes_nothing() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    let before = shell.registry().get("calendar").unwrap().clone();
    let next_before = shell.registry().next_z_index();

    shell.open("finder", None, 10.0);
    shell.close("finder", 20.0);
    shell.minimize("finder", 30.0);
    shell.maximize("finder", 40.0);
    shell.focus("finder", 50.0);

    assert_eq!(shell.registry().next_z_index(), next_before);
    assert_eq!(*shell.registry().get("calendar").unwrap(), before);
}

#[test]
fn test_focus_restacks_a_above_b() {
    let mut shell = calendar_shell();

    shell.open("calendar", None, 0.0);
    shell.open("notes", None, 10.0);
    shell.focus("calendar", 20.0);

    let a = shell.registry().get("calendar").unwrap().z_index;
    let b = shell.registry().get("notes").unwrap().z_index;
    assert!(a > b);

    let order: Vec<&str> = shell
        .windows_by_z()
        .into_iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(order, vec!["notes", "calendar"]);
}

#[test]
fn test_maximize_twice_is_identity() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);

    assert!(!shell.registry().get("calendar").unwrap().is_maximized);
    shell.maximize("calendar", 1000.0);
    shell.maximize("calendar", 2000.0);
    assert!(!shell.registry().get("calendar").unwrap().is_maximized);
}

// =============================================================================
// Dock Click Cycling
// =============================================================================

#[test]
fn test_three_dock_clicks_open_minimize_restore() {
    let mut shell = calendar_shell();
    let next_z = shell.registry().next_z_index();

    // First click: closed -> open, icon rect captured
    assert_eq!(shell.dock_click("calendar", 0.0), DockAction::Opened);
    let entry = shell.registry().get("calendar").unwrap();
    assert!(entry.is_open);
    assert!(!entry.is_minimized);
    assert_eq!(entry.icon_position, Some(Rect::new(100.0, 800.0, 40.0, 40.0)));
    assert_eq!(entry.z_index, next_z);

    shell.tick(500.0);

    // Second click: open -> minimized, isOpen survives
    assert_eq!(shell.dock_click("calendar", 1000.0), DockAction::Minimized);
    let entry = shell.registry().get("calendar").unwrap();
    assert!(entry.is_minimized);
    assert!(entry.is_open);

    shell.tick(2000.0);

    // Third click: minimized -> restored, icon rect re-captured
    assert_eq!(shell.dock_click("calendar", 3000.0), DockAction::Restored);
    let entry = shell.registry().get("calendar").unwrap();
    assert!(!entry.is_minimized);
    assert!(entry.is_open);
    assert_eq!(entry.icon_position, Some(Rect::new(100.0, 800.0, 40.0, 40.0)));
}

#[test]
fn test_dock_click_on_unknown_app_is_ignored() {
    let mut shell = calendar_shell();
    assert_eq!(shell.dock_click("finder", 0.0), DockAction::Ignored);
    assert!(!shell.tick(16.0));
}

// =============================================================================
// Transition Orchestration
// =============================================================================

#[test]
fn test_open_animates_from_icon_then_settles() {
    let mut shell = calendar_shell();

    shell.dock_click("calendar", 0.0);
    let visual = shell.visual("calendar").unwrap();
    assert!(visual.display);
    assert!(visual.props.opacity < 0.001);

    // Mid-flight: partially faded in
    shell.tick(OPEN_DURATION_MS as f64 / 2.0);
    let visual = shell.visual("calendar").unwrap();
    assert!(visual.props.opacity > 0.0);
    assert!(visual.props.opacity < 1.0);

    assert!(!shell.tick(OPEN_DURATION_MS as f64));
    assert_eq!(shell.visual("calendar").unwrap().props, VisualProps::identity());
    assert_eq!(shell.controller("calendar").unwrap().phase(), WindowPhase::Open);
}

#[test]
fn test_close_plays_poof_at_window_center() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);

    shell.close("calendar", 1000.0);

    let poof = shell.poof("calendar").unwrap();
    assert_eq!(poof.particle_count(), POOF_PARTICLE_COUNT);
    assert!((poof.center().x - 720.0).abs() < 0.001);
    assert!((poof.center().y - 390.0).abs() < 0.001);

    // Shrink finishes before the burst; the window finalizes only after
    // the last particle, so no frames are left dangling
    shell.tick(1000.0 + CLOSE_DURATION_MS as f64);
    assert_eq!(
        shell.controller("calendar").unwrap().phase(),
        WindowPhase::Closing
    );

    assert!(!shell.tick(2000.0));
    assert!(shell.poof("calendar").is_none());
    assert!(!shell.visual("calendar").unwrap().display);
}

#[test]
fn test_close_interrupting_open_leaves_no_residue() {
    let mut shell = calendar_shell();

    shell.open("calendar", None, 0.0);
    shell.tick(100.0);

    // Close mid-open, then reopen before the close finishes
    shell.close("calendar", 100.0);
    shell.tick(150.0);
    shell.open("calendar", None, 200.0);

    // The reopen cancelled the close and its burst outright
    assert!(shell.poof("calendar").is_none());
    assert_eq!(
        shell.controller("calendar").unwrap().phase(),
        WindowPhase::Opening
    );

    assert!(!shell.tick(200.0 + OPEN_DURATION_MS as f64));
    assert!(shell.visual("calendar").unwrap().display);
    assert_eq!(shell.visual("calendar").unwrap().props, VisualProps::identity());
}

#[test]
fn test_minimize_anchor_falls_back_in_order() {
    // Distinct dock anchor wins
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);
    shell.set_dock_icon_position("calendar", Some(Vec2::new(300.0, 870.0)), 600.0);
    shell.minimize("calendar", 1000.0);
    let visual = shell.visual("calendar").unwrap();
    assert!(visual.display);
    assert_eq!(
        shell.controller("calendar").unwrap().phase(),
        WindowPhase::Minimizing
    );

    // Without a dock anchor, the captured icon rect is the target; without
    // either, the viewport bottom-center fallback still animates
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);
    shell.minimize("calendar", 1000.0);
    assert_eq!(
        shell.controller("calendar").unwrap().phase(),
        WindowPhase::Minimizing
    );

    assert!(!shell.tick(2000.0));
    assert!(!shell.visual("calendar").unwrap().display);
    assert_eq!(
        shell.visual("calendar").unwrap().props,
        VisualProps::identity()
    );
}

#[test]
fn test_minimize_cancels_in_flight_maximize_tween() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);

    // Minimize lands while the maximize tween is still playing
    shell.maximize("calendar", 1000.0);
    shell.minimize("calendar", 1100.0);

    // The minimize timeline finishes; nothing keeps animating afterwards
    assert!(!shell.tick(1780.0));
    assert!(!shell.tick(1816.0));

    // The hidden element keeps its discarded transform; the cancelled
    // maximize tween must not replay on it
    let visual = shell.visual("calendar").unwrap();
    assert!(!visual.display);
    assert_eq!(visual.props, VisualProps::identity());
}

// =============================================================================
// Drag and Double Click
// =============================================================================

#[test]
fn test_drag_moves_then_release_stops_tracking() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);

    shell.pointer_down("calendar", Vec2::new(700.0, 160.0), 1000.0);
    shell.pointer_move(Vec2::new(750.0, 200.0));

    let t = shell.visual("calendar").unwrap().props.translate;
    assert!((t.x - 50.0).abs() < 0.001);
    assert!((t.y - 40.0).abs() < 0.001);

    shell.pointer_up();
    shell.pointer_move(Vec2::new(0.0, 0.0));
    let t = shell.visual("calendar").unwrap().props.translate;
    assert!((t.x - 50.0).abs() < 0.001);
}

#[test]
fn test_double_click_header_toggles_maximize() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.tick(500.0);

    shell.pointer_down("calendar", Vec2::new(700.0, 160.0), 1000.0);
    shell.pointer_up();
    shell.pointer_down("calendar", Vec2::new(700.0, 160.0), 1200.0);
    shell.pointer_up();

    assert!(shell.registry().get("calendar").unwrap().is_maximized);
    assert!(!shell.tick(2000.0));
    assert!((shell.visual("calendar").unwrap().props.corner_radius - 0.0).abs() < 0.001);
}

#[test]
fn test_toggling_press_also_raises() {
    let mut shell = calendar_shell();
    shell.open("calendar", None, 0.0);
    shell.open("notes", None, 10.0);
    shell.tick(500.0);

    shell.pointer_down("calendar", Vec2::new(700.0, 160.0), 1000.0);
    shell.pointer_up();
    let z_after_first = shell.registry().get("calendar").unwrap().z_index;

    // The second press toggles maximize and still brings the window forward
    shell.pointer_down("calendar", Vec2::new(700.0, 160.0), 1200.0);
    shell.pointer_up();

    let entry = shell.registry().get("calendar").unwrap();
    assert!(entry.is_maximized);
    assert!(entry.z_index > z_after_first);
    assert!(entry.z_index > shell.registry().get("notes").unwrap().z_index);
}

// =============================================================================
// Reduced Motion
// =============================================================================

#[test]
fn test_reduced_motion_finalizes_instantly() {
    let platform = calendar_platform().with_reduced_motion(true);
    let mut shell = DesktopShell::new(&calendar_config(), platform);

    shell.open("calendar", None, 0.0);
    assert!(!shell.tick(0.0));
    assert_eq!(shell.visual("calendar").unwrap().props, VisualProps::identity());
    assert_eq!(shell.controller("calendar").unwrap().phase(), WindowPhase::Open);

    shell.minimize("calendar", 10.0);
    assert!(!shell.tick(10.0));
    assert!(!shell.visual("calendar").unwrap().display);

    shell.open("calendar", None, 20.0);
    shell.close("calendar", 30.0);
    assert!(!shell.tick(30.0));
    assert!(shell.poof("calendar").is_none());
    assert!(!shell.visual("calendar").unwrap().display);
}

#[test]
fn test_motion_preference_is_requeried_per_transition() {
    let mut shell = calendar_shell();

    shell.open("calendar", None, 0.0);
    assert!(shell.tick(16.0));
    shell.tick(500.0);

    // Preference flips while the desktop is live; the next transition obeys
    shell.platform_mut().set_reduced_motion(true);
    shell.close("calendar", 1000.0);
    assert!(!shell.tick(1000.0));
    assert!(shell.poof("calendar").is_none());
}
