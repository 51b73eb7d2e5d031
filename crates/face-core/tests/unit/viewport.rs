use super::*;

fn layout(x: f32, y: f32) -> SurfaceLayout {
    SurfaceLayout {
        origin: [x, y],
        size: [300.0, 260.0],
    }
}

#[test]
fn registry_resolves_and_reports_failures() {
    let mut host = SurfaceRegistry::new();
    host.register("face", layout(0.0, 0.0));
    host.register_without_context("blank", layout(0.0, 0.0));

    assert_eq!(host.locate("face").unwrap(), layout(0.0, 0.0));
    assert!(matches!(
        host.locate("blank"),
        Err(FaceError::ContextUnavailable(id)) if id == "blank"
    ));
    assert!(matches!(
        host.locate("missing"),
        Err(FaceError::SurfaceNotFound(id)) if id == "missing"
    ));
}

#[test]
fn global_anchor_adds_surface_origin() {
    let tracker = ViewportTracker::new("face", [150.0, 115.0], &layout(20.0, 40.0));
    assert_eq!(tracker.global_anchor(), [170.0, 155.0]);
    assert_eq!(tracker.surface_id(), "face");
}

#[test]
fn refresh_follows_moved_surface() {
    let mut host = SurfaceRegistry::new();
    host.register("face", layout(0.0, 0.0));
    let mut tracker = ViewportTracker::new("face", [150.0, 115.0], &layout(0.0, 0.0));

    assert!(host.set_origin("face", [10.0, -300.0]));
    assert!(tracker.refresh(&host));
    assert_eq!(tracker.global_anchor(), [160.0, -185.0]);
}

#[test]
fn detached_surface_keeps_stale_anchor() {
    let mut host = SurfaceRegistry::new();
    host.register("face", layout(5.0, 5.0));
    let mut tracker = ViewportTracker::new("face", [150.0, 115.0], &layout(5.0, 5.0));

    host.remove("face");
    assert!(!tracker.refresh(&host));
    assert_eq!(tracker.global_anchor(), [155.0, 120.0]);
    assert!(!host.set_origin("face", [0.0, 0.0]));
}
