use super::*;

#[test]
fn derived_radii_follow_base_radius() {
    let g = FaceGeometry::new(100.0, [300.0, 260.0], DEFAULT_ANCHOR_SHIFT_Y).unwrap();
    assert_eq!(g.radius(), 100.0);
    assert_eq!(g.group_radius(), 25.0);
    assert_eq!(g.travel_radius(), 75.0);
    assert!(g.group_radius() < g.radius());
}

#[test]
fn anchor_is_shifted_surface_center() {
    let g = FaceGeometry::new(100.0, [300.0, 260.0], -15.0).unwrap();
    assert_eq!(g.local_anchor(), [150.0, 115.0]);
    assert_eq!(g.rest_offset(), [0.0, -25.0]);
}

#[test]
fn rejects_degenerate_radius() {
    for radius in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        let err = FaceGeometry::new(radius, [10.0, 10.0], 0.0).unwrap_err();
        assert!(matches!(err, FaceError::InvalidGeometry(_)), "{radius}");
    }
}

#[test]
fn rejects_non_finite_surface() {
    assert!(FaceGeometry::new(10.0, [f32::NAN, 10.0], 0.0).is_err());
    assert!(FaceGeometry::new(10.0, [10.0, 10.0], f32::INFINITY).is_err());
}

#[test]
fn length_is_euclidean() {
    assert_eq!(length([3.0, -4.0]), 5.0);
    assert_eq!(length([0.0, 0.0]), 0.0);
}
