use super::*;

const ANCHOR: [f32; 2] = [150.0, 115.0];

fn geometry() -> FaceGeometry {
    FaceGeometry::new(100.0, [300.0, 260.0], -15.0).unwrap()
}

fn map(x: f32, y: f32) -> [f32; 2] {
    constrain_offset(&geometry(), ANCHOR, [x, y]).unwrap()
}

fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-3 && (a[1] - b[1]).abs() < 1e-3
}

#[test]
fn pointer_at_anchor_rests_on_base() {
    assert_eq!(map(150.0, 115.0), [0.0, -25.0]);
}

#[test]
fn far_above_is_clamped_twice() {
    // delta (0,-115) → outer clamp (0,-100) → travel clamp (0,-75)
    assert!(approx(map(150.0, 0.0), [0.0, -75.0]));
}

#[test]
fn delta_equal_to_radius_is_only_travel_clamped() {
    // (100,0): outer clamp skipped, travel clamp to (75,0), then pinned to the base
    let offset = map(250.0, 115.0);
    let max_x = (75.0f32 * 75.0 - 25.0 * 25.0).sqrt();
    assert!(approx(offset, [max_x, -25.0]), "{offset:?}");
    assert!((length(offset) - 75.0).abs() < 1e-3);
}

#[test]
fn delta_equal_to_travel_radius_is_unchanged() {
    let offset = map(150.0, 40.0);
    assert_eq!(offset, [0.0, -75.0]);
}

#[test]
fn inside_travel_band_passes_through() {
    assert_eq!(map(160.0, 75.0), [10.0, -40.0]);
}

#[test]
fn below_base_is_pinned_without_sign_flip() {
    assert_eq!(map(150.0, 400.0), [0.0, -25.0]);
    let left = map(0.0, 300.0);
    assert!(left[0] < 0.0);
    assert_eq!(left[1], -25.0);
}

#[test]
fn shallow_horizontal_offset_keeps_x() {
    // (30, -10): within travel circle but below the pin line
    assert_eq!(map(180.0, 105.0), [30.0, -25.0]);
}

#[test]
fn extreme_inputs_stay_bounded() {
    for pointer in [
        [1.0e30, -1.0e30],
        [-1.0e30, 1.0e30],
        [f32::MAX / 2.0, 0.0],
        [150.0, -1.0e20],
    ] {
        let offset = constrain_offset(&geometry(), ANCHOR, pointer).unwrap();
        assert!(length(offset) <= 75.0 + 1e-3, "{pointer:?} → {offset:?}");
        assert!(offset[1] <= -25.0 + 1e-3, "{pointer:?} → {offset:?}");
    }
}

#[test]
fn non_finite_input_is_rejected() {
    let g = geometry();
    assert_eq!(constrain_offset(&g, ANCHOR, [f32::NAN, 0.0]), None);
    assert_eq!(constrain_offset(&g, ANCHOR, [0.0, f32::INFINITY]), None);
}
