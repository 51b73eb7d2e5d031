use super::*;

fn close(a: [f32; 2], b: [f32; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-3 && (a[1] - b[1]).abs() < 1e-3
}

fn params(strength: f32, bulge_x: f32, bulge_y: f32) -> DeformParams {
    DeformParams {
        strength,
        bulge_x,
        bulge_y,
    }
}

#[test]
fn neutral_is_flat_base_plus_arc() {
    let outline = FaceOutline::neutral(100.0);
    assert!(outline.is_neutral());
    match outline.elements() {
        [PathEl::MoveTo(start), PathEl::LineTo(end), PathEl::Arc { radius, sweep, .. }, PathEl::Close] => {
            assert_eq!(*start, [-100.0, 0.0]);
            assert_eq!(*end, [100.0, 0.0]);
            assert_eq!(*radius, 100.0);
            assert_eq!(*sweep, -PI);
        }
        other => panic!("unexpected neutral path {other:?}"),
    }
}

#[test]
fn build_switches_on_threshold() {
    let tuning = DeformTuning::default();
    assert!(FaceOutline::build(100.0, &params(0.0, 0.0, 0.0), &tuning).is_neutral());
    assert!(FaceOutline::build(100.0, &params(0.009, 0.0, 0.0), &tuning).is_neutral());
    assert!(!FaceOutline::build(100.0, &params(0.01, 0.0, 0.0), &tuning).is_neutral());
}

#[test]
fn bulged_control_points() {
    let r = 100.0;
    let rk = r * KAPPA;
    let outline = FaceOutline::bulged(r, &params(1.0, 10.0, 4.0));
    let els = outline.elements();
    assert_eq!(els.len(), 5);
    assert_eq!(els[0], PathEl::MoveTo([r, 0.0]));
    assert_eq!(els[1], PathEl::LineTo([-r, 0.0]));
    assert_eq!(
        els[2],
        PathEl::CubicTo([-r, -rk - 2.0], [-rk + 8.0, -r + 4.0], [10.0, -r + 6.0])
    );
    assert_eq!(
        els[3],
        PathEl::CubicTo([rk + 8.0, -r + 4.0], [r, -rk - 2.0], [r, 0.0])
    );
    assert_eq!(els[4], PathEl::Close);
    assert!(!outline.is_neutral());
}

#[test]
fn zero_bulge_crown_is_symmetric() {
    let outline = FaceOutline::bulged(50.0, &params(0.5, 0.0, 0.0));
    let cubics = outline.to_cubics();
    assert_eq!(cubics.len(), 2);
    let [a0, a1, a2, a3] = cubics[0];
    let [b0, b1, b2, b3] = cubics[1];
    let mirror = |p: [f32; 2]| [-p[0], p[1]];
    assert!(close(a0, mirror(b3)));
    assert!(close(a1, mirror(b2)));
    assert!(close(a2, mirror(b1)));
    assert!(close(a3, mirror(b0)));
}

#[test]
fn neutral_arc_splits_into_quarter_cubics() {
    let cubics = FaceOutline::neutral(100.0).to_cubics();
    assert_eq!(cubics.len(), 2);
    assert!(close(cubics[0][0], [100.0, 0.0]));
    assert!(close(cubics[0][3], [0.0, -100.0]));
    assert!(close(cubics[1][3], [-100.0, 0.0]));
    // quarter-arc handle ≈ 0.5523 r, pointing up from the right base point
    assert!(close(cubics[0][1], [100.0, -55.228]));
    assert!(close(cubics[0][2], [55.228, -100.0]));
}

#[test]
fn uniform_array_chains_segments() {
    let outline = FaceOutline::bulged(100.0, &params(1.0, 5.0, 2.0));
    let packed = outline.to_uniform_array();
    // segment 0 starts at the left base point, segment 1 ends at the right one
    assert_eq!([packed[0][0], packed[0][1]], [-100.0, 0.0]);
    assert_eq!([packed[3][2], packed[3][3]], [100.0, 0.0]);
    // apex shared between the two segments
    assert_eq!([packed[1][2], packed[1][3]], [packed[2][0], packed[2][1]]);
}

#[test]
fn flatten_neutral_stays_on_half_disc() {
    let points = FaceOutline::neutral(10.0).flatten(16);
    assert!(close(points[0], [-10.0, 0.0]));
    assert!(close(points[1], [10.0, 0.0]));
    for p in &points[2..] {
        assert!((p[0].hypot(p[1]) - 10.0).abs() < 1e-3);
        assert!(p[1] <= 1e-4);
    }
    // the arc's last sample equals the start point and is dropped
    assert!(!close(*points.last().unwrap(), points[0]));
    assert_eq!(points.len(), 2 + 15);
}

#[test]
fn flatten_bulged_passes_through_apex() {
    let outline = FaceOutline::bulged(100.0, &params(1.0, 12.0, 3.0));
    let points = outline.flatten(8);
    assert!(points.iter().any(|p| close(*p, [12.0, -95.5])));
    assert!(points.iter().all(|p| p[1] <= 1e-4));
}
