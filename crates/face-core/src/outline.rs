//! Closed outline of the face silhouette.
//!
//! At rest the silhouette is a half-disc: a flat base edge closed by an arc above
//! it. Once the features travel, the arc is replaced by two cubic Bezier segments
//! meeting at a single apex, so horizontal movement skews the crown toward one side
//! and vertical movement stretches or flattens it.

use std::f32::consts::PI;

use crate::deform::{DeformParams, DeformTuning};

/// Control point factor of the 4-segment cubic circle approximation.
const KAPPA: f32 = 0.5519;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    MoveTo([f32; 2]),
    LineTo([f32; 2]),
    /// Two control points, then the end point.
    CubicTo([f32; 2], [f32; 2], [f32; 2]),
    /// Circular arc from `start_angle` sweeping `sweep` radians.
    /// Negative sweeps run counterclockwise on screen (through negative y).
    Arc {
        center: [f32; 2],
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceOutline {
    elements: Vec<PathEl>,
}

impl FaceOutline {
    /// Pick the neutral or deformed outline for the given parameters.
    pub fn build(radius: f32, params: &DeformParams, tuning: &DeformTuning) -> Self {
        if params.is_neutral(tuning) {
            Self::neutral(radius)
        } else {
            Self::bulged(radius, params)
        }
    }

    /// Half-disc of radius `r` standing on the base edge `(-r,0)..(r,0)`.
    pub fn neutral(r: f32) -> Self {
        Self {
            elements: vec![
                PathEl::MoveTo([-r, 0.0]),
                PathEl::LineTo([r, 0.0]),
                PathEl::Arc {
                    center: [0.0, 0.0],
                    radius: r,
                    start_angle: 0.0,
                    sweep: -PI,
                },
                PathEl::Close,
            ],
        }
    }

    /// Deformed crown: right base → left base → apex → right base.
    pub fn bulged(r: f32, params: &DeformParams) -> Self {
        let rk = r * KAPPA;
        let bx = params.bulge_x;
        let by = params.bulge_y;
        let apex = [bx, -r + by * 1.5];

        Self {
            elements: vec![
                PathEl::MoveTo([r, 0.0]),
                PathEl::LineTo([-r, 0.0]),
                PathEl::CubicTo([-r, -rk - by * 0.5], [-rk + bx * 0.8, -r + by], apex),
                PathEl::CubicTo([rk + bx * 0.8, -r + by], [r, -rk - by * 0.5], [r, 0.0]),
                PathEl::Close,
            ],
        }
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    /// Whether this is the at-rest half-disc.
    pub fn is_neutral(&self) -> bool {
        self.elements
            .iter()
            .any(|el| matches!(el, PathEl::Arc { .. }))
    }

    /// Curved part of the outline as cubic segments `[p0, p1, p2, p3]`.
    ///
    /// Straight edges are skipped; arcs are split into pieces of at most a quarter
    /// turn, each approximated by one cubic.
    pub fn to_cubics(&self) -> Vec<[[f32; 2]; 4]> {
        let mut cubics = Vec::new();
        let mut current = [0.0, 0.0];
        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => current = p,
                PathEl::CubicTo(c1, c2, end) => {
                    cubics.push([current, c1, c2, end]);
                    current = end;
                }
                PathEl::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    let pieces = (sweep.abs() / (PI / 2.0)).ceil().max(1.0) as usize;
                    let step = sweep / pieces as f32;
                    // handle length for an arc of angle `step`
                    let handle = radius * 4.0 / 3.0 * (step / 4.0).tan();
                    for i in 0..pieces {
                        let a0 = start_angle + step * i as f32;
                        let a1 = a0 + step;
                        let p0 = arc_point(center, radius, a0);
                        let p3 = arc_point(center, radius, a1);
                        let p1 = [p0[0] - a0.sin() * handle, p0[1] + a0.cos() * handle];
                        let p2 = [p3[0] + a1.sin() * handle, p3[1] - a1.cos() * handle];
                        cubics.push([p0, p1, p2, p3]);
                    }
                    current = arc_point(center, radius, start_angle + sweep);
                }
                PathEl::Close => {}
            }
        }
        cubics
    }

    /// Pack the first two cubic segments for GPU upload.
    ///
    /// Layout: for segment i,
    ///   uniform[i*2]   = [P0.x, P0.y, P1.x, P1.y]
    ///   uniform[i*2+1] = [P2.x, P2.y, P3.x, P3.y]
    /// The base edge is implied by the gap between the last end point and the first
    /// start point. A missing segment collapses onto the previous end point.
    pub fn to_uniform_array(&self) -> [[f32; 4]; 4] {
        let cubics = self.to_cubics();
        let mut result = [[0.0f32; 4]; 4];
        let mut last = cubics.first().map(|c| c[0]).unwrap_or([0.0, 0.0]);
        for seg in 0..2 {
            let [p0, p1, p2, p3] = cubics.get(seg).copied().unwrap_or([last; 4]);
            result[seg * 2] = [p0[0], p0[1], p1[0], p1[1]];
            result[seg * 2 + 1] = [p2[0], p2[1], p3[0], p3[1]];
            last = p3;
        }
        result
    }

    /// Approximate the outline by a closed polygon.
    ///
    /// Each curve contributes `segments` points. Consecutive duplicates and the
    /// closing point are dropped.
    pub fn flatten(&self, segments: usize) -> Vec<[f32; 2]> {
        let segments = segments.max(1);
        let mut points: Vec<[f32; 2]> = Vec::new();
        let mut current = [0.0, 0.0];

        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => {
                    push_point(&mut points, p);
                    current = p;
                }
                PathEl::CubicTo(c1, c2, end) => {
                    for i in 1..=segments {
                        let t = i as f32 / segments as f32;
                        push_point(&mut points, cubic_point(current, c1, c2, end, t));
                    }
                    current = end;
                }
                PathEl::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    for i in 0..=segments {
                        let angle = start_angle + sweep * i as f32 / segments as f32;
                        push_point(&mut points, arc_point(center, radius, angle));
                    }
                    current = arc_point(center, radius, start_angle + sweep);
                }
                PathEl::Close => {}
            }
        }

        if points.len() > 1 && same_point(points[0], points[points.len() - 1]) {
            points.pop();
        }
        points
    }
}

fn push_point(points: &mut Vec<[f32; 2]>, p: [f32; 2]) {
    if points.last().map_or(true, |last| !same_point(*last, p)) {
        points.push(p);
    }
}

fn arc_point(center: [f32; 2], radius: f32, angle: f32) -> [f32; 2] {
    [
        center[0] + radius * angle.cos(),
        center[1] + radius * angle.sin(),
    ]
}

fn cubic_point(p0: [f32; 2], p1: [f32; 2], p2: [f32; 2], p3: [f32; 2], t: f32) -> [f32; 2] {
    let s = 1.0 - t;
    let a = s * s * s;
    let b = 3.0 * s * s * t;
    let c = 3.0 * s * t * t;
    let d = t * t * t;
    [
        a * p0[0] + b * p1[0] + c * p2[0] + d * p3[0],
        a * p0[1] + b * p1[1] + c * p2[1] + d * p3[1],
    ]
}

fn same_point(a: [f32; 2], b: [f32; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-4 && (a[1] - b[1]).abs() < 1e-4
}

#[cfg(test)]
#[path = "../tests/unit/outline.rs"]
mod tests;
