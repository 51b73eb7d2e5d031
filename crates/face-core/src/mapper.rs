//! Pointer position → constrained feature offset.

use crate::geometry::{length, FaceGeometry};

/// Map an absolute pointer position to a feature offset relative to `anchor`.
///
/// The raw delta is clamped to the face circle, then to the travel circle, and
/// finally pinned above the base edge. Every clamp uses a strict `>`, so a delta of
/// exactly `r` or `Rm` passes unscaled. After pinning `y` to `-Rg`, the horizontal
/// component is shortened if needed so the offset stays within the travel circle.
///
/// Returns `None` when the delta is not finite; such samples carry no position.
pub fn constrain_offset(geometry: &FaceGeometry, anchor: [f32; 2], pointer: [f32; 2]) -> Option<[f32; 2]> {
    let mut d = [pointer[0] - anchor[0], pointer[1] - anchor[1]];
    if !d.iter().all(|v| v.is_finite()) {
        return None;
    }

    let radius = geometry.radius();
    let group = geometry.group_radius();
    let travel = geometry.travel_radius();

    let distance = length(d);
    if distance > radius {
        d = scale_to(d, distance, radius);
    }

    let distance = length(d);
    if distance > travel {
        d = scale_to(d, distance, travel);
    }

    if d[1] + group > 0.0 {
        d[1] = -group;
        let max_x = (travel * travel - group * group).max(0.0).sqrt();
        if d[0].abs() > max_x {
            d[0] = max_x.copysign(d[0]);
        }
    }

    Some(d)
}

fn scale_to(v: [f32; 2], len: f32, target: f32) -> [f32; 2] {
    let ratio = target / len;
    [v[0] * ratio, v[1] * ratio]
}

#[cfg(test)]
#[path = "../tests/unit/mapper.rs"]
mod tests;
