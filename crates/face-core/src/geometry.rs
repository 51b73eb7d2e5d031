//! Fixed geometry of the face.
//!
//! Coordinates follow the drawing surface: x grows right, y grows down. The anchor
//! sits at the middle of the flat base edge, so the face occupies negative y.

use crate::error::{FaceError, FaceResult};

/// Base radius of the face (half of a 200px glyph box).
pub const DEFAULT_RADIUS: f32 = 100.0;

/// Vertical shift of the anchor relative to the surface center.
pub const DEFAULT_ANCHOR_SHIFT_Y: f32 = -15.0;

/// Immutable face dimensions plus the anchor in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    radius: f32,
    group_radius: f32,
    travel_radius: f32,
    local_anchor: [f32; 2],
}

impl FaceGeometry {
    /// Build the geometry for a surface of `surface_size` (width, height).
    ///
    /// The feature group radius is `radius / 4` and the travel radius is what is
    /// left of the base radius once the group fits inside it.
    pub fn new(radius: f32, surface_size: [f32; 2], anchor_shift_y: f32) -> FaceResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(FaceError::invalid_geometry(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        if !surface_size.iter().all(|v| v.is_finite() && *v >= 0.0) {
            return Err(FaceError::invalid_geometry(format!(
                "surface size must be finite and non-negative, got {surface_size:?}"
            )));
        }
        if !anchor_shift_y.is_finite() {
            return Err(FaceError::invalid_geometry("anchor shift must be finite"));
        }

        let group_radius = radius / 4.0;
        Ok(Self {
            radius,
            group_radius,
            travel_radius: radius - group_radius,
            local_anchor: [
                surface_size[0] / 2.0,
                surface_size[1] / 2.0 + anchor_shift_y,
            ],
        })
    }

    /// Base radius `r`.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Feature group radius `r / 4`.
    pub fn group_radius(&self) -> f32 {
        self.group_radius
    }

    /// Maximum distance of the feature group center from the anchor.
    pub fn travel_radius(&self) -> f32 {
        self.travel_radius
    }

    pub fn local_anchor(&self) -> [f32; 2] {
        self.local_anchor
    }

    /// Offset where the feature group rests, touching the base edge.
    pub fn rest_offset(&self) -> [f32; 2] {
        [0.0, -self.group_radius]
    }
}

pub(crate) fn length(v: [f32; 2]) -> f32 {
    v[0].hypot(v[1])
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
