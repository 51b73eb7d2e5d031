//! Feature offset → outline deformation parameters.

use serde::{Deserialize, Serialize};

use crate::geometry::{length, FaceGeometry};

/// Visual intensity constants for the outline deformation.
///
/// These are tuning values, not derived from geometry. The defaults give the
/// reference look.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformTuning {
    /// Vertical bulge as a fraction of the radius at full strength.
    pub vertical_bulge: f32,
    /// Horizontal bulge as a fraction of the radius at full strength.
    pub horizontal_bulge: f32,
    /// Offsets shorter than this produce no horizontal bulge.
    pub dead_zone: f32,
    /// Below this strength the outline stays a plain half-disc.
    pub neutral_threshold: f32,
}

impl Default for DeformTuning {
    fn default() -> Self {
        Self {
            vertical_bulge: 0.06,
            horizontal_bulge: 0.15,
            dead_zone: 1.0,
            neutral_threshold: 0.01,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeformParams {
    /// How far the features have left their resting position, in `[0, 1]`.
    pub strength: f32,
    pub bulge_x: f32,
    pub bulge_y: f32,
}

impl DeformParams {
    /// Derive the parameters for a feature offset produced by the mapper.
    ///
    /// Strength measures travel beyond the resting ring `|offset| = Rg`, normalized
    /// over the band up to `Rm`: it is 0 at rest and 1 at full travel.
    pub fn derive(geometry: &FaceGeometry, offset: [f32; 2], tuning: &DeformTuning) -> Self {
        let r = geometry.radius();
        let rest = geometry.group_radius();
        let band = geometry.travel_radius() - rest;

        let dist = length(offset);
        let strength = if band > f32::EPSILON {
            ((dist - rest) / band).clamp(0.0, 1.0)
        } else if dist > rest {
            1.0
        } else {
            0.0
        };

        let y_driver = (-offset[1] / r).clamp(-1.0, 1.0);
        let bulge_y = r * tuning.vertical_bulge * y_driver * strength;

        let bulge_x = if dist > tuning.dead_zone {
            let x_driver = offset[0] / dist;
            r * tuning.horizontal_bulge * x_driver * strength
        } else {
            0.0
        };

        Self {
            strength,
            bulge_x,
            bulge_y,
        }
    }

    pub fn is_neutral(&self, tuning: &DeformTuning) -> bool {
        self.strength < tuning.neutral_threshold
    }
}

#[cfg(test)]
#[path = "../tests/unit/deform.rs"]
mod tests;
