use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controller::LoginConfig;
use crate::deform::DeformTuning;
use crate::error::FaceResult;
use crate::expression::{default_glyphs, MissingGlyphPolicy};
use crate::geometry::{DEFAULT_ANCHOR_SHIFT_Y, DEFAULT_RADIUS};
use crate::render::FaceStyle;

// ============================================================
// Serializable config types
// ============================================================

/// Everything needed to build a face, loadable from JSON.
///
/// Missing sections fall back to their defaults, so a file may carry only the
/// fields it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub version: u32,
    pub geometry: GeometryConfig,
    pub tuning: DeformTuning,
    pub style: FaceStyle,
    pub glyphs: BTreeMap<String, String>,
    pub missing_glyph: MissingGlyphPolicy,
    pub login: LoginConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub radius: f32,
    pub anchor_shift_y: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            anchor_shift_y: DEFAULT_ANCHOR_SHIFT_Y,
        }
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            geometry: GeometryConfig::default(),
            tuning: DeformTuning::default(),
            style: FaceStyle::default(),
            glyphs: default_glyphs(),
            missing_glyph: MissingGlyphPolicy::default(),
            login: LoginConfig::default(),
        }
    }
}

// ============================================================
// JSON load / save
// ============================================================

impl FaceConfig {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn to_json(&self) -> FaceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> FaceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.version != Self::CURRENT_VERSION {
            log::warn!(
                "config version {} differs from supported version {}",
                config.version,
                Self::CURRENT_VERSION
            );
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> FaceResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loading face config from {}", path.display());
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> FaceResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
