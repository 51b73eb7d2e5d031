use std::collections::BTreeMap;

use crate::config::FaceConfig;
use crate::deform::{DeformParams, DeformTuning};
use crate::error::FaceResult;
use crate::expression::{ExpressionMachine, ExpressionState, GlyphTable};
use crate::geometry::FaceGeometry;
use crate::mapper::constrain_offset;
use crate::outline::FaceOutline;
use crate::render::FaceStyle;
use crate::viewport::{SurfaceHost, ViewportTracker};

/// One face bound to one drawing surface.
///
/// The collaborator that owns the instance forwards pointer, layout and
/// expression events to it and calls [`Face::render`] every frame.
#[derive(Clone, Debug)]
pub struct Face {
    geometry: FaceGeometry,
    tuning: DeformTuning,
    style: FaceStyle,
    viewport: ViewportTracker,
    pointer: Option<[f32; 2]>,
    offset: [f32; 2],
    params: DeformParams,
    expressions: ExpressionMachine,
}

impl Face {
    /// Bind a face with default geometry and style to `surface_id`.
    ///
    /// Fails when the host cannot locate the surface or give it a drawing
    /// context, or when `glyphs` has no `default` entry.
    pub fn create(
        host: &impl SurfaceHost,
        surface_id: &str,
        glyphs: BTreeMap<String, String>,
    ) -> FaceResult<Self> {
        let config = FaceConfig {
            glyphs,
            ..FaceConfig::default()
        };
        Self::with_config(host, surface_id, &config)
    }

    pub fn with_config(
        host: &impl SurfaceHost,
        surface_id: &str,
        config: &FaceConfig,
    ) -> FaceResult<Self> {
        let layout = host.locate(surface_id)?;
        let geometry = FaceGeometry::new(
            config.geometry.radius,
            layout.size,
            config.geometry.anchor_shift_y,
        )?;
        let glyphs = GlyphTable::new(config.glyphs.clone())?;
        let viewport = ViewportTracker::new(surface_id, geometry.local_anchor(), &layout);

        let offset = geometry.rest_offset();
        let params = DeformParams::derive(&geometry, offset, &config.tuning);
        log::debug!(
            "face bound to '{surface_id}': r={} anchor={:?}",
            geometry.radius(),
            viewport.global_anchor()
        );

        Ok(Self {
            geometry,
            tuning: config.tuning,
            style: config.style,
            viewport,
            pointer: None,
            offset,
            params,
            expressions: ExpressionMachine::new(
                glyphs,
                config.style.face_color,
                config.missing_glyph,
            ),
        })
    }

    /// Move the features toward the pointer at page position `(x, y)`.
    ///
    /// Never fails: the offset is clamped into the face. Non-finite coordinates are
    /// dropped. A transient expression is cleared by any accepted sample.
    pub fn update_position(&mut self, x: f32, y: f32) {
        let anchor = self.viewport.global_anchor();
        let Some(offset) = constrain_offset(&self.geometry, anchor, [x, y]) else {
            log::debug!("dropping non-finite pointer sample ({x}, {y})");
            return;
        };

        self.pointer = Some([x, y]);
        self.offset = offset;
        self.params = DeformParams::derive(&self.geometry, offset, &self.tuning);
        log::trace!("pointer ({x}, {y}) -> offset {offset:?}, {:?}", self.params);

        self.expressions.clear_transient();
    }

    /// Replace the displayed expression. Unknown ids are handled at render time.
    pub fn set_expression(&mut self, expression: impl Into<String>, is_transient: bool) {
        self.expressions.set(expression, is_transient);
    }

    /// Re-read the surface position after a resize or scroll.
    pub fn refresh_anchor(&mut self, host: &impl SurfaceHost) {
        self.viewport.refresh(host);
    }

    /// Anchor in page coordinates; pointing here recenters the features.
    pub fn anchor_global_position(&self) -> [f32; 2] {
        self.viewport.global_anchor()
    }

    pub fn is_transient(&self) -> bool {
        self.expressions.is_transient()
    }

    pub fn surface_id(&self) -> &str {
        self.viewport.surface_id()
    }

    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    /// Last accepted pointer sample, if any.
    pub fn pointer(&self) -> Option<[f32; 2]> {
        self.pointer
    }

    pub fn feature_offset(&self) -> [f32; 2] {
        self.offset
    }

    pub fn deform_params(&self) -> DeformParams {
        self.params
    }

    /// Silhouette for the current offset.
    pub fn outline(&self) -> FaceOutline {
        FaceOutline::build(self.geometry.radius(), &self.params, &self.tuning)
    }

    pub fn expression(&self) -> &ExpressionState {
        self.expressions.current()
    }

    pub fn expressions(&self) -> &ExpressionMachine {
        &self.expressions
    }

    pub fn tuning(&self) -> &DeformTuning {
        &self.tuning
    }

    pub fn set_tuning(&mut self, tuning: DeformTuning) {
        self.tuning = tuning;
        self.params = DeformParams::derive(&self.geometry, self.offset, &self.tuning);
    }

    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: FaceStyle) {
        self.style = style;
        self.expressions.set_color(style.face_color);
    }
}

#[cfg(test)]
#[path = "../tests/unit/face.rs"]
mod tests;
