//! Per-frame rendering of a [`Face`] onto a [`Canvas`].
//!
//! The host drives the loop: it calls [`Face::render`] once per display frame from
//! its own scheduler. Rendering only reads the feature offset and expression state
//! computed by the update operations.

use serde::{Deserialize, Serialize};

use crate::error::FaceResult;
use crate::face::Face;
use crate::outline::FaceOutline;

/// Colors and glyph metrics. Colors are sRGB components in `0..1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceStyle {
    pub face_color: [f32; 3],
    pub outline_color: [f32; 3],
    pub outline_width: f32,
    pub glyph_color: [f32; 3],
    /// Glyph font size as a fraction of the radius.
    pub glyph_scale: f32,
    /// Downward glyph nudge from the feature center, as a fraction of the radius.
    pub glyph_baseline: f32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            face_color: [1.0, 215.0 / 255.0, 0.0],
            outline_color: [0.2, 0.2, 0.2],
            outline_width: 2.0,
            glyph_color: [0.0, 0.0, 0.0],
            glyph_scale: 0.2,
            glyph_baseline: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineStyle {
    pub fill: [f32; 3],
    pub stroke: [f32; 3],
    pub stroke_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub color: [f32; 3],
    pub size: f32,
}

/// Drawing target for one frame, in surface-local coordinates.
pub trait Canvas {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill and stroke `outline`, translated so its anchor lands on `origin`.
    fn draw_outline(&mut self, origin: [f32; 2], outline: &FaceOutline, style: &OutlineStyle);

    /// Draw `glyph` horizontally centered on `position`, with `position.y` as baseline.
    fn draw_glyph(&mut self, position: [f32; 2], glyph: &str, style: &GlyphStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Outline {
        origin: [f32; 2],
        outline: FaceOutline,
        style: OutlineStyle,
    },
    Glyph {
        position: [f32; 2],
        text: String,
        style: GlyphStyle,
    },
}

/// Canvas that records commands so a frame can be inspected or split across
/// backends (silhouette on the GPU, glyph in the UI layer).
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Last outline recorded since the previous clear.
    pub fn outline(&self) -> Option<([f32; 2], &FaceOutline, &OutlineStyle)> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Outline {
                origin,
                outline,
                style,
            } => Some((*origin, outline, style)),
            _ => None,
        })
    }

    pub fn glyphs(&self) -> impl Iterator<Item = ([f32; 2], &str, &GlyphStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Glyph {
                position,
                text,
                style,
            } => Some((*position, text.as_str(), style)),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_outline(&mut self, origin: [f32; 2], outline: &FaceOutline, style: &OutlineStyle) {
        self.commands.push(DrawCommand::Outline {
            origin,
            outline: outline.clone(),
            style: *style,
        });
    }

    fn draw_glyph(&mut self, position: [f32; 2], glyph: &str, style: &GlyphStyle) {
        self.commands.push(DrawCommand::Glyph {
            position,
            text: glyph.to_string(),
            style: *style,
        });
    }
}

impl Face {
    /// Draw one frame.
    ///
    /// The glyph is resolved before anything is drawn, so a strict missing-glyph
    /// failure leaves the canvas untouched.
    pub fn render(&self, canvas: &mut impl Canvas) -> FaceResult<()> {
        let glyph = self.expressions().glyph()?;
        let r = self.geometry().radius();
        let anchor = self.geometry().local_anchor();
        let offset = self.feature_offset();
        let style = self.style();

        canvas.clear();
        canvas.draw_outline(
            anchor,
            &self.outline(),
            &OutlineStyle {
                fill: self.expression().color,
                stroke: style.outline_color,
                stroke_width: style.outline_width,
            },
        );
        canvas.draw_glyph(
            [
                anchor[0] + offset[0],
                anchor[1] + offset[1] + r * style.glyph_baseline,
            ],
            glyph,
            &GlyphStyle {
                color: style.glyph_color,
                size: r * style.glyph_scale,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
