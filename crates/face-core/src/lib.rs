pub mod config;
pub mod controller;
pub mod deform;
pub mod error;
pub mod expression;
pub mod face;
pub mod geometry;
pub mod mapper;
pub mod outline;
pub mod render;
pub mod renderer;
pub mod viewport;

#[cfg(feature = "gui")]
pub mod gui;

pub use config::{FaceConfig, GeometryConfig};
pub use controller::{Field, LoginConfig, LoginController, LoginMessages, MessageTone};
pub use deform::{DeformParams, DeformTuning};
pub use error::{FaceError, FaceResult};
pub use expression::{
    ExpressionMachine, ExpressionState, GlyphTable, MissingGlyphPolicy, DEFAULT_EXPRESSION,
};
pub use face::Face;
pub use geometry::FaceGeometry;
pub use outline::{FaceOutline, PathEl};
pub use render::{Canvas, DisplayList, DrawCommand, FaceStyle, GlyphStyle, OutlineStyle};
pub use renderer::{FaceRenderer, FaceUniforms};
pub use viewport::{SurfaceHost, SurfaceLayout, SurfaceRegistry, ViewportTracker};
