//! Tracks where the face anchor currently sits in page coordinates.

use std::collections::HashMap;

use crate::error::{FaceError, FaceResult};

/// Position and size of a drawing surface in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceLayout {
    /// Top-left corner of the surface's bounding box.
    pub origin: [f32; 2],
    /// Width and height.
    pub size: [f32; 2],
}

/// Host environment able to resolve a surface id into its current layout.
pub trait SurfaceHost {
    /// Current layout of `surface_id`, or why it cannot be drawn on.
    fn locate(&self, surface_id: &str) -> FaceResult<SurfaceLayout>;
}

#[derive(Clone, Copy, Debug)]
struct RegisteredSurface {
    layout: SurfaceLayout,
    drawable: bool,
}

/// In-memory [`SurfaceHost`] keyed by surface id.
///
/// Windowed hosts update the stored layouts on resize/scroll and then ask the face
/// to refresh its anchor.
#[derive(Clone, Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, RegisteredSurface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a drawable surface.
    pub fn register(&mut self, surface_id: impl Into<String>, layout: SurfaceLayout) {
        self.surfaces.insert(
            surface_id.into(),
            RegisteredSurface {
                layout,
                drawable: true,
            },
        );
    }

    /// Register a surface that exists but cannot hand out a drawing context.
    pub fn register_without_context(&mut self, surface_id: impl Into<String>, layout: SurfaceLayout) {
        self.surfaces.insert(
            surface_id.into(),
            RegisteredSurface {
                layout,
                drawable: false,
            },
        );
    }

    /// Move a registered surface. Returns `false` when the id is unknown.
    pub fn set_origin(&mut self, surface_id: &str, origin: [f32; 2]) -> bool {
        match self.surfaces.get_mut(surface_id) {
            Some(surface) => {
                surface.layout.origin = origin;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, surface_id: &str) -> Option<SurfaceLayout> {
        self.surfaces.remove(surface_id).map(|s| s.layout)
    }
}

impl SurfaceHost for SurfaceRegistry {
    fn locate(&self, surface_id: &str) -> FaceResult<SurfaceLayout> {
        match self.surfaces.get(surface_id) {
            Some(surface) if surface.drawable => Ok(surface.layout),
            Some(_) => Err(FaceError::ContextUnavailable(surface_id.to_string())),
            None => Err(FaceError::SurfaceNotFound(surface_id.to_string())),
        }
    }
}

/// Owner of the page-space anchor of one surface.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
    surface_id: String,
    local_anchor: [f32; 2],
    global_anchor: [f32; 2],
}

impl ViewportTracker {
    pub fn new(surface_id: impl Into<String>, local_anchor: [f32; 2], layout: &SurfaceLayout) -> Self {
        let mut tracker = Self {
            surface_id: surface_id.into(),
            local_anchor,
            global_anchor: local_anchor,
        };
        tracker.apply_layout(layout);
        tracker
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// Anchor in page coordinates as of the last successful refresh.
    pub fn global_anchor(&self) -> [f32; 2] {
        self.global_anchor
    }

    pub fn apply_layout(&mut self, layout: &SurfaceLayout) {
        self.global_anchor = [
            layout.origin[0] + self.local_anchor[0],
            layout.origin[1] + self.local_anchor[1],
        ];
    }

    /// Re-read the surface position from `host`.
    ///
    /// A surface the host can no longer resolve keeps its previous anchor until the
    /// next layout event. Returns whether the anchor was refreshed.
    pub fn refresh(&mut self, host: &impl SurfaceHost) -> bool {
        match host.locate(&self.surface_id) {
            Ok(layout) => {
                self.apply_layout(&layout);
                log::debug!(
                    "anchor for '{}' refreshed to {:?}",
                    self.surface_id,
                    self.global_anchor
                );
                true
            }
            Err(err) => {
                log::debug!("keeping stale anchor for '{}': {err}", self.surface_id);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
