/// Convenience result type used across the face crate.
pub type FaceResult<T> = Result<T, FaceError>;

/// Errors raised while building or rendering a face.
///
/// Construction errors are fatal: there is no fallback rendering path when the
/// drawing surface cannot be bound.
#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    /// The host has no surface registered under this id.
    #[error("surface '{0}' not found")]
    SurfaceNotFound(String),

    /// The surface exists but cannot provide a 2D drawing context.
    #[error("surface '{0}' has no 2D drawing context")]
    ContextUnavailable(String),

    /// The glyph table lacks the mandatory `default` entry.
    #[error("glyph table has no 'default' entry")]
    MissingDefaultGlyph,

    /// The active expression has no glyph and the policy is strict.
    #[error("no glyph for expression '{0}'")]
    UnknownExpression(String),

    /// Radius or surface dimensions cannot produce a usable face.
    #[error("invalid face geometry: {0}")]
    InvalidGeometry(String),

    /// Malformed JSON configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading or writing a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FaceError {
    /// Build a [`FaceError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }
}

#[cfg(test)]
#[path = "../tests/unit/error.rs"]
mod tests;
