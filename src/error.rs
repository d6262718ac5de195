use thiserror::Error;

/// Top-level error type for the pipcube engine.
#[derive(Debug, Error)]
pub enum PipcubeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while laying out or building the die.
///
/// Both are precondition violations: they point at a wiring or
/// configuration defect and are never retried.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("mark count {0} is outside 1..=6")]
    InvalidMarkCount(u8),

    #[error("{parameter} = {value} must be positive and finite")]
    InvalidDimension { parameter: &'static str, value: f64 },

    #[error(
        "pips of radius {radius} at spread {spread} do not fit a face of half-width {half_width}"
    )]
    CrowdedLayout {
        spread: f64,
        radius: f64,
        half_width: f64,
    },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised by the page-content collaborator.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("admin panel is locked")]
    Unauthorized,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience type alias for results using [`PipcubeError`].
pub type Result<T> = std::result::Result<T, PipcubeError>;
