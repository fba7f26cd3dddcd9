use thiserror::Error;

/// Top-level error type for the flagcraft crate.
#[derive(Debug, Error)]
pub enum FlagcraftError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to serialize geometry: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),
}

/// Errors related to flag catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

/// Convenience type alias for results using [`FlagcraftError`].
pub type Result<T> = std::result::Result<T, FlagcraftError>;
