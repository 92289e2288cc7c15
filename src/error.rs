use thiserror::Error;

/// Top-level error type for the predicate library.
#[derive(Debug, Error)]
pub enum PredicateError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Inputs for which a predicate has no defined answer.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("line is degenerate: start and end points coincide")]
    DegenerateLine,

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("all polygon vertices are collinear")]
    Collinear,

    #[error("circle radius {radius} must be finite and non-negative")]
    InvalidRadius { radius: f64 },
}

/// Errors related to predicate configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tolerance {value} must be finite and positive")]
    InvalidTolerance { value: f64 },
}

/// Convenience type alias for results using [`PredicateError`].
pub type Result<T> = std::result::Result<T, PredicateError>;
