use thiserror::Error;

/// Top-level error type for polylat.
#[derive(Debug, Error)]
pub enum PolylatError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Rejected input values. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("a regular polygon needs at least 3 sides, got {0}")]
    InvalidSides(usize),

    #[error("{parameter} = {value} must be a finite, non-negative length")]
    InvalidLength { parameter: &'static str, value: f64 },

    #[error("centre ({x}, {y}) is not a finite cartesian coordinate")]
    InvalidCentre { x: f64, y: f64 },

    #[error("rotation {0} is not a finite angle")]
    InvalidRotation(f64),

    #[error("position ({x}, {y}) is not a finite cartesian coordinate")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("vertex size must be a positive integer, got {0}")]
    InvalidSize(u32),

    #[error("edge weight must be a positive integer, got {0}")]
    InvalidWeight(u32),

    #[error("unsupported colour: {0}")]
    InvalidColour(String),

    #[error("a lattice needs at least one layer, got {0}")]
    InvalidLayers(usize),

    #[error("merge tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),

    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown lattice mode: {0}")]
    UnknownLatticeMode(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the vertex/edge graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} does not exist")]
    NotFound(String),

    #[error("vertex '{0}' has no position")]
    MissingPosition(String),
}

/// Errors raised while interpreting a vector path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("path does not return to its start (gap {dx}, {dy})")]
    NotClosed { dx: f64, dy: f64 },

    #[error("a polygon needs at least 3 edge vectors, got {0}")]
    TooFewVectors(usize),
}

/// Convenience type alias for results using [`PolylatError`].
pub type Result<T> = std::result::Result<T, PolylatError>;
