pub mod error;
pub mod factory;
pub mod graph;
pub mod lattice;
pub mod math;
pub mod polygon;
pub mod render;

pub use error::{PolylatError, Result};
pub use graph::Shape;
pub use lattice::{Lattice, LatticeMode, LatticeOutcome};
pub use polygon::{Polygon, PolygonSpec};
