pub mod four_sided;
pub mod regular;

pub use four_sided::{ParallelogramSpec, RectangleSpec};
pub use regular::{Preset, RegularSpec};

use std::fmt;

use crate::error::{ArgumentError, PathError, Result};
use crate::graph::Shape;
use crate::lattice::{self, LatticeMode, LatticeOutcome};
use crate::math::path_2d::{centroid_offset, closure_gap, is_closed};
use crate::math::{
    advance, is_finite_point, round_vector, Point2, Vector2, CARTESIAN_PLACES, MERGE_TOLERANCE,
};

/// A closed polygon given directly by its edge vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularSpec {
    pub vectors: Vec<Vector2>,
    pub centre: Point2,
}

impl IrregularSpec {
    #[must_use]
    pub fn new(vectors: Vec<Vector2>, centre: Point2) -> Self {
        Self { vectors, centre }
    }

    fn validate(&self) -> Result<()> {
        if self.vectors.len() < 3 {
            return Err(PathError::TooFewVectors(self.vectors.len()).into());
        }
        for v in &self.vectors {
            if !(v.x.is_finite() && v.y.is_finite()) {
                return Err(ArgumentError::InvalidCoordinate { x: v.x, y: v.y }.into());
            }
        }
        if !is_closed(&self.vectors) {
            let gap = closure_gap(&self.vectors);
            return Err(PathError::NotClosed { dx: gap.x, dy: gap.y }.into());
        }
        validate_centre(&self.centre)
    }
}

/// Parameters of any polygon the crate can build.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonSpec {
    Regular(RegularSpec),
    Rectangle(RectangleSpec),
    Parallelogram(ParallelogramSpec),
    Irregular(IrregularSpec),
}

/// What kind of polygon a spec describes, after redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonKind {
    Regular { sides: usize },
    Rectangle,
    Parallelogram,
    Irregular { sides: usize },
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonKind::Regular { sides } => write!(f, "regular {sides}-gon"),
            PolygonKind::Rectangle => f.write_str("rectangle"),
            PolygonKind::Parallelogram => f.write_str("parallelogram"),
            PolygonKind::Irregular { sides } => write!(f, "irregular {sides}-gon"),
        }
    }
}

impl PolygonSpec {
    /// Collapses degenerate parameters onto the simpler shape they describe: a
    /// rectangle with equal sides becomes a square turned by 45 degrees, and a
    /// parallelogram with a right angle becomes a rectangle.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn canonical(self) -> Self {
        match self {
            PolygonSpec::Rectangle(rect) if rect.width == rect.height => {
                PolygonSpec::Regular(
                    RegularSpec::preset(Preset::Square)
                        .with_edge_length(rect.width)
                        .with_centre(rect.centre)
                        .with_rotation(rect.rotation + 45.0),
                )
            }
            PolygonSpec::Parallelogram(para) if para.angle == 90.0 => {
                PolygonSpec::Rectangle(para.as_rectangle()).canonical()
            }
            other => other,
        }
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns the `ArgumentError` or `PathError` for the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        match self {
            PolygonSpec::Regular(spec) => spec.validate(),
            PolygonSpec::Rectangle(spec) => spec.validate(),
            PolygonSpec::Parallelogram(spec) => spec.validate(),
            PolygonSpec::Irregular(spec) => spec.validate(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PolygonKind {
        match self {
            PolygonSpec::Regular(spec) => PolygonKind::Regular { sides: spec.sides },
            PolygonSpec::Rectangle(_) => PolygonKind::Rectangle,
            PolygonSpec::Parallelogram(_) => PolygonKind::Parallelogram,
            PolygonSpec::Irregular(spec) => PolygonKind::Irregular {
                sides: spec.vectors.len(),
            },
        }
    }

    #[must_use]
    pub fn centre(&self) -> Point2 {
        match self {
            PolygonSpec::Regular(spec) => spec.centre,
            PolygonSpec::Rectangle(spec) => spec.centre,
            PolygonSpec::Parallelogram(spec) => spec.centre,
            PolygonSpec::Irregular(spec) => spec.centre,
        }
    }

    /// Edge vectors walked from the first vertex.
    #[must_use]
    pub fn edge_vectors(&self) -> Vec<Vector2> {
        match self {
            PolygonSpec::Regular(spec) => spec.edge_vectors(),
            PolygonSpec::Rectangle(spec) => spec.edge_vectors(),
            PolygonSpec::Parallelogram(spec) => spec.edge_vectors(),
            PolygonSpec::Irregular(spec) => spec.vectors.clone(),
        }
    }

    /// Offset from the centre to the first vertex.
    #[must_use]
    pub fn radius_vector(&self) -> Vector2 {
        match self {
            PolygonSpec::Regular(spec) => spec.radius_vector(),
            PolygonSpec::Rectangle(spec) => spec.radius_vector(),
            PolygonSpec::Parallelogram(spec) => spec.radius_vector(),
            PolygonSpec::Irregular(spec) => {
                round_vector(centroid_offset(&spec.vectors), CARTESIAN_PLACES)
            }
        }
    }

    /// Position of the first vertex.
    #[must_use]
    pub fn start(&self) -> Point2 {
        advance(&self.centre(), &self.radius_vector())
    }

    /// Whether a circular lattice can be generated from this polygon.
    #[must_use]
    pub fn lattice_state(&self) -> bool {
        match self {
            PolygonSpec::Regular(spec) => spec.lattice_state(),
            PolygonSpec::Rectangle(_) | PolygonSpec::Parallelogram(_) => true,
            PolygonSpec::Irregular(_) => false,
        }
    }

    /// Whether the polygon has four sides with opposite sides parallel.
    #[must_use]
    pub fn is_four_sided(&self) -> bool {
        match self {
            PolygonSpec::Regular(spec) => spec.sides == 4,
            PolygonSpec::Rectangle(_) | PolygonSpec::Parallelogram(_) => true,
            PolygonSpec::Irregular(_) => false,
        }
    }
}

/// A polygon and the closed cycle of vertices and edges built from it.
///
/// The first vertex is named `0-0`, and so on round the cycle.
#[derive(Debug, Clone)]
pub struct Polygon {
    spec: PolygonSpec,
    shape: Shape,
}

impl Polygon {
    /// Builds the polygon described by `spec`, after collapsing degenerate
    /// parameters (see [`PolygonSpec::canonical`]).
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid. Nothing is built in that case.
    pub fn new(spec: PolygonSpec) -> Result<Self> {
        Self::with_merge_tolerance(spec, MERGE_TOLERANCE)
    }

    /// Like [`Polygon::new`], with a non-default merge tolerance that lattices
    /// generated from this polygon inherit.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter or the tolerance is invalid.
    pub fn with_merge_tolerance(spec: PolygonSpec, tolerance: f64) -> Result<Self> {
        spec.validate()?;
        let spec = spec.canonical();
        let mut shape = Shape::with_merge_tolerance(tolerance)?;
        let start = spec.start();
        if !is_finite_point(&start) {
            return Err(ArgumentError::InvalidCoordinate {
                x: start.x,
                y: start.y,
            }
            .into());
        }
        shape.generate_shape(start, "0", &spec.edge_vectors())?;
        tracing::debug!(kind = %spec.kind(), vertices = shape.vertex_count(), "built polygon");
        Ok(Self { spec, shape })
    }

    /// A regular polygon with `sides` sides.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentError` for fewer than 3 sides or an invalid length,
    /// centre or rotation.
    pub fn regular(sides: usize, edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::new(PolygonSpec::Regular(
            RegularSpec::new(sides)
                .with_edge_length(edge_length)
                .with_centre(centre)
                .with_rotation(rotation),
        ))
    }

    fn preset(preset: Preset, edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::regular(preset.sides(), edge_length, centre, rotation)
    }

    /// An equilateral triangle. See [`Polygon::regular`].
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn triangle(edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::preset(Preset::Triangle, edge_length, centre, rotation)
    }

    /// A square. With zero rotation its vertices lie on the axes.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn square(edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::preset(Preset::Square, edge_length, centre, rotation)
    }

    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn pentagon(edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::preset(Preset::Pentagon, edge_length, centre, rotation)
    }

    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn hexagon(edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::preset(Preset::Hexagon, edge_length, centre, rotation)
    }

    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn septagon(edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::preset(Preset::Septagon, edge_length, centre, rotation)
    }

    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn octagon(edge_length: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::preset(Preset::Octagon, edge_length, centre, rotation)
    }

    /// A rectangle, or a square when `width == height`.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentError` for an invalid length, centre or rotation.
    pub fn rectangle(width: f64, height: f64, centre: Point2, rotation: f64) -> Result<Self> {
        Self::new(PolygonSpec::Rectangle(
            RectangleSpec::new(width, height)
                .with_centre(centre)
                .with_rotation(rotation),
        ))
    }

    /// A parallelogram, or a rectangle when `angle == 90`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ParameterOutOfRange` unless `0 < angle < 180`, or
    /// another `ArgumentError` for an invalid length, centre or rotation.
    pub fn parallelogram(
        width: f64,
        height: f64,
        angle: f64,
        centre: Point2,
        rotation: f64,
    ) -> Result<Self> {
        Self::new(PolygonSpec::Parallelogram(
            ParallelogramSpec::new(width, height, angle)
                .with_centre(centre)
                .with_rotation(rotation),
        ))
    }

    /// The parameters the polygon was built from, after redirection.
    #[must_use]
    pub fn spec(&self) -> &PolygonSpec {
        &self.spec
    }

    #[must_use]
    pub fn kind(&self) -> PolygonKind {
        self.spec.kind()
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn into_shape(self) -> Shape {
        self.shape
    }

    /// Whether a circular lattice can be generated from this polygon.
    #[must_use]
    pub fn lattice_state(&self) -> bool {
        self.spec.lattice_state()
    }

    /// Tiles copies of this polygon into a new shape.
    ///
    /// A circular lattice grows `layers` rings outwards from this polygon; a
    /// stacked lattice is a `layers` by `layers` grid. Shapes that do not tile
    /// give [`LatticeOutcome::Infeasible`].
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InvalidLayers` if `layers` is zero.
    pub fn generate_lattice(&self, layers: usize, mode: LatticeMode) -> Result<LatticeOutcome> {
        if layers == 0 {
            return Err(ArgumentError::InvalidLayers(layers).into());
        }
        match mode {
            LatticeMode::Circular => lattice::circular(self, layers),
            LatticeMode::Stacked => lattice::stacked(self, layers, layers),
        }
    }

    /// Tiles `rows` by `columns` copies of this polygon on a grid.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InvalidLayers` if either count is zero.
    pub fn generate_lattice_stacked(&self, rows: usize, columns: usize) -> Result<LatticeOutcome> {
        if rows == 0 || columns == 0 {
            return Err(ArgumentError::InvalidLayers(rows.min(columns)).into());
        }
        lattice::stacked(self, rows, columns)
    }
}

pub(crate) fn validate_length(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ArgumentError::InvalidLength { parameter, value }.into())
    }
}

pub(crate) fn validate_centre(centre: &Point2) -> Result<()> {
    if is_finite_point(centre) {
        Ok(())
    } else {
        Err(ArgumentError::InvalidCentre {
            x: centre.x,
            y: centre.y,
        }
        .into())
    }
}

pub(crate) fn validate_rotation(rotation: f64) -> Result<()> {
    if rotation.is_finite() {
        Ok(())
    } else {
        Err(ArgumentError::InvalidRotation(rotation).into())
    }
}
