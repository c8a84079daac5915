//! Tessellations built by stamping copies of a polygon into one shape.
//!
//! Every copy goes through [`Shape::generate_shape`], so vertices shared by
//! neighbouring copies merge and the result is a single connected mesh.

mod four_sided;
mod hexagon;
mod stacked;
mod triangle;

pub(crate) use stacked::stacked;

use std::fmt;
use std::str::FromStr;

use four_sided::FourSidedLattice;
use hexagon::HexagonLattice;
use triangle::TriangleLattice;

use crate::error::{ArgumentError, Result};
use crate::graph::Shape;
use crate::math::{Point2, Vector2};
use crate::polygon::{Polygon, PolygonKind, PolygonSpec};

/// How copies are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatticeMode {
    /// Rings of copies growing outwards from the seed polygon.
    Circular,
    /// A grid of copies translated along two edge directions.
    Stacked,
}

impl fmt::Display for LatticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeMode::Circular => f.write_str("circular"),
            LatticeMode::Stacked => f.write_str("stacked"),
        }
    }
}

impl FromStr for LatticeMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(LatticeMode::Circular),
            "stacked" => Ok(LatticeMode::Stacked),
            _ => Err(ArgumentError::UnknownLatticeMode(s.to_owned())),
        }
    }
}

/// Size of a generated lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Circular { layers: usize },
    Stacked { rows: usize, columns: usize },
}

/// A tessellation and how it was generated.
#[derive(Debug, Clone)]
pub struct Lattice {
    shape: Shape,
    kind: PolygonKind,
    extent: Extent,
    cells: usize,
}

impl Lattice {
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn into_shape(self) -> Shape {
        self.shape
    }

    /// Kind of polygon the lattice is tiled with.
    #[must_use]
    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[must_use]
    pub fn mode(&self) -> LatticeMode {
        match self.extent {
            Extent::Circular { .. } => LatticeMode::Circular,
            Extent::Stacked { .. } => LatticeMode::Stacked,
        }
    }

    /// Number of distinct polygons the lattice tiles.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.cells
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lattice of {} {} cells: {}",
            self.mode(),
            self.cells,
            self.kind,
            self.shape
        )
    }
}

/// Result of asking for a lattice.
#[derive(Debug, Clone)]
pub enum LatticeOutcome {
    Built(Lattice),
    /// The polygon does not tile in the requested mode.
    Infeasible { kind: PolygonKind, mode: LatticeMode },
}

impl LatticeOutcome {
    #[must_use]
    pub fn is_built(&self) -> bool {
        matches!(self, LatticeOutcome::Built(_))
    }

    /// The lattice, if one was built.
    #[must_use]
    pub fn into_lattice(self) -> Option<Lattice> {
        match self {
            LatticeOutcome::Built(lattice) => Some(lattice),
            LatticeOutcome::Infeasible { .. } => None,
        }
    }

    fn infeasible(kind: PolygonKind, mode: LatticeMode) -> Self {
        tracing::warn!(%kind, %mode, "lattice not possible with this shape");
        LatticeOutcome::Infeasible { kind, mode }
    }
}

/// Stamps polygon copies into one shape under increasing integer prefixes.
pub(crate) struct Placer {
    shape: Shape,
    next: usize,
}

impl Placer {
    fn new(tolerance: f64) -> Result<Self> {
        Ok(Self {
            shape: Shape::with_merge_tolerance(tolerance)?,
            next: 0,
        })
    }

    pub(crate) fn place(&mut self, origin: Point2, vectors: &[Vector2]) -> Result<()> {
        let prefix = self.next.to_string();
        self.shape.generate_shape(origin, &prefix, vectors)?;
        self.next += 1;
        Ok(())
    }
}

/// Ring-by-ring placement for one kind of polygon.
///
/// Layer 0 is the seed polygon. Implementations may carry position state from
/// one layer to the next, so layers must be placed in order.
pub(crate) trait CircularLattice {
    fn place_layer(&mut self, placer: &mut Placer, layer: usize) -> Result<()>;

    /// Number of polygons covered by `layers` layers.
    fn cells(&self, layers: usize) -> usize;
}

fn circular_strategy(polygon: &Polygon) -> Result<Option<Box<dyn CircularLattice>>> {
    let spec = polygon.spec();
    if !spec.lattice_state() {
        return Ok(None);
    }
    let strategy: Box<dyn CircularLattice> = match spec {
        PolygonSpec::Regular(regular) if regular.sides == 3 => {
            Box::new(TriangleLattice::new(regular))
        }
        PolygonSpec::Regular(regular) if regular.sides == 6 => {
            Box::new(HexagonLattice::new(regular, template(polygon)?))
        }
        _ if spec.is_four_sided() => {
            Box::new(FourSidedLattice::new(spec, four_sided_template(polygon)?))
        }
        _ => return Ok(None),
    };
    Ok(Some(strategy))
}

pub(crate) fn circular(polygon: &Polygon, layers: usize) -> Result<LatticeOutcome> {
    let kind = polygon.kind();
    let Some(mut strategy) = circular_strategy(polygon)? else {
        return Ok(LatticeOutcome::infeasible(kind, LatticeMode::Circular));
    };
    let mut placer = Placer::new(polygon.shape().merge_tolerance())?;
    for layer in 0..layers {
        strategy.place_layer(&mut placer, layer)?;
        tracing::debug!(
            %kind,
            layer,
            placed = placer.next,
            vertices = placer.shape.vertex_count(),
            "placed lattice layer"
        );
    }
    Ok(LatticeOutcome::Built(Lattice {
        shape: placer.shape,
        kind,
        extent: Extent::Circular { layers },
        cells: strategy.cells(layers),
    }))
}

/// Edge vectors of the polygon as stored in its shape.
fn template(polygon: &Polygon) -> Result<Vec<Vector2>> {
    Ok(polygon
        .shape()
        .edge_vectors()?
        .into_iter()
        .map(|(_, v)| v)
        .collect())
}

/// Edge vectors of a four-sided polygon, in walk order.
fn four_sided_template(polygon: &Polygon) -> Result<[Vector2; 4]> {
    let vectors = template(polygon)?;
    <[Vector2; 4]>::try_from(vectors).map_err(|v| {
        ArgumentError::Degenerate(format!(
            "four-sided lattice needs 4 edge vectors, polygon has {}",
            v.len()
        ))
        .into()
    })
}

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolylatError;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("circular".parse::<LatticeMode>().unwrap(), LatticeMode::Circular);
        assert_eq!(" Stacked".parse::<LatticeMode>().unwrap(), LatticeMode::Stacked);
        assert_eq!(
            "spiral".parse::<LatticeMode>(),
            Err(ArgumentError::UnknownLatticeMode("spiral".into()))
        );
        assert_eq!(LatticeMode::Stacked.to_string(), "stacked");
    }

    #[test]
    fn pentagon_does_not_tile() {
        init_tracing();
        let pentagon = Polygon::pentagon(1.0, Point2::origin(), 0.0).unwrap();
        for mode in [LatticeMode::Circular, LatticeMode::Stacked] {
            let outcome = pentagon.generate_lattice(3, mode).unwrap();
            assert!(!outcome.is_built());
            assert!(matches!(
                outcome,
                LatticeOutcome::Infeasible {
                    kind: PolygonKind::Regular { sides: 5 },
                    mode: m,
                } if m == mode
            ));
        }
    }

    #[test]
    fn stacked_needs_four_sides() {
        init_tracing();
        let hexagon = Polygon::hexagon(1.0, Point2::origin(), 0.0).unwrap();
        let outcome = hexagon.generate_lattice_stacked(2, 2).unwrap();
        assert!(outcome.into_lattice().is_none());
    }

    #[test]
    fn single_layer_is_the_polygon() {
        init_tracing();
        let square = Polygon::square(1.0, Point2::origin(), 0.0).unwrap();
        let lattice = square
            .generate_lattice(1, LatticeMode::Circular)
            .unwrap()
            .into_lattice()
            .unwrap();
        assert_eq!(lattice.shape().vertex_count(), 4);
        assert_eq!(lattice.shape().edge_count(), 4);
        assert_eq!(lattice.shape().vertex_positions(), square.shape().vertex_positions());
        assert_eq!(lattice.cells(), 1);
        assert_eq!(lattice.mode(), LatticeMode::Circular);
        assert_eq!(lattice.extent(), Extent::Circular { layers: 1 });
    }

    #[test]
    fn display_summary() {
        let hexagon = Polygon::hexagon(1.0, Point2::origin(), 0.0).unwrap();
        let lattice = hexagon
            .generate_lattice(2, LatticeMode::Circular)
            .unwrap()
            .into_lattice()
            .unwrap();
        assert_eq!(
            lattice.to_string(),
            "circular lattice of 7 regular 6-gon cells: Shape (24 vertices, 30 edges)"
        );
    }

    #[test]
    fn irregular_polygons_do_not_tile() {
        let spec = PolygonSpec::Irregular(crate::polygon::IrregularSpec::new(
            vec![
                Vector2::new(2.0, 0.0),
                Vector2::new(0.0, 1.0),
                Vector2::new(-1.0, 1.0),
                Vector2::new(-1.0, -2.0),
            ],
            Point2::origin(),
        ));
        let polygon = Polygon::new(spec).unwrap();
        let outcome = polygon.generate_lattice(2, LatticeMode::Circular).unwrap();
        assert!(!outcome.is_built());
        let outcome = polygon.generate_lattice(2, LatticeMode::Stacked).unwrap();
        assert!(!outcome.is_built());
    }

    #[test]
    fn placer_prefixes_increase() {
        let mut placer = Placer::new(0.01).unwrap();
        let square = [
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
            Vector2::new(0.0, -1.0),
        ];
        placer.place(Point2::origin(), &square).unwrap();
        placer.place(Point2::new(5.0, 0.0), &square).unwrap();
        assert!(placer.shape.contains_vertex("0-0"));
        assert!(placer.shape.contains_vertex("1-0"));
        assert_eq!(placer.next, 2);
        let err = Placer::new(f64::NAN).err().unwrap();
        assert!(matches!(
            err,
            PolylatError::Argument(ArgumentError::InvalidTolerance(_))
        ));
    }
}
