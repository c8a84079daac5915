use super::{CircularLattice, Placer};
use crate::error::Result;
use crate::math::{advance, round_vector, Point2, Vector2, CARTESIAN_PLACES};
use crate::polygon::PolygonSpec;

/// Rings of squares, rectangles or parallelograms.
///
/// Each ring starts one doubled radius vector further out than the last and
/// walks `2 * layer` copies along each edge direction.
pub(crate) struct FourSidedLattice {
    centre: Point2,
    radius_vector: Vector2,
    template: [Vector2; 4],
}

impl FourSidedLattice {
    pub(crate) fn new(spec: &PolygonSpec, template: [Vector2; 4]) -> Self {
        Self {
            centre: spec.centre(),
            radius_vector: spec.radius_vector(),
            template,
        }
    }
}

impl CircularLattice for FourSidedLattice {
    #[allow(clippy::cast_precision_loss)]
    fn place_layer(&mut self, placer: &mut Placer, layer: usize) -> Result<()> {
        let reach = (2 * layer + 1) as f64;
        let mut origin = advance(
            &self.centre,
            &round_vector(self.radius_vector * reach, CARTESIAN_PLACES),
        );
        if layer == 0 {
            return placer.place(origin, &self.template);
        }
        for step in self.template {
            for _ in 0..2 * layer {
                placer.place(origin, &self.template)?;
                origin = advance(&origin, &step);
            }
        }
        Ok(())
    }

    fn cells(&self, layers: usize) -> usize {
        (2 * layers - 1).pow(2)
    }
}
