use super::{CircularLattice, Placer};
use crate::error::Result;
use crate::math::{advance, polar_to_cartesian, Point2, Vector2};
use crate::polygon::RegularSpec;

/// Rings of regular hexagons.
///
/// Change vectors join the centres of neighbouring hexagons, `sqrt(3)` edge
/// lengths apart. Each ring steps out once along the fifth of them and then
/// walks `layer` copies along all six.
pub(crate) struct HexagonLattice {
    origin: Point2,
    change: [Vector2; 6],
    template: Vec<Vector2>,
}

impl HexagonLattice {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(spec: &RegularSpec, template: Vec<Vector2>) -> Self {
        let theta = spec.central_angle();
        let distance = 3f64.sqrt() * spec.edge_length;
        let change = std::array::from_fn(|i| {
            polar_to_cartesian(distance, i as f64 * theta + theta / 2.0 + spec.rotation)
        });
        Self {
            origin: advance(&spec.centre, &spec.radius_vector()),
            change,
            template,
        }
    }
}

impl CircularLattice for HexagonLattice {
    fn place_layer(&mut self, placer: &mut Placer, layer: usize) -> Result<()> {
        if layer > 0 {
            self.origin = advance(&self.origin, &self.change[4]);
        }
        placer.place(self.origin, &self.template)?;
        if layer == 0 {
            return Ok(());
        }
        for step in self.change {
            for _ in 0..layer {
                self.origin = advance(&self.origin, &step);
                placer.place(self.origin, &self.template)?;
            }
        }
        Ok(())
    }

    fn cells(&self, layers: usize) -> usize {
        1 + 3 * layers * (layers - 1)
    }
}
