use super::{CircularLattice, Placer};
use crate::error::Result;
use crate::math::{advance, polar_to_cartesian, Point2, Vector2};
use crate::polygon::RegularSpec;

/// Rings of equilateral triangles.
///
/// Neighbouring triangles point in opposite directions, so there are two
/// templates: `upright` (the seed's own orientation) and `inverted`. Even
/// layers are built from upright copies and odd layers from inverted ones,
/// each ring starting from a corner reached by stepping the shared origin.
pub(crate) struct TriangleLattice {
    origin: Point2,
    change: [Vector2; 6],
    upright: [Vector2; 3],
    inverted: [Vector2; 3],
}

impl TriangleLattice {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(spec: &RegularSpec) -> Self {
        let interior = spec.interior_angle();
        let change: [Vector2; 6] = std::array::from_fn(|i| {
            polar_to_cartesian(
                spec.edge_length,
                30.0 + (i + 1) as f64 * interior + spec.rotation,
            )
        });
        Self {
            origin: advance(&spec.centre, &spec.radius_vector()),
            change,
            upright: [change[1], change[3], change[5]],
            inverted: [change[5], change[3], change[1]],
        }
    }

    /// Walks three sides of a ring, placing `first` copies along each even
    /// change vector followed by `second` copies along the next odd one.
    fn walk(
        &self,
        placer: &mut Placer,
        template: &[Vector2; 3],
        first: usize,
        second: usize,
    ) -> Result<()> {
        let mut position = self.origin;
        for i in 0..3 {
            let legs = [
                (first, self.change[2 * i]),
                (second, self.change[2 * i + 1]),
            ];
            for (count, step) in legs {
                for _ in 0..count {
                    placer.place(position, template)?;
                    position = advance(&position, &step);
                }
            }
        }
        Ok(())
    }
}

impl CircularLattice for TriangleLattice {
    fn place_layer(&mut self, placer: &mut Placer, layer: usize) -> Result<()> {
        if layer == 0 {
            return placer.place(self.origin, &self.upright);
        }
        if layer % 2 == 0 {
            self.origin = advance(&self.origin, &self.change[5]);
            self.origin = advance(&self.origin, &self.change[4]);
            let half = layer / 2;
            self.walk(placer, &self.upright, half, half)
        } else {
            self.origin = advance(&self.origin, &self.change[2]);
            let half = (layer + 1) / 2;
            self.walk(placer, &self.inverted, half, half - 1)
        }
    }

    fn cells(&self, layers: usize) -> usize {
        1 + 3 * layers * (layers - 1) / 2
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lattice::{init_tracing, LatticeMode};
    use crate::math::path_2d::closure_gap;
    use crate::polygon::{Polygon, Preset};
    use approx::assert_abs_diff_eq;

    #[test]
    fn templates_close_and_mirror() {
        let lattice = TriangleLattice::new(&RegularSpec::preset(Preset::Triangle));
        for template in [lattice.upright, lattice.inverted] {
            let gap = closure_gap(&template);
            assert_abs_diff_eq!(gap.x, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(gap.y, 0.0, epsilon = 1e-9);
        }
        assert_eq!(
            lattice.upright.to_vec(),
            RegularSpec::preset(Preset::Triangle).edge_vectors()
        );
        assert_eq!(lattice.inverted[0], lattice.upright[2]);
    }

    #[test]
    fn triangle_rings() {
        init_tracing();
        let triangle = Polygon::triangle(1.0, Point2::origin(), 0.0).unwrap();
        let expected = [(3, 3, 1), (6, 9, 4), (12, 21, 10), (18, 36, 19)];
        for (i, (vertices, edges, cells)) in expected.into_iter().enumerate() {
            let lattice = triangle
                .generate_lattice(i + 1, LatticeMode::Circular)
                .unwrap()
                .into_lattice()
                .unwrap();
            assert_eq!(lattice.shape().vertex_count(), vertices, "layers = {}", i + 1);
            assert_eq!(lattice.shape().edge_count(), edges, "layers = {}", i + 1);
            assert_eq!(lattice.cells(), cells);
        }
    }

    #[test]
    fn second_layer_shares_the_seed_edges() {
        let triangle = Polygon::triangle(1.0, Point2::origin(), 0.0).unwrap();
        let lattice = triangle
            .generate_lattice(2, LatticeMode::Circular)
            .unwrap()
            .into_lattice()
            .unwrap();
        let shape = lattice.shape();
        for (a, b) in [("0-0", "0-1"), ("0-1", "0-2"), ("0-2", "0-0")] {
            assert!(shape.contains_edge(a, b), "missing seed edge {a}-{b}");
        }
    }
}
