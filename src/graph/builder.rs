use super::{EdgeAttributes, Shape, VertexAttributes, VertexId};
use crate::error::{GraphError, Result};
use crate::math::{advance, Point2, Vector2};

/// Where one step of a polygon walk lands.
enum Stop {
    Existing(String),
    Planned(usize),
}

impl Shape {
    /// Returns the first vertex, in insertion order, lying within the merge
    /// tolerance of `point`. Unplaced vertices never match.
    #[must_use]
    pub fn find_vertex_near(&self, point: &Point2) -> Option<VertexId> {
        let limit = self.merge_tolerance * self.merge_tolerance;
        self.vertices.iter().find_map(|(id, v)| {
            let position = v.position?;
            ((position - point).norm_squared() <= limit).then_some(id)
        })
    }

    /// Walks `vectors` from `start`, adding a vertex named `"<prefix>-<k>"` for
    /// every position `k` of the walk and joining consecutive positions with
    /// edges. Returns the vertex names visited, `vectors.len() + 1` of them.
    ///
    /// A position within the merge tolerance of an existing vertex (or of a vertex
    /// created earlier in the same walk) reuses that vertex instead. Edges that
    /// already exist are left alone, which is how neighbouring polygons in a
    /// lattice end up sharing their boundary.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentError` if a position is not finite, or
    /// `GraphError::AlreadyExists` if a name the walk needs is already used by a
    /// vertex elsewhere. The shape is unchanged on error.
    pub fn generate_shape(
        &mut self,
        start: Point2,
        prefix: &str,
        vectors: &[Vector2],
    ) -> Result<Vec<String>> {
        let limit = self.merge_tolerance * self.merge_tolerance;
        let mut planned: Vec<(String, Point2)> = Vec::new();
        let mut stops = Vec::with_capacity(vectors.len() + 1);
        let mut position = start;

        for k in 0..=vectors.len() {
            let stop = if let Some(id) = self.find_vertex_near(&position) {
                let name = self.vertices[id].name.clone();
                tracing::trace!(vertex = %name, step = k, "reusing existing vertex");
                Stop::Existing(name)
            } else if let Some(index) = planned
                .iter()
                .position(|(_, p)| (p - position).norm_squared() <= limit)
            {
                Stop::Planned(index)
            } else {
                let name = format!("{prefix}-{k}");
                if self.contains_vertex(&name) {
                    return Err(GraphError::AlreadyExists(format!("vertex '{name}'")).into());
                }
                super::vertex::validate_position(&position)?;
                planned.push((name, position));
                Stop::Planned(planned.len() - 1)
            };
            stops.push(stop);
            if let Some(v) = vectors.get(k) {
                position = advance(&position, v);
            }
        }

        for (name, position) in &planned {
            self.add_vertex(name.as_str(), VertexAttributes::at(*position))?;
        }

        let names: Vec<String> = stops
            .into_iter()
            .map(|stop| match stop {
                Stop::Existing(name) => name,
                Stop::Planned(index) => planned[index].0.clone(),
            })
            .collect();

        for pair in names.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a != b && !self.contains_edge(a, b) {
                self.add_edge(a, b, EdgeAttributes::default())?;
            }
        }
        Ok(names)
    }
}
