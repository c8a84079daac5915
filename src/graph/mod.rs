mod builder;
pub mod colour;
pub mod edge;
pub mod vertex;

pub use colour::Colour;
pub use edge::{EdgeAttributes, EdgeData, EdgeId, EdgeUpdate};
pub use vertex::{VertexAttributes, VertexData, VertexId, VertexUpdate};

use std::collections::HashMap;
use std::fmt;

use slotmap::SlotMap;

use crate::error::{ArgumentError, GraphError, Result};
use crate::math::{Point2, Vector2, MERGE_TOLERANCE};

/// An edge identified by its endpoint names, in stored orientation.
pub type EdgeKey = (String, String);

/// A graph of named vertices and undirected edges.
///
/// Vertices and edges live in slot-map arenas and are looked up by name through
/// side indices. Iteration follows insertion order, which keeps vertex naming
/// and merge precedence in [`Shape::generate_shape`] deterministic.
#[derive(Debug, Clone)]
pub struct Shape {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    names: HashMap<String, VertexId>,
    edge_index: HashMap<(VertexId, VertexId), EdgeId>,
    merge_tolerance: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            names: HashMap::new(),
            edge_index: HashMap::new(),
            merge_tolerance: MERGE_TOLERANCE,
        }
    }
}

impl Shape {
    /// Creates a new, empty shape using [`MERGE_TOLERANCE`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shape whose polygon builder merges positions closer than
    /// `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InvalidTolerance` if `tolerance` is negative or not finite.
    pub fn with_merge_tolerance(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ArgumentError::InvalidTolerance(tolerance).into());
        }
        Ok(Self {
            merge_tolerance: tolerance,
            ..Self::default()
        })
    }

    /// Distance within which the polygon builder reuses an existing vertex.
    #[must_use]
    pub fn merge_tolerance(&self) -> f64 {
        self.merge_tolerance
    }

    // --- Vertex operations ---

    /// Adds a vertex called `name`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::AlreadyExists` if the name is taken, or an
    /// `ArgumentError` if the position is not finite or the size is zero.
    pub fn add_vertex(
        &mut self,
        name: impl Into<String>,
        attributes: VertexAttributes,
    ) -> Result<VertexId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GraphError::AlreadyExists(format!("vertex '{name}'")).into());
        }
        attributes.validate()?;
        let id = self
            .vertices
            .insert(VertexData::new(name.clone(), attributes));
        self.names.insert(name, id);
        Ok(id)
    }

    /// Returns `true` if a vertex called `name` exists.
    #[must_use]
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns the data of the vertex called `name`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if there is no such vertex.
    pub fn vertex(&self, name: &str) -> Result<&VertexData> {
        let id = self.vertex_id(name)?;
        Ok(&self.vertices[id])
    }

    /// Changes one property of the vertex called `name`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if there is no such vertex, or an
    /// `ArgumentError` if the new value is out of domain.
    pub fn update_vertex(&mut self, name: &str, update: VertexUpdate) -> Result<()> {
        let id = self.vertex_id(name)?;
        self.vertices[id].apply(update)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex names in insertion order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.vertices.values().map(|v| v.name.as_str())
    }

    /// Position of every vertex, keyed by name.
    #[must_use]
    pub fn vertex_positions(&self) -> HashMap<String, Option<Point2>> {
        self.vertex_property(|v| v.position)
    }

    /// Size of every vertex, keyed by name.
    #[must_use]
    pub fn vertex_sizes(&self) -> HashMap<String, u32> {
        self.vertex_property(|v| v.size)
    }

    /// Colour of every vertex, keyed by name.
    #[must_use]
    pub fn vertex_colours(&self) -> HashMap<String, Colour> {
        self.vertex_property(|v| v.colour)
    }

    fn vertex_property<T>(&self, get: impl Fn(&VertexData) -> T) -> HashMap<String, T> {
        self.vertices
            .values()
            .map(|v| (v.name.clone(), get(v)))
            .collect()
    }

    fn vertex_id(&self, name: &str) -> Result<VertexId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NotFound(format!("vertex '{name}'")).into())
    }

    // --- Edge operations ---

    /// Adds an edge between `a` and `b`, creating unplaced endpoints as needed.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::AlreadyExists` if the vertices are already joined in
    /// either direction, or `ArgumentError::InvalidWeight` for a zero weight. The
    /// shape is unchanged on error.
    pub fn add_edge(&mut self, a: &str, b: &str, attributes: EdgeAttributes) -> Result<EdgeId> {
        if self.contains_edge(a, b) {
            return Err(GraphError::AlreadyExists(format!("edge ('{a}', '{b}')")).into());
        }
        attributes.validate()?;
        let start = self.vertex_id_or_insert(a)?;
        let end = self.vertex_id_or_insert(b)?;
        let id = self.edges.insert(EdgeData::new(start, end, attributes));
        self.edge_index.insert(edge_key(start, end), id);
        Ok(id)
    }

    /// Returns `true` if `a` and `b` are joined by an edge, in either direction.
    #[must_use]
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edge_id(a, b).is_ok()
    }

    /// Returns the data of the edge joining `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if there is no such edge.
    pub fn edge(&self, a: &str, b: &str) -> Result<&EdgeData> {
        let id = self.edge_id(a, b)?;
        Ok(&self.edges[id])
    }

    /// Changes one property of the edge joining `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if there is no such edge, or an
    /// `ArgumentError` if the new value is out of domain.
    pub fn update_edge(&mut self, a: &str, b: &str, update: EdgeUpdate) -> Result<()> {
        let id = self.edge_id(a, b)?;
        self.edges[id].apply(update)
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every edge as a pair of endpoint names, in insertion order.
    #[must_use]
    pub fn edge_list(&self) -> Vec<EdgeKey> {
        self.edges.values().map(|e| self.names_of(e)).collect()
    }

    /// Weight of every edge, keyed by its endpoint names.
    #[must_use]
    pub fn edge_weights(&self) -> HashMap<EdgeKey, u32> {
        self.edges
            .values()
            .map(|e| (self.names_of(e), e.weight))
            .collect()
    }

    /// Colour of every edge, keyed by its endpoint names.
    #[must_use]
    pub fn edge_colours(&self) -> HashMap<EdgeKey, Colour> {
        self.edges
            .values()
            .map(|e| (self.names_of(e), e.colour))
            .collect()
    }

    /// Displacement from the first endpoint of each edge to its second, in edge
    /// insertion order.
    ///
    /// This recovers the geometry actually stored in the graph, which can differ
    /// from the vectors a shape was generated from once vertices have merged.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MissingPosition` if an endpoint is unplaced.
    pub fn edge_vectors(&self) -> Result<Vec<(EdgeKey, Vector2)>> {
        self.edges
            .values()
            .map(|e| -> Result<(EdgeKey, Vector2)> {
                let vector = self.position(e.end)? - self.position(e.start)?;
                Ok((self.names_of(e), vector))
            })
            .collect()
    }

    /// Displacement from `a` to `b` along the edge joining them, whichever way
    /// round the edge was stored.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if there is no such edge, or
    /// `GraphError::MissingPosition` if an endpoint is unplaced.
    pub fn edge_vector(&self, a: &str, b: &str) -> Result<Vector2> {
        self.edge_id(a, b)?;
        let from = self.position(self.vertex_id(a)?)?;
        let to = self.position(self.vertex_id(b)?)?;
        Ok(to - from)
    }

    fn edge_id(&self, a: &str, b: &str) -> Result<EdgeId> {
        let not_found = || GraphError::NotFound(format!("edge ('{a}', '{b}')"));
        let (Some(&start), Some(&end)) = (self.names.get(a), self.names.get(b)) else {
            return Err(not_found().into());
        };
        self.edge_index
            .get(&edge_key(start, end))
            .copied()
            .ok_or_else(|| not_found().into())
    }

    fn vertex_id_or_insert(&mut self, name: &str) -> Result<VertexId> {
        match self.names.get(name) {
            Some(&id) => Ok(id),
            None => self.add_vertex(name, VertexAttributes::default()),
        }
    }

    fn position(&self, id: VertexId) -> Result<Point2> {
        let vertex = &self.vertices[id];
        vertex
            .position
            .ok_or_else(|| GraphError::MissingPosition(vertex.name.clone()).into())
    }

    fn names_of(&self, edge: &EdgeData) -> EdgeKey {
        (
            self.vertices[edge.start].name.clone(),
            self.vertices[edge.end].name.clone(),
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shape ({} vertices, {} edges)",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
