use super::vertex::VertexId;
use super::Colour;
use crate::error::{ArgumentError, Result};

slotmap::new_key_type! {
    /// Unique identifier for an edge in a shape.
    pub struct EdgeId;
}

/// Data associated with an edge.
///
/// Edges are undirected for identity purposes, but remember the orientation in
/// which they were added so that edge vectors point from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    /// First endpoint, as given when the edge was added.
    pub start: VertexId,
    /// Second endpoint.
    pub end: VertexId,
    /// Drawing thickness.
    pub weight: u32,
    /// Drawing colour.
    pub colour: Colour,
}

/// Properties supplied when an edge is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAttributes {
    pub weight: u32,
    pub colour: Colour,
}

impl Default for EdgeAttributes {
    fn default() -> Self {
        Self {
            weight: 1,
            colour: Colour::Black,
        }
    }
}

impl EdgeAttributes {
    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_weight(self.weight)
    }
}

/// A single-property change to an existing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpdate {
    Weight(u32),
    Colour(Colour),
}

impl EdgeData {
    pub(crate) fn new(start: VertexId, end: VertexId, attributes: EdgeAttributes) -> Self {
        Self {
            start,
            end,
            weight: attributes.weight,
            colour: attributes.colour,
        }
    }

    /// Applies `update` after validating its value.
    pub(crate) fn apply(&mut self, update: EdgeUpdate) -> Result<()> {
        match update {
            EdgeUpdate::Weight(weight) => {
                validate_weight(weight)?;
                self.weight = weight;
            }
            EdgeUpdate::Colour(colour) => self.colour = colour,
        }
        Ok(())
    }
}

fn validate_weight(weight: u32) -> Result<()> {
    if weight == 0 {
        return Err(ArgumentError::InvalidWeight(weight).into());
    }
    Ok(())
}
