use super::Colour;
use crate::error::{ArgumentError, Result};
use crate::math::{is_finite_point, Point2};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a shape.
    pub struct VertexId;
}

/// Data associated with a vertex.
///
/// A vertex without a position is abstract: it can still take part in edges,
/// but contributes no geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexData {
    /// Name, unique within the owning shape.
    pub name: String,
    /// Cartesian position, if the vertex is placed.
    pub position: Option<Point2>,
    /// Drawing radius.
    pub size: u32,
    /// Drawing colour.
    pub colour: Colour,
}

/// Properties supplied when a vertex is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttributes {
    pub position: Option<Point2>,
    pub size: u32,
    pub colour: Colour,
}

impl Default for VertexAttributes {
    fn default() -> Self {
        Self {
            position: None,
            size: 1,
            colour: Colour::Black,
        }
    }
}

impl VertexAttributes {
    /// Default attributes for a vertex placed at `position`.
    #[must_use]
    pub fn at(position: Point2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(position) = &self.position {
            validate_position(position)?;
        }
        validate_size(self.size)
    }
}

/// A single-property change to an existing vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexUpdate {
    Position(Point2),
    Size(u32),
    Colour(Colour),
}

impl VertexData {
    pub(crate) fn new(name: String, attributes: VertexAttributes) -> Self {
        Self {
            name,
            position: attributes.position,
            size: attributes.size,
            colour: attributes.colour,
        }
    }

    /// Applies `update` after validating its value.
    pub(crate) fn apply(&mut self, update: VertexUpdate) -> Result<()> {
        match update {
            VertexUpdate::Position(position) => {
                validate_position(&position)?;
                self.position = Some(position);
            }
            VertexUpdate::Size(size) => {
                validate_size(size)?;
                self.size = size;
            }
            VertexUpdate::Colour(colour) => self.colour = colour,
        }
        Ok(())
    }
}

pub(crate) fn validate_position(position: &Point2) -> Result<()> {
    if is_finite_point(position) {
        Ok(())
    } else {
        Err(ArgumentError::InvalidCoordinate {
            x: position.x,
            y: position.y,
        }
        .into())
    }
}

fn validate_size(size: u32) -> Result<()> {
    if size == 0 {
        return Err(ArgumentError::InvalidSize(size).into());
    }
    Ok(())
}
