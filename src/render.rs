//! Flattening a shape into the points and segments a renderer draws.
//!
//! Nothing here feeds back into the graph; the screen transform is applied
//! only on the way out.

use crate::error::{GraphError, Result};
use crate::graph::{Colour, Shape};
use crate::math::{Point2, Vector2};

/// Linear map from shape units to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// Pixels per shape unit.
    pub scale: f64,
    /// Pixel position of the shape origin.
    pub offset: Vector2,
}

impl Default for ScreenTransform {
    /// 20 pixels per unit, origin in the middle of an 800 by 800 canvas.
    fn default() -> Self {
        Self {
            scale: 20.0,
            offset: Vector2::new(400.0, 400.0),
        }
    }
}

impl ScreenTransform {
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Maps `p` to whole pixels, truncating towards zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(&self, p: &Point2) -> [i32; 2] {
        let screen = p.coords * self.scale + self.offset;
        [screen.x as i32, screen.y as i32]
    }
}

/// A vertex as drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPoint {
    pub name: String,
    pub pixel: [i32; 2],
    pub size: u32,
    pub colour: Colour,
}

/// An edge as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSegment {
    pub start: [i32; 2],
    pub end: [i32; 2],
    pub weight: u32,
    pub colour: Colour,
}

/// Everything needed to draw a shape.
#[derive(Debug, Clone, Default)]
pub struct RenderData {
    /// Placed vertices, in insertion order.
    pub points: Vec<RenderPoint>,
    /// Edges, in insertion order.
    pub segments: Vec<RenderSegment>,
}

impl RenderData {
    /// Collects the placed vertices and all edges of `shape`. Unplaced vertices
    /// are not drawn.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MissingPosition` if an edge has an unplaced endpoint.
    pub fn from_shape(shape: &Shape, transform: &ScreenTransform) -> Result<Self> {
        let mut points = Vec::with_capacity(shape.vertex_count());
        for name in shape.vertex_names() {
            let vertex = shape.vertex(name)?;
            if let Some(position) = &vertex.position {
                points.push(RenderPoint {
                    name: vertex.name.clone(),
                    pixel: transform.apply(position),
                    size: vertex.size,
                    colour: vertex.colour,
                });
            }
        }

        let pixel = |name: &str| -> Result<[i32; 2]> {
            let position = shape
                .vertex(name)?
                .position
                .ok_or_else(|| GraphError::MissingPosition(name.to_owned()))?;
            Ok(transform.apply(&position))
        };
        let segments = shape
            .edge_list()
            .into_iter()
            .map(|(a, b)| {
                let edge = shape.edge(&a, &b)?;
                Ok(RenderSegment {
                    start: pixel(&a)?,
                    end: pixel(&b)?,
                    weight: edge.weight,
                    colour: edge.colour,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(points = points.len(), segments = segments.len(), "prepared render data");
        Ok(Self { points, segments })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolylatError;
    use crate::graph::{EdgeAttributes, VertexAttributes};
    use crate::polygon::Polygon;

    #[test]
    fn default_transform_centres_the_origin() {
        let t = ScreenTransform::default();
        assert_eq!(t.apply(&Point2::origin()), [400, 400]);
        assert_eq!(t.apply(&Point2::new(0.707, -0.707)), [414, 385]);
    }

    #[test]
    fn custom_transform() {
        let t = ScreenTransform::default()
            .with_scale(100.0)
            .with_offset(Vector2::new(0.0, 50.0));
        assert_eq!(t.apply(&Point2::new(1.5, 0.25)), [150, 75]);
    }

    #[test]
    fn polygon_render_data() {
        let square = Polygon::square(1.0, Point2::origin(), 45.0).unwrap();
        let data = RenderData::from_shape(square.shape(), &ScreenTransform::default()).unwrap();
        assert_eq!(data.points.len(), 4);
        assert_eq!(data.segments.len(), 4);
        assert_eq!(data.points[0].name, "0-0");
        assert_eq!(data.points[0].pixel, [410, 410]);
        assert_eq!(data.segments[0].start, [410, 410]);
        assert_eq!(data.segments[0].end, [390, 410]);
        assert_eq!(data.segments[3].end, data.segments[0].start);
    }

    #[test]
    fn attributes_are_carried() {
        let mut shape = Shape::new();
        shape
            .add_vertex(
                "a",
                VertexAttributes::at(Point2::new(1.0, 1.0))
                    .with_size(5)
                    .with_colour(Colour::Red),
            )
            .unwrap();
        shape
            .add_vertex("b", VertexAttributes::at(Point2::new(2.0, 1.0)))
            .unwrap();
        shape
            .add_edge("a", "b", EdgeAttributes::default().with_weight(3))
            .unwrap();
        shape.add_vertex("floating", VertexAttributes::default()).unwrap();

        let data = RenderData::from_shape(&shape, &ScreenTransform::default()).unwrap();
        assert_eq!(data.points.len(), 2);
        assert_eq!(data.points[0].size, 5);
        assert_eq!(data.points[0].colour, Colour::Red);
        assert_eq!(data.segments[0].weight, 3);
    }

    #[test]
    fn unplaced_edge_endpoint_fails() {
        let mut shape = Shape::new();
        shape.add_edge("a", "b", EdgeAttributes::default()).unwrap();
        let err = RenderData::from_shape(&shape, &ScreenTransform::default()).unwrap_err();
        assert!(matches!(
            err,
            PolylatError::Graph(GraphError::MissingPosition(_))
        ));
    }
}
