//! Building polygons from a path of edge vectors.
//!
//! A closed path is classified by its rounded edge lengths and turn angles:
//! four sides with two distinct lengths and equal opposite angles make a
//! parallelogram (or rectangle), equal lengths and equal turns make a regular
//! polygon, and anything else is kept as an irregular polygon.

use crate::error::{PathError, Result};
use crate::graph::Shape;
use crate::math::path_2d::{closure_gap, counter_clockwise, edge_lengths, is_closed, turn_angles};
use crate::math::{direction_deg, Point2, Vector2};
use crate::polygon::{
    validate_centre, IrregularSpec, ParallelogramSpec, Polygon, PolygonSpec, Preset, RegularSpec,
};

/// What [`shape_from_vectors`] built.
#[derive(Debug, Clone)]
pub enum Built {
    /// The path does not return to its start, so it stays a plain path.
    Open(Shape),
    Closed(Polygon),
}

/// Builds whatever the path describes: a polygon if it closes, otherwise the
/// path itself walked from `centre`.
///
/// # Errors
///
/// Returns an `ArgumentError` for a non-finite centre or position, or any
/// error from [`polygon_from_vectors`].
pub fn shape_from_vectors(vectors: &[Vector2], centre: Point2) -> Result<Built> {
    validate_centre(&centre)?;
    if !is_closed(vectors) {
        let mut shape = Shape::new();
        shape.generate_shape(centre, "0", vectors)?;
        return Ok(Built::Open(shape));
    }
    polygon_from_vectors(vectors, centre).map(Built::Closed)
}

/// Builds the polygon whose edges are `vectors`, centred on `centre`.
///
/// # Errors
///
/// Returns `PathError::TooFewVectors` for fewer than 3 vectors,
/// `PathError::NotClosed` if the path does not return to its start, or
/// `ArgumentError::Degenerate` if a vector has zero length.
pub fn polygon_from_vectors(vectors: &[Vector2], centre: Point2) -> Result<Polygon> {
    if vectors.len() < 3 {
        return Err(PathError::TooFewVectors(vectors.len()).into());
    }
    if !is_closed(vectors) {
        let gap = closure_gap(vectors);
        return Err(PathError::NotClosed { dx: gap.x, dy: gap.y }.into());
    }
    let spec = classify(vectors, centre)?;
    tracing::debug!(kind = %spec.kind(), "classified vector path");
    Polygon::new(spec)
}

/// Infers the parameters of the polygon traced by a closed path.
///
/// Clockwise paths are reversed first. Lengths and angles are compared exactly
/// after rounding to 3 decimals, so a path that is only nearly regular is
/// classified as irregular.
///
/// # Errors
///
/// Returns `ArgumentError::Degenerate` if a vector has zero length.
#[allow(clippy::float_cmp)]
pub fn classify(vectors: &[Vector2], centre: Point2) -> Result<PolygonSpec> {
    let path = counter_clockwise(vectors);
    let lengths = edge_lengths(&path);
    let turns = turn_angles(&path)?;

    if path.len() == 4
        && turns[0] == turns[2]
        && turns[1] == turns[3]
        && lengths[0] == lengths[2]
        && lengths[1] == lengths[3]
        && lengths[0] != lengths[1]
    {
        let spec = ParallelogramSpec::new(lengths[0], lengths[1], turns[0])
            .with_centre(centre)
            .with_rotation(direction_deg(&path[0]) - 180.0);
        return Ok(PolygonSpec::Parallelogram(spec));
    }

    let regular = lengths.iter().all(|&l| l == lengths[0])
        && turns.iter().all(|&t| t == turns[0])
        && turns_once(&turns);
    if regular {
        let spec = RegularSpec::new(path.len())
            .with_edge_length(lengths[0])
            .with_centre(centre);
        let rotation = direction_deg(&path[0]) - (180.0 - spec.interior_angle() / 2.0);
        return Ok(PolygonSpec::Regular(spec.with_rotation(rotation)));
    }

    Ok(PolygonSpec::Irregular(IrregularSpec::new(path, centre)))
}

/// Whether the turns add up to one revolution, allowing for their rounding.
#[allow(clippy::cast_precision_loss)]
fn turns_once(turns: &[f64]) -> bool {
    let total: f64 = turns.iter().sum();
    (total - 360.0).abs() <= 0.001 * turns.len() as f64
}

/// A regular polygon by side count, with squares turned so that their sides
/// are parallel to the axes.
///
/// # Errors
///
/// Returns an `ArgumentError` for fewer than 3 sides or an invalid length,
/// centre or rotation.
pub fn regular(sides: usize, edge_length: f64, centre: Point2, rotation: f64) -> Result<Polygon> {
    let rotation = if sides == Preset::Square.sides() {
        rotation + 45.0
    } else {
        rotation
    };
    Polygon::regular(sides, edge_length, centre, rotation)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::{ArgumentError, PolylatError};
    use crate::lattice::LatticeMode;
    use crate::polygon::PolygonKind;
    use approx::assert_abs_diff_eq;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    fn hexagon_path() -> Vec<Vector2> {
        let h = 3f64.sqrt() / 2.0;
        vec![
            v(1.0, 0.0),
            v(0.5, h),
            v(-0.5, h),
            v(-1.0, 0.0),
            v(-0.5, -h),
            v(0.5, -h),
        ]
    }

    #[test]
    fn unit_square_path_is_regular() {
        let path = [v(1.0, 0.0), v(0.0, 1.0), v(-1.0, 0.0), v(0.0, -1.0)];
        let polygon = polygon_from_vectors(&path, Point2::origin()).unwrap();
        assert_eq!(polygon.kind(), PolygonKind::Regular { sides: 4 });
        for p in polygon.shape().vertex_positions().into_values() {
            let p = p.unwrap();
            assert_abs_diff_eq!(p.x.abs(), 0.5, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y.abs(), 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn clockwise_path_is_reversed() {
        let path = [v(0.0, 1.0), v(1.0, 0.0), v(0.0, -1.0), v(-1.0, 0.0)];
        let spec = classify(&path, Point2::origin()).unwrap();
        assert_eq!(spec.kind(), PolygonKind::Regular { sides: 4 });
        assert_eq!(spec.edge_vectors().first().copied(), Some(v(1.0, 0.0)));
    }

    #[test]
    fn hexagon_path_tiles() {
        let polygon = polygon_from_vectors(&hexagon_path(), Point2::new(2.0, 2.0)).unwrap();
        assert_eq!(polygon.kind(), PolygonKind::Regular { sides: 6 });
        let outcome = polygon.generate_lattice(2, LatticeMode::Circular).unwrap();
        assert_eq!(outcome.into_lattice().unwrap().shape().vertex_count(), 24);
    }

    #[test]
    fn paired_sides_make_a_rectangle() {
        let path = [v(2.0, 0.0), v(0.0, 1.0), v(-2.0, 0.0), v(0.0, -1.0)];
        let polygon = polygon_from_vectors(&path, Point2::origin()).unwrap();
        assert_eq!(polygon.kind(), PolygonKind::Rectangle);
        let PolygonSpec::Rectangle(rect) = polygon.spec() else {
            panic!("expected a rectangle, got {:?}", polygon.spec());
        };
        assert_abs_diff_eq!(rect.width, 2.0);
        assert_abs_diff_eq!(rect.height, 1.0);
        assert_eq!(rect.edge_vectors(), path.to_vec());
    }

    #[test]
    fn slanted_sides_make_a_parallelogram() {
        let path = [v(2.0, 0.0), v(0.5, 0.866), v(-2.0, 0.0), v(-0.5, -0.866)];
        let spec = classify(&path, Point2::origin()).unwrap();
        let PolygonSpec::Parallelogram(para) = &spec else {
            panic!("expected a parallelogram, got {spec:?}");
        };
        assert_abs_diff_eq!(para.width, 2.0);
        assert_abs_diff_eq!(para.height, 1.0);
        assert_abs_diff_eq!(para.angle, 60.0, epsilon = 0.01);
    }

    #[test]
    fn rhombus_is_irregular() {
        let h = 3f64.sqrt() / 2.0;
        let path = [v(1.0, 0.0), v(0.5, h), v(-1.0, 0.0), v(-0.5, -h)];
        let spec = classify(&path, Point2::origin()).unwrap();
        assert_eq!(spec.kind(), PolygonKind::Irregular { sides: 4 });
    }

    #[test]
    fn uneven_path_is_irregular() {
        let path = [v(2.0, 0.0), v(0.0, 1.0), v(-1.0, 1.0), v(-1.0, -2.0)];
        let polygon = polygon_from_vectors(&path, Point2::origin()).unwrap();
        assert_eq!(polygon.kind(), PolygonKind::Irregular { sides: 4 });
        assert!(!polygon.lattice_state());
    }

    #[test]
    fn rejected_paths() {
        let err = polygon_from_vectors(&[v(1.0, 0.0), v(-1.0, 0.0)], Point2::origin())
            .unwrap_err();
        assert!(matches!(err, PolylatError::Path(PathError::TooFewVectors(2))));

        let err = polygon_from_vectors(
            &[v(1.0, 0.0), v(0.0, 1.0), v(-1.0, 0.0)],
            Point2::origin(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PolylatError::Path(PathError::NotClosed { dx, dy }) if dx == 0.0 && dy == 1.0
        ));

        let err = polygon_from_vectors(
            &[v(1.0, 0.0), v(0.0, 0.0), v(-1.0, 0.0)],
            Point2::origin(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PolylatError::Argument(ArgumentError::Degenerate(_))
        ));
    }

    #[test]
    fn open_path_stays_a_path() {
        let built = shape_from_vectors(&[v(1.0, 0.0), v(0.0, 1.0)], Point2::origin()).unwrap();
        let Built::Open(shape) = built else {
            panic!("expected an open path");
        };
        assert_eq!(shape.vertex_count(), 3);
        assert_eq!(shape.edge_count(), 2);
    }

    #[test]
    fn closed_path_becomes_a_polygon() {
        let built = shape_from_vectors(&hexagon_path(), Point2::origin()).unwrap();
        let Built::Closed(polygon) = built else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.kind(), PolygonKind::Regular { sides: 6 });
        assert!(shape_from_vectors(&hexagon_path(), Point2::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn regular_squares_are_axis_aligned() {
        let square = regular(4, 1.0, Point2::origin(), 0.0).unwrap();
        for p in square.shape().vertex_positions().into_values() {
            let p = p.unwrap();
            assert_abs_diff_eq!(p.x.abs(), 0.5, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y.abs(), 0.5, epsilon = 1e-9);
        }
        let triangle = regular(3, 1.0, Point2::origin(), 0.0).unwrap();
        assert_eq!(
            triangle.shape().vertex_positions(),
            Polygon::triangle(1.0, Point2::origin(), 0.0)
                .unwrap()
                .shape()
                .vertex_positions()
        );
    }
}
