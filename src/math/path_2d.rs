use super::{round_to, round_vector, Point2, Vector2, CARTESIAN_PLACES, TOLERANCE};
use crate::error::{ArgumentError, Result};

/// Returns the positions visited when walking `vectors` from `start`, excluding
/// the position reached after the last vector.
#[must_use]
pub fn path_points(start: &Point2, vectors: &[Vector2]) -> Vec<Point2> {
    let mut points = Vec::with_capacity(vectors.len());
    let mut current = *start;
    for v in vectors {
        points.push(current);
        current += *v;
    }
    points
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sum of all vectors in the path, i.e. the displacement from start to end.
#[must_use]
pub fn closure_gap(vectors: &[Vector2]) -> Vector2 {
    vectors.iter().fold(Vector2::zeros(), |acc, v| acc + *v)
}

/// Returns `true` if the path ends where it starts, comparing at
/// [`CARTESIAN_PLACES`] precision.
#[must_use]
pub fn is_closed(vectors: &[Vector2]) -> bool {
    let gap = round_vector(closure_gap(vectors), CARTESIAN_PLACES);
    gap.x.abs() < TOLERANCE && gap.y.abs() < TOLERANCE
}

/// Magnitudes of the vectors, rounded to [`CARTESIAN_PLACES`].
#[must_use]
pub fn edge_lengths(vectors: &[Vector2]) -> Vec<f64> {
    vectors
        .iter()
        .map(|v| round_to(v.norm(), CARTESIAN_PLACES))
        .collect()
}

/// Unsigned turn angle in degrees from each vector to the next one, wrapping
/// from the last vector back to the first. Rounded to [`CARTESIAN_PLACES`].
///
/// # Errors
///
/// Returns `ArgumentError::Degenerate` if any vector has zero length.
pub fn turn_angles(vectors: &[Vector2]) -> Result<Vec<f64>> {
    let n = vectors.len();
    let mut angles = Vec::with_capacity(n);
    for i in 0..n {
        let a = &vectors[i];
        let b = &vectors[(i + 1) % n];
        let denom = a.norm() * b.norm();
        if denom < TOLERANCE {
            return Err(
                ArgumentError::Degenerate(format!("zero-length edge vector at {i}")).into(),
            );
        }
        let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
        angles.push(round_to(cos.acos().to_degrees(), CARTESIAN_PLACES));
    }
    Ok(angles)
}

/// Offset from a shape's first vertex to its centroid, negated so that adding it
/// to the desired centre gives the first vertex.
///
/// The centroid is the mean of the vertices visited by the walk, measured from
/// the first vertex.
#[must_use]
pub fn centroid_offset(vectors: &[Vector2]) -> Vector2 {
    let n = vectors.len();
    if n == 0 {
        return Vector2::zeros();
    }
    let mut partial = Vector2::zeros();
    let mut total = Vector2::zeros();
    for v in &vectors[..n - 1] {
        partial += *v;
        total += partial;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = n as f64;
    -total / n
}

/// Returns the path walked counter-clockwise. A clockwise path is reversed and
/// each of its vectors negated; a counter-clockwise one is returned unchanged.
#[must_use]
pub fn counter_clockwise(vectors: &[Vector2]) -> Vec<Vector2> {
    let points = path_points(&Point2::origin(), vectors);
    if signed_area_2d(&points) < 0.0 {
        vectors.iter().rev().map(|v| -v).collect()
    } else {
        vectors.to_vec()
    }
}
