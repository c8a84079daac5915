pub mod path_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default distance within which the polygon builder treats two positions as the
/// same vertex.
///
/// This is an absolute distance in shape units and is not scaled to edge length,
/// so very small shapes can merge vertices that should stay apart and very large
/// shapes can keep apart vertices that should merge.
pub const MERGE_TOLERANCE: f64 = 0.01;

/// Decimal places kept by polar to cartesian conversion.
pub const CARTESIAN_PLACES: i32 = 3;

/// Decimal places kept when a position is advanced by a vector.
pub const POSITION_PLACES: i32 = 6;

/// Rounds `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Rounds both components of a vector to `places` decimal places.
#[must_use]
pub fn round_vector(v: Vector2, places: i32) -> Vector2 {
    Vector2::new(round_to(v.x, places), round_to(v.y, places))
}

/// Converts a polar vector (`length`, `angle` in degrees, anti-clockwise from +x)
/// to cartesian form, rounded to [`CARTESIAN_PLACES`].
#[must_use]
pub fn polar_to_cartesian(length: f64, angle_deg: f64) -> Vector2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    round_vector(Vector2::new(length * cos, length * sin), CARTESIAN_PLACES)
}

/// Moves `point` by `v`, rounding the result to [`POSITION_PLACES`].
#[must_use]
pub fn advance(point: &Point2, v: &Vector2) -> Point2 {
    let moved = point + v;
    Point2::new(
        round_to(moved.x, POSITION_PLACES),
        round_to(moved.y, POSITION_PLACES),
    )
}

/// Direction of `v` in degrees, in `(-180, 180]`.
#[must_use]
pub fn direction_deg(v: &Vector2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Returns `true` if both coordinates are finite.
#[must_use]
pub fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
