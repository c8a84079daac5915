use super::{validate_centre, validate_length, validate_rotation};
use crate::error::{ArgumentError, Result};
use crate::math::{polar_to_cartesian, round_to, Point2, Vector2, CARTESIAN_PLACES, TOLERANCE};

/// Named regular polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
}

impl Preset {
    /// Number of sides of the preset.
    #[must_use]
    pub fn sides(self) -> usize {
        match self {
            Preset::Triangle => 3,
            Preset::Square => 4,
            Preset::Pentagon => 5,
            Preset::Hexagon => 6,
            Preset::Septagon => 7,
            Preset::Octagon => 8,
        }
    }
}

/// Parameters of an equilateral, equiangular polygon.
///
/// `rotation` is in degrees, anti-clockwise about the centre, and is not
/// normalised. With zero rotation the first vertex lies on the +x axis from the
/// centre, so a square starts out as a diamond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularSpec {
    pub sides: usize,
    pub edge_length: f64,
    pub centre: Point2,
    pub rotation: f64,
}

impl RegularSpec {
    /// A unit-edge polygon with `sides` sides, centred on the origin.
    #[must_use]
    pub fn new(sides: usize) -> Self {
        Self {
            sides,
            edge_length: 1.0,
            centre: Point2::origin(),
            rotation: 0.0,
        }
    }

    /// Default parameters for a named preset.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        Self::new(preset.sides())
    }

    #[must_use]
    pub fn with_edge_length(mut self, edge_length: f64) -> Self {
        self.edge_length = edge_length;
        self
    }

    #[must_use]
    pub fn with_centre(mut self, centre: Point2) -> Self {
        self.centre = centre;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(ArgumentError::InvalidSides(self.sides).into());
        }
        validate_length("edge_length", self.edge_length)?;
        validate_centre(&self.centre)?;
        validate_rotation(self.rotation)
    }

    /// Interior angle in degrees, rounded to 3 decimals.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn interior_angle(&self) -> f64 {
        let sides = self.sides as f64;
        round_to((sides - 2.0) * 180.0 / sides, CARTESIAN_PLACES)
    }

    /// Angle turned at each vertex, `180 - interior_angle`.
    #[must_use]
    pub fn central_angle(&self) -> f64 {
        180.0 - self.interior_angle()
    }

    /// Distance from the centre to each vertex, rounded to 3 decimals.
    #[must_use]
    pub fn circumradius(&self) -> f64 {
        let half = (self.central_angle() / 2.0).to_radians();
        round_to(self.edge_length / (2.0 * half.sin()), CARTESIAN_PLACES)
    }

    /// Offset from the centre to the first vertex.
    #[must_use]
    pub fn radius_vector(&self) -> Vector2 {
        polar_to_cartesian(self.circumradius(), self.rotation)
    }

    /// Edge vectors walked anti-clockwise from the first vertex.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn edge_vectors(&self) -> Vec<Vector2> {
        let theta = self.central_angle();
        let offset = 180.0 - self.interior_angle() / 2.0 + self.rotation;
        (0..self.sides)
            .map(|i| polar_to_cartesian(self.edge_length, i as f64 * theta + offset))
            .collect()
    }

    /// Whether copies of this polygon tile the plane around a vertex, i.e. the
    /// interior angle divides 360 exactly.
    #[must_use]
    pub fn lattice_state(&self) -> bool {
        let turns = 360.0 / self.interior_angle();
        (turns - turns.round()).abs() < TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolylatError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn preset_defaults() {
        let spec = RegularSpec::preset(Preset::Septagon);
        assert_eq!(spec.sides, 7);
        assert_abs_diff_eq!(spec.edge_length, 1.0);
        assert_eq!(spec.centre, Point2::origin());
        assert_abs_diff_eq!(spec.rotation, 0.0);
    }

    #[test]
    fn derived_angles() {
        let pentagon = RegularSpec::preset(Preset::Pentagon);
        assert_abs_diff_eq!(pentagon.interior_angle(), 108.0);
        assert_abs_diff_eq!(pentagon.central_angle(), 72.0);
        let septagon = RegularSpec::preset(Preset::Septagon);
        assert_abs_diff_eq!(septagon.interior_angle(), 128.571);
    }

    #[test]
    fn square_radius_vector() {
        let square = RegularSpec::preset(Preset::Square);
        assert_abs_diff_eq!(square.circumradius(), 0.707);
        let rv = square.radius_vector();
        assert_abs_diff_eq!(rv.x, 0.707);
        assert_abs_diff_eq!(rv.y, 0.0);

        let turned = square.with_rotation(45.0).radius_vector();
        assert_abs_diff_eq!(turned.x, 0.5);
        assert_abs_diff_eq!(turned.y, 0.5);
    }

    #[test]
    fn triangle_edge_vectors() {
        let vectors = RegularSpec::preset(Preset::Triangle).edge_vectors();
        assert_eq!(
            vectors,
            vec![
                Vector2::new(-0.866, 0.5),
                Vector2::new(0.0, -1.0),
                Vector2::new(0.866, 0.5)
            ]
        );
    }

    #[test]
    fn hexagon_radius_is_edge_length() {
        let hexagon = RegularSpec::preset(Preset::Hexagon).with_edge_length(2.0);
        assert_abs_diff_eq!(hexagon.circumradius(), 2.0);
    }

    #[test]
    fn lattice_state_by_sides() {
        let feasible: Vec<usize> = (3..=12)
            .filter(|&s| RegularSpec::new(s).lattice_state())
            .collect();
        assert_eq!(feasible, vec![3, 4, 6]);
    }

    #[test]
    fn validation() {
        assert!(matches!(
            RegularSpec::new(2).validate().unwrap_err(),
            PolylatError::Argument(ArgumentError::InvalidSides(2))
        ));
        assert!(matches!(
            RegularSpec::new(4).with_edge_length(-1.0).validate().unwrap_err(),
            PolylatError::Argument(ArgumentError::InvalidLength { .. })
        ));
        assert!(matches!(
            RegularSpec::new(4)
                .with_centre(Point2::new(f64::NAN, 0.0))
                .validate()
                .unwrap_err(),
            PolylatError::Argument(ArgumentError::InvalidCentre { .. })
        ));
        assert!(matches!(
            RegularSpec::new(4)
                .with_rotation(f64::INFINITY)
                .validate()
                .unwrap_err(),
            PolylatError::Argument(ArgumentError::InvalidRotation(_))
        ));
        assert!(RegularSpec::new(3).with_edge_length(0.0).validate().is_ok());
    }
}
