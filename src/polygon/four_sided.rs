use super::{validate_centre, validate_length, validate_rotation};
use crate::error::{ArgumentError, Result};
use crate::math::path_2d::centroid_offset;
use crate::math::{polar_to_cartesian, round_vector, Point2, Vector2, CARTESIAN_PLACES};

/// Parameters of a rectangle.
///
/// The first edge runs along `-x` for the width, so an unrotated rectangle has
/// its sides parallel to the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleSpec {
    pub width: f64,
    pub height: f64,
    pub centre: Point2,
    pub rotation: f64,
}

impl RectangleSpec {
    /// A `width` by `height` rectangle centred on the origin.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            centre: Point2::origin(),
            rotation: 0.0,
        }
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
        validate_length("width", self.width)?;
        validate_length("height", self.height)?;
        validate_centre(&self.centre)?;
        validate_rotation(self.rotation)
    }

    #[must_use]
    pub fn edge_vectors(&self) -> Vec<Vector2> {
        let r = self.rotation;
        vec![
            polar_to_cartesian(self.width, 180.0 + r),
            polar_to_cartesian(self.height, 270.0 + r),
            polar_to_cartesian(self.width, r),
            polar_to_cartesian(self.height, 90.0 + r),
        ]
    }

    /// Offset from the centre to the first vertex.
    #[must_use]
    pub fn radius_vector(&self) -> Vector2 {
        round_vector(centroid_offset(&self.edge_vectors()), CARTESIAN_PLACES)
    }
}

/// Parameters of a parallelogram.
///
/// `angle` is the interior angle, in degrees, between the width and height
/// sides. At 90 the parallelogram coincides with the rectangle of the same
/// width, height and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelogramSpec {
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub centre: Point2,
    pub rotation: f64,
}

impl ParallelogramSpec {
    #[must_use]
    pub fn new(width: f64, height: f64, angle: f64) -> Self {
        Self {
            width,
            height,
            angle,
            centre: Point2::origin(),
            rotation: 0.0,
        }
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
        validate_length("width", self.width)?;
        validate_length("height", self.height)?;
        if !(self.angle > 0.0 && self.angle < 180.0) {
            return Err(ArgumentError::ParameterOutOfRange {
                parameter: "angle",
                value: self.angle,
                min: 0.0,
                max: 180.0,
            }
            .into());
        }
        validate_centre(&self.centre)?;
        validate_rotation(self.rotation)
    }

    #[must_use]
    pub fn edge_vectors(&self) -> Vec<Vector2> {
        let r = self.rotation;
        vec![
            polar_to_cartesian(self.width, 180.0 + r),
            polar_to_cartesian(self.height, 180.0 + r + self.angle),
            polar_to_cartesian(self.width, r),
            polar_to_cartesian(self.height, r + self.angle),
        ]
    }

    /// Offset from the centre to the first vertex.
    #[must_use]
    pub fn radius_vector(&self) -> Vector2 {
        round_vector(centroid_offset(&self.edge_vectors()), CARTESIAN_PLACES)
    }

    /// The rectangle this parallelogram coincides with when `angle` is 90.
    #[must_use]
    pub fn as_rectangle(&self) -> RectangleSpec {
        RectangleSpec::new(self.width, self.height)
            .with_centre(self.centre)
            .with_rotation(self.rotation)
    }
}
