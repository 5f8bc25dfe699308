use serde::{Deserialize, Serialize};

use crate::rotation::rotate_point;

/// Millimeter coordinates on the plate plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rotate this point by `degrees` (counter-clockwise) around `pivot`.
    #[must_use]
    pub fn rotated_about(self, pivot: Point2D, degrees: f64) -> Self {
        rotate_point(self, pivot, degrees)
    }
}

impl std::ops::Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Center and orientation of one key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KeyPlacement {
    pub pos: Point2D,
    /// Rotation in degrees.
    pub rot: f64,
}

impl KeyPlacement {
    #[must_use]
    pub const fn new(x: f64, y: f64, rot: f64) -> Self {
        Self {
            pos: Point2D::new(x, y),
            rot,
        }
    }

    /// Rotate the position around `origin` and add `degrees` to the key's own rotation.
    #[must_use]
    pub fn rotated_about(self, origin: Point2D, degrees: f64) -> Self {
        Self {
            pos: self.pos.rotated_about(origin, degrees),
            rot: self.rot + degrees,
        }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            pos: self.pos.offset(dx, dy),
            rot: self.rot,
        }
    }

    /// Reflect across the horizontal line `y = axis_y`; the rotation is negated.
    #[must_use]
    pub fn mirrored_y(self, axis_y: f64) -> Self {
        Self {
            pos: Point2D::new(self.pos.x, 2.0 * axis_y - self.pos.y),
            rot: -self.rot,
        }
    }
}
