use serde::{Deserialize, Serialize};

use crate::point::{KeyPlacement, Point2D};
use crate::rotation::projected_half_extent;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The identity for [`Bounds::include`]: contains nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Bounds of a point set; `None` when the set is empty.
    #[must_use]
    pub fn of_points<I: IntoIterator<Item = Point2D>>(points: I) -> Option<Self> {
        let mut b = Self::empty();
        for p in points {
            b.include(p.x, p.y);
        }
        (!b.is_empty()).then_some(b)
    }

    /// Rotation-aware bounds of square key footprints of side `size`.
    ///
    /// Every key contributes `pos ∓ 0.5 * (|cos θ| + |sin θ|) * size` on both axes. `None` when
    /// `placements` is empty.
    #[must_use]
    pub fn of_footprints(placements: &[KeyPlacement], size: f64) -> Option<Self> {
        let mut b = Self::empty();
        for k in placements {
            let extent = projected_half_extent(k.rot, size);
            b.include(k.pos.x - extent, k.pos.y - extent);
            b.include(k.pos.x + extent, k.pos.y + extent);
        }
        (!b.is_empty()).then_some(b)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn min_corner(&self) -> Point2D {
        Point2D::new(self.min_x, self.min_y)
    }
}
