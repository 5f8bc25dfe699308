use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// One matrix row.
///
/// `start` is the column index of the first key, `length` the key count and `offset` a stagger
/// applied along the row. A key whose absolute column (`start + k`) equals `thumb_anchor` seeds
/// the thumb cluster reference point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowLayoutItem {
    pub start: i64,
    pub length: usize,
    #[serde(default)]
    pub offset: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_anchor: Option<i64>,
}

impl RowLayoutItem {
    #[must_use]
    pub const fn new(start: i64, length: usize, offset: f64) -> Self {
        Self {
            start,
            length,
            offset,
            thumb_anchor: None,
        }
    }

    #[must_use]
    pub const fn with_thumb_anchor(mut self, column: i64) -> Self {
        self.thumb_anchor = Some(column);
        self
    }

    /// Absolute column indices of the keys in this row.
    pub fn columns(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.length as i64).map(move |k| self.start + k)
    }
}

/// Per-key adjustments of the thumb cluster. Missing entries count as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerKeyThumb {
    #[serde(default)]
    pub rotations: Vec<f64>,
    #[serde(default)]
    pub offsets: Vec<Point2D>,
}

impl PerKeyThumb {
    #[must_use]
    pub fn rotation(&self, index: usize) -> f64 {
        self.rotations.get(index).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn offset(&self, index: usize) -> Point2D {
        self.offsets.get(index).copied().unwrap_or_default()
    }
}

/// Thumb cluster description resolved from configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThumbClusterSpec {
    pub count: usize,
    pub spacing: f64,
    /// Cluster rotation in degrees, applied about the anchor point.
    pub rotation: f64,
    pub base_offset: Point2D,
    pub per_key: Option<PerKeyThumb>,
}

impl ThumbClusterSpec {
    #[must_use]
    pub fn key_rotation(&self, index: usize) -> f64 {
        self.per_key.as_ref().map_or(0.0, |p| p.rotation(index))
    }

    #[must_use]
    pub fn key_offset(&self, index: usize) -> Point2D {
        self.per_key
            .as_ref()
            .map_or_else(Point2D::origin, |p| p.offset(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_per_key_arrays_default_to_zero() {
        let spec = ThumbClusterSpec {
            count: 3,
            spacing: 18.0,
            rotation: 0.0,
            base_offset: Point2D::origin(),
            per_key: Some(PerKeyThumb {
                rotations: vec![-10.0],
                offsets: vec![],
            }),
        };
        assert_eq!(spec.key_rotation(0), -10.0);
        assert_eq!(spec.key_rotation(2), 0.0);
        assert_eq!(spec.key_offset(1), Point2D::origin());
    }

    #[test]
    fn columns_are_absolute() {
        let row = RowLayoutItem::new(2, 3, 0.0);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
