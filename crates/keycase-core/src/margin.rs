use serde::{Deserialize, Serialize};

/// Per-side plate margins in millimeters.
///
/// Deserializes from either a single number (all four sides) or a `{left, right, top, bottom}`
/// map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "EdgeMarginRepr")]
pub struct EdgeMargin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeMarginRepr {
    Uniform(f64),
    Sides {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },
}

impl From<EdgeMarginRepr> for EdgeMargin {
    fn from(repr: EdgeMarginRepr) -> Self {
        match repr {
            EdgeMarginRepr::Uniform(m) => Self::uniform(m),
            EdgeMarginRepr::Sides {
                left,
                right,
                top,
                bottom,
            } => Self {
                left,
                right,
                top,
                bottom,
            },
        }
    }
}

impl EdgeMargin {
    #[must_use]
    pub const fn uniform(m: f64) -> Self {
        Self {
            left: m,
            right: m,
            top: m,
            bottom: m,
        }
    }

    /// Smallest of the four sides.
    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }
}

impl Default for EdgeMargin {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}
