use keycase_config::KeyboardConfig;
use keycase_core::{Bounds, EdgeMargin, KeyPlacement, Point2D};
use serde::Serialize;

use crate::builder::{build_layout, LayoutSpec};
use crate::LayoutError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlateDimensions {
    pub plate_width: f64,
    pub plate_height: f64,
    pub plate_offset: Point2D,
}

/// Footprint span of `placements` plus the margins on each side.
pub fn plate_dimensions(
    placements: &[KeyPlacement],
    footprint: f64,
    margin: &EdgeMargin,
) -> Result<PlateDimensions, LayoutError> {
    let b = Bounds::of_footprints(placements, footprint).ok_or(LayoutError::NoPlacements)?;
    Ok(PlateDimensions {
        plate_width: b.width() + margin.left + margin.right,
        plate_height: b.height() + margin.top + margin.bottom,
        plate_offset: Point2D::origin(),
    })
}

/// Placements of one build with the plate measured around them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeyLayout {
    pub placements: Vec<KeyPlacement>,
    pub bounds: Bounds,
    pub plate: PlateDimensions,
}

impl KeyLayout {
    pub fn from_config(config: &KeyboardConfig) -> Result<Self, LayoutError> {
        let spec = LayoutSpec::from_config(config);
        let placements = build_layout(&spec)?;
        let bounds =
            Bounds::of_footprints(&placements, spec.footprint).ok_or(LayoutError::NoPlacements)?;
        let plate = plate_dimensions(&placements, spec.footprint, &config.layout.edge_margin)?;
        Ok(Self {
            placements,
            bounds,
            plate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn plate_adds_margins_to_span() {
        let keys = [
            KeyPlacement::new(0.0, 0.0, 0.0),
            KeyPlacement::new(19.0, 0.0, 0.0),
            KeyPlacement::new(38.0, 0.0, 0.0),
        ];
        let margin = EdgeMargin {
            left: 1.0,
            right: 2.0,
            top: 3.0,
            bottom: 4.0,
        };
        let plate = plate_dimensions(&keys, 18.0, &margin).unwrap();
        assert_abs_diff_eq!(plate.plate_width, 59.0);
        assert_abs_diff_eq!(plate.plate_height, 25.0);
        assert_eq!(plate.plate_offset, Point2D::origin());
    }

    #[test]
    fn rotated_key_widens_plate() {
        let keys = [KeyPlacement::new(0.0, 0.0, 45.0)];
        let plate = plate_dimensions(&keys, 10.0, &EdgeMargin::uniform(0.0)).unwrap();
        assert_abs_diff_eq!(plate.plate_width, 10.0 * 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn no_placements_is_an_error() {
        assert_eq!(
            plate_dimensions(&[], 18.0, &EdgeMargin::uniform(1.0)),
            Err(LayoutError::NoPlacements)
        );
    }
}
