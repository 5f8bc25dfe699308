use keycase_config::{CaseStyle, KeyboardConfig};
use keycase_geometry::primitives::rounded_rectangle;
use keycase_geometry::Region;
use keycase_layout::KeyLayout;

use crate::tracer::{trace_outline, OutlineParams};
use crate::OutlineError;

/// The three nested boundaries of an enclosure.
#[derive(Debug, Clone)]
pub struct CaseOutlines {
    /// Outside of the walls.
    pub outer: Region,
    /// Plate boundary; inside of the walls.
    pub plate: Region,
    /// Inner cavity of the base, one wall thickness inside the plate.
    pub cavity: Region,
}

impl CaseOutlines {
    /// The wall cross-section: `outer` minus `plate`.
    pub fn wall_band(&self) -> Region {
        self.outer.difference(&self.plate)
    }
}

pub fn case_outlines(
    config: &KeyboardConfig,
    layout: &KeyLayout,
) -> Result<CaseOutlines, OutlineError> {
    let wall = config.enclosure.walls.thickness;
    match config.enclosure.case_style {
        CaseStyle::Rectangular => rectangular(config, layout, wall),
        CaseStyle::Organic => organic(config, layout, wall),
    }
}

fn rectangular(
    config: &KeyboardConfig,
    layout: &KeyLayout,
    wall: f64,
) -> Result<CaseOutlines, OutlineError> {
    let w = layout.plate.plate_width;
    let h = layout.plate.plate_height;
    let r = config.enclosure.corner_radius;
    let center = ((w + 2.0 * wall) / 2.0, (h + 2.0 * wall) / 2.0);

    let inset = |by: f64| -> Result<Region, OutlineError> {
        let size = (w + 2.0 * wall - 2.0 * by, h + 2.0 * wall - 2.0 * by);
        if size.0 <= 0.0 || size.1 <= 0.0 {
            return Err(OutlineError::EmptyOutline { expansion: -by });
        }
        Ok(Region::from_pos(vec![rounded_rectangle(center, size, r, 0.0)]))
    };

    Ok(CaseOutlines {
        outer: inset(0.0)?,
        plate: inset(wall)?,
        cavity: inset(2.0 * wall)?,
    })
}

fn organic(
    config: &KeyboardConfig,
    layout: &KeyLayout,
    wall: f64,
) -> Result<CaseOutlines, OutlineError> {
    let margin = config.layout.edge_margin.min_side();
    let base = OutlineParams::new(config.footprint(), margin)
        .with_corner_radius(config.enclosure.organic_corner_radius)
        .with_sections(config.section_size(), config.enclosure.section_offset);

    let trace = |expansion: f64| {
        trace_outline(
            &layout.placements,
            &OutlineParams {
                expansion,
                ..base
            },
        )
    };

    Ok(CaseOutlines {
        outer: trace(margin + wall)?,
        plate: trace(margin)?,
        cavity: trace(margin - wall)?,
    })
}
