use keycase_config::{CaseStyle, KeyboardConfig, SwitchType};
use keycase_core::{Bounds, KeyPlacement};
use keycase_geometry::{Polyline, Region};
use keycase_layout::{KeyLayout, PlateDimensions};
use keycase_outline::CaseOutlines;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport<'a> {
    profile: &'a str,
    switch: SwitchType,
    case_style: CaseStyle,
    footprint: f64,
    placements: &'a [KeyPlacement],
    bounds: Bounds,
    plate: PlateDimensions,
    outlines: OutlinesReport,
}

#[derive(Debug, Serialize)]
struct OutlinesReport {
    outer: RegionReport,
    plate: RegionReport,
    cavity: RegionReport,
}

#[derive(Debug, Serialize)]
struct RegionReport {
    area: f64,
    loops: Vec<LoopReport>,
}

/// Closed loop as `[x, y, bulge]` vertexes; holes wind clockwise.
#[derive(Debug, Serialize)]
struct LoopReport {
    hole: bool,
    vertices: Vec<[f64; 3]>,
}

impl<'a> BuildReport<'a> {
    pub fn new(
        profile: &'a str,
        config: &KeyboardConfig,
        layout: &'a KeyLayout,
        outlines: &CaseOutlines,
    ) -> Self {
        Self {
            profile,
            switch: config.switch.kind,
            case_style: config.enclosure.case_style,
            footprint: config.footprint(),
            placements: &layout.placements,
            bounds: layout.bounds,
            plate: layout.plate,
            outlines: OutlinesReport {
                outer: RegionReport::from(&outlines.outer),
                plate: RegionReport::from(&outlines.plate),
                cavity: RegionReport::from(&outlines.cavity),
            },
        }
    }
}

impl From<&Region> for RegionReport {
    fn from(region: &Region) -> Self {
        let loops = region
            .pos
            .iter()
            .map(|pl| LoopReport::new(pl, false))
            .chain(region.neg.iter().map(|pl| LoopReport::new(pl, true)))
            .collect();
        Self {
            area: region.area(),
            loops,
        }
    }
}

impl LoopReport {
    fn new(pl: &Polyline<f64>, hole: bool) -> Self {
        Self {
            hole,
            vertices: pl.vertex_data.iter().map(|v| [v.x, v.y, v.bulge]).collect(),
        }
    }
}
