use keycase_core::{KeyPlacement, Point2D};
use keycase_geometry::offset::{minkowski_disk, offset_region};
use keycase_geometry::primitives::capsule;
use keycase_geometry::Region;

use crate::poles::{extreme_poles, generate_poles, pole_bounds, Face, FaceCounts, Pole};
use crate::OutlineError;

/// Radius of the disk stitched around every perimeter pole.
pub const POLE_MARKER_RADIUS: f64 = 0.5;

/// Consecutive perimeter points closer than this are merged.
const CHAIN_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Side of the square key footprint.
    pub footprint: f64,
    /// Outward growth of the traced boundary; negative values shrink it.
    pub expansion: f64,
    pub corner_radius: f64,
    /// Bin width of the per-face extreme search; `None` means half the footprint.
    pub section_size: Option<f64>,
    pub section_offset: f64,
}

impl OutlineParams {
    pub fn new(footprint: f64, expansion: f64) -> Self {
        Self {
            footprint,
            expansion,
            corner_radius: 0.0,
            section_size: None,
            section_offset: 0.0,
        }
    }

    pub fn with_corner_radius(mut self, r: f64) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn with_sections(mut self, size: f64, offset: f64) -> Self {
        self.section_size = Some(size);
        self.section_offset = offset;
        self
    }

    fn effective_section_size(&self) -> f64 {
        self.section_size.unwrap_or(self.footprint / 2.0)
    }

    fn check(&self) -> Result<(), OutlineError> {
        if !(self.footprint > 0.0) {
            return Err(OutlineError::NonPositiveFootprint(self.footprint));
        }
        let section = self.effective_section_size();
        if !(section > 0.0) {
            return Err(OutlineError::NonPositiveSectionSize(section));
        }
        Ok(())
    }
}

/// Trace a closed boundary hugging the key footprints.
///
/// Corner poles are reduced to the per-face extremes, walked left, top, right, bottom, joined
/// by disk hulls into a band and filled. The marker radius counts toward `expansion`, so the
/// result is the stitched pole polygon grown by exactly `expansion` (then rounded by the corner
/// radius).
pub fn trace_outline(
    placements: &[KeyPlacement],
    params: &OutlineParams,
) -> Result<Region, OutlineError> {
    params.check()?;

    let perimeter = perimeter_poles(placements, params)?;
    let chain = simplify_chain(perimeter.iter().map(|p| p.pos).collect());
    tracing::debug!(
        perimeter = perimeter.len(),
        chain = chain.len(),
        "stitching organic outline"
    );

    let band = stitch(&chain);
    let grown = offset_region(&band.filled(), params.expansion - POLE_MARKER_RADIUS);
    let rounded = minkowski_disk(&grown, params.corner_radius);

    if rounded.is_empty() {
        return Err(OutlineError::EmptyOutline {
            expansion: params.expansion,
        });
    }
    if !rounded.is_simple() {
        return Err(OutlineError::SelfIntersecting {
            expansion: params.expansion,
        });
    }
    Ok(rounded)
}

/// Per-face extreme pole counts for the given section parameters.
pub fn extreme_pole_counts(
    placements: &[KeyPlacement],
    params: &OutlineParams,
) -> Result<FaceCounts, OutlineError> {
    params.check()?;
    let poles = generate_poles(placements, params.footprint);
    let bounds = pole_bounds(&poles).ok_or(OutlineError::NoPoles)?;
    let section = params.effective_section_size();
    let count = |face| extreme_poles(&poles, &bounds, face, section, params.section_offset).len();
    Ok(FaceCounts {
        left: count(Face::Left),
        right: count(Face::Right),
        top: count(Face::Top),
        bottom: count(Face::Bottom),
    })
}

/// Extreme poles in perimeter order: left ascending, top ascending, right descending, bottom
/// descending.
fn perimeter_poles(
    placements: &[KeyPlacement],
    params: &OutlineParams,
) -> Result<Vec<Pole>, OutlineError> {
    let poles = generate_poles(placements, params.footprint);
    let bounds = pole_bounds(&poles).ok_or(OutlineError::NoPoles)?;
    let section = params.effective_section_size();

    let mut ordered = Vec::new();
    for face in Face::PERIMETER {
        let mut found = extreme_poles(&poles, &bounds, face, section, params.section_offset);
        if matches!(face, Face::Right | Face::Bottom) {
            found.reverse();
        }
        tracing::debug!(?face, poles = found.len(), "extreme poles");
        tracing::trace!(
            ?face,
            corners = ?found.iter().map(|p| (p.key_index, p.corner)).collect::<Vec<_>>(),
            "extreme pole corners"
        );
        ordered.extend(found);
    }

    if ordered.is_empty() {
        return Err(OutlineError::NoPoles);
    }
    Ok(ordered)
}

/// Drop repeated points and points lying on the straight run between their neighbours.
fn simplify_chain(points: Vec<Point2D>) -> Vec<Point2D> {
    let same = |a: Point2D, b: Point2D| (a.x - b.x).hypot(a.y - b.y) < CHAIN_EPSILON;

    let mut pts: Vec<Point2D> = Vec::with_capacity(points.len());
    for p in points {
        if pts.last().map_or(true, |&last| !same(last, p)) {
            pts.push(p);
        }
    }
    while pts.len() > 1 && same(pts[0], pts[pts.len() - 1]) {
        pts.pop();
    }

    loop {
        let n = pts.len();
        if n < 3 {
            break;
        }
        let redundant =
            (0..n).find(|&i| passes_straight(pts[(i + n - 1) % n], pts[i], pts[(i + 1) % n]));
        match redundant {
            Some(i) => {
                pts.remove(i);
            }
            None => break,
        }
    }
    pts
}

/// `b` sits on the segment from `a` to `c`, moving forward.
fn passes_straight(a: Point2D, b: Point2D, c: Point2D) -> bool {
    let (ux, uy) = (b.x - a.x, b.y - a.y);
    let (vx, vy) = (c.x - b.x, c.y - b.y);
    let cross = ux * vy - uy * vx;
    let dot = ux * vx + uy * vy;
    let scale = ux.hypot(uy) * vx.hypot(vy);
    dot > 0.0 && cross.abs() <= CHAIN_EPSILON * scale.max(1.0)
}

/// Union of disk hulls between consecutive points, closing the loop.
fn stitch(chain: &[Point2D]) -> Region {
    let n = chain.len();
    let links = match n {
        0 => Vec::new(),
        1 => {
            let p = (chain[0].x, chain[0].y);
            vec![capsule(p, p, POLE_MARKER_RADIUS)]
        }
        _ => (0..n)
            .map(|i| {
                let a = chain[i];
                let b = chain[(i + 1) % n];
                capsule((a.x, a.y), (b.x, b.y), POLE_MARKER_RADIUS)
            })
            .collect(),
    };
    Region::union_all(links)
}
