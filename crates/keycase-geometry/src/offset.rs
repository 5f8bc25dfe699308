//! Signed offsets of regions with round joins.

use cavalier_contours::polyline::{PlineOffsetOptions, PlineOrientation, PlineSource};

use crate::{Polyline, Region};

/// Offset every loop of `loops` by `delta` relative to its own interior (`delta > 0` moves away
/// from it). cavalier_contours offsets to the left of travel, which is the interior of a CCW loop.
fn offset_loops(
    loops: &[Polyline<f64>],
    delta: f64,
    opts: &PlineOffsetOptions<f64>,
) -> Vec<Polyline<f64>> {
    loops
        .iter()
        .flat_map(|pl| {
            let toward_left = match pl.orientation() {
                PlineOrientation::Clockwise => delta,
                PlineOrientation::CounterClockwise | PlineOrientation::Open => -delta,
            };
            pl.parallel_offset_opt(toward_left, opts)
        })
        .collect()
}

/// Grow (`delta > 0`) or shrink (`delta < 0`) a region by `|delta|` with round joins.
///
/// Outer loops move outward and holes inward for positive values. Loops that vanish under a
/// negative offset are dropped.
pub fn offset_region(region: &Region, delta: f64) -> Region {
    if delta == 0.0 {
        return region.clone();
    }

    let opts = PlineOffsetOptions {
        handle_self_intersects: true,
        ..Default::default()
    };
    let pos_out = offset_loops(&region.pos, delta, &opts);
    // A hole grows into the material, so it moves toward its own interior.
    let neg_out = offset_loops(&region.neg, -delta, &opts);

    let mut out = Region::union_all(pos_out);
    if !neg_out.is_empty() {
        out.subtract_all(&neg_out);
    }
    out
}

/// Minkowski sum of `region` with a disk of `radius`; a non-positive radius is the identity.
pub fn minkowski_disk(region: &Region, radius: f64) -> Region {
    if radius <= 0.0 {
        return region.clone();
    }
    offset_region(region, radius)
}
