use keycase_core::rotation::rotate_vec;
use keycase_core::Bounds;

use crate::{PlineVertex, Polyline};

/// Bulge of a half-circle arc (tan(180° / 4)), positive for CCW.
const HALF_CIRCLE_BULGE: f64 = 1.0;

fn quarter_circle_bulge() -> f64 {
    (std::f64::consts::PI / 8.0).tan()
}

fn rotate_about(p: (f64, f64), center: (f64, f64), deg: f64) -> (f64, f64) {
    let r = rotate_vec([p.0 - center.0, p.1 - center.1], deg);
    (center.0 + r[0], center.1 + r[1])
}

fn closed_from(vertices: impl IntoIterator<Item = (f64, f64, f64)>) -> Polyline<f64> {
    let mut pl = Polyline::new_closed();
    for (x, y, bulge) in vertices {
        pl.vertex_data.push(PlineVertex::new(x, y, bulge));
    }
    pl
}

/// Full circle as two CCW half arcs.
pub fn circle(center: (f64, f64), radius: f64) -> Polyline<f64> {
    let (cx, cy) = center;
    closed_from([
        (cx - radius, cy, HALF_CIRCLE_BULGE),
        (cx + radius, cy, HALF_CIRCLE_BULGE),
    ])
}

/// Convex hull of two disks of equal `radius` centered at `a` and `b` (a stadium).
///
/// Degenerates to a circle when the centers coincide.
pub fn capsule(a: (f64, f64), b: (f64, f64), radius: f64) -> Polyline<f64> {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len = dx.hypot(dy);
    if len <= 1e-9 {
        return circle(a, radius);
    }
    // Left normal of a -> b, scaled to the radius.
    let nx = -dy / len * radius;
    let ny = dx / len * radius;

    // CCW: right side a -> b, cap around b, left side b -> a, cap around a.
    closed_from([
        (a.0 - nx, a.1 - ny, 0.0),
        (b.0 - nx, b.1 - ny, HALF_CIRCLE_BULGE),
        (b.0 + nx, b.1 + ny, 0.0),
        (a.0 + nx, a.1 + ny, HALF_CIRCLE_BULGE),
    ])
}

pub fn rectangle(center: (f64, f64), size: (f64, f64), rotation_deg: f64) -> Polyline<f64> {
    let (cx, cy) = center;
    let hw = size.0 / 2.0;
    let hh = size.1 / 2.0;
    let corners = [
        (cx - hw, cy - hh),
        (cx + hw, cy - hh),
        (cx + hw, cy + hh),
        (cx - hw, cy + hh),
    ];
    closed_from(corners.into_iter().map(|p| {
        let (x, y) = rotate_about(p, center, rotation_deg);
        (x, y, 0.0)
    }))
}

/// Axis-aligned rectangle covering `bounds`.
pub fn rectangle_from_bounds(bounds: &Bounds) -> Polyline<f64> {
    let center = (
        (bounds.min_x + bounds.max_x) / 2.0,
        (bounds.min_y + bounds.max_y) / 2.0,
    );
    rectangle(center, (bounds.width(), bounds.height()), 0.0)
}

pub fn rounded_rectangle(
    center: (f64, f64),
    size: (f64, f64),
    corner_radius: f64,
    rotation_deg: f64,
) -> Polyline<f64> {
    let (cx, cy) = center;
    let hw = size.0 / 2.0;
    let hh = size.1 / 2.0;
    let r = corner_radius.min(hw).min(hh).max(0.0);

    if r == 0.0 {
        return rectangle(center, size, rotation_deg);
    }

    let b = quarter_circle_bulge();
    // CCW, alternating edge and corner arc; the bulge sits on the vertex that starts the arc.
    let pts = [
        (cx + hw - r, cy - hh, b),
        (cx + hw, cy - hh + r, 0.0),
        (cx + hw, cy + hh - r, b),
        (cx + hw - r, cy + hh, 0.0),
        (cx - hw + r, cy + hh, b),
        (cx - hw, cy + hh - r, 0.0),
        (cx - hw, cy - hh + r, b),
        (cx - hw + r, cy - hh, 0.0),
    ];
    closed_from(pts.into_iter().map(|(x, y, bulge)| {
        let (x, y) = rotate_about((x, y), center, rotation_deg);
        (x, y, bulge)
    }))
}
