//! Point rotation and projected-extent helpers.

use crate::point::Point2D;

/// Rotate the vector `v` by `angle_deg` counter-clockwise.
#[must_use]
pub fn rotate_vec(v: [f64; 2], angle_deg: f64) -> [f64; 2] {
    let (s, c) = angle_deg.to_radians().sin_cos();
    [v[0] * c - v[1] * s, v[0] * s + v[1] * c]
}

/// Rotate `p` around `pivot` by `degrees`. A zero angle returns the point untouched.
#[must_use]
pub fn rotate_point(p: Point2D, pivot: Point2D, degrees: f64) -> Point2D {
    if degrees == 0.0 {
        return p;
    }
    let rotated = rotate_vec([p.x - pivot.x, p.y - pivot.y], degrees);
    Point2D::new(pivot.x + rotated[0], pivot.y + rotated[1])
}

/// Normalize an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// `|cos θ| + |sin θ|` for `θ` in radians.
#[must_use]
pub fn abs_cos_sin(radians: f64) -> f64 {
    radians.cos().abs() + radians.sin().abs()
}

/// Half of the axis-aligned extent of a square of side `size` rotated by `rot_deg`.
///
/// `0.5 * (|cos θ| + |sin θ|) * size` is exact for a square at any angle: the projection of a
/// rotated square onto either axis has that half-width.
#[must_use]
pub fn projected_half_extent(rot_deg: f64, size: f64) -> f64 {
    0.5 * abs_cos_sin(normalize_degrees(rot_deg).to_radians()) * size
}

/// Center index of `n` evenly spaced items, `(n - 1) / 2`.
#[must_use]
pub fn half_index(n: usize) -> f64 {
    (n as f64 - 1.0) / 2.0
}
