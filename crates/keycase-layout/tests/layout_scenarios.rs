use approx::assert_abs_diff_eq;
use keycase_config::ProfileRegistry;
use keycase_core::{Bounds, KeyPlacement, Point2D, RowLayoutItem, ThumbClusterSpec};
use keycase_layout::{
    build_layout, mirror_halves, rotate_all, Halves, KeyLayout, LayoutSpec,
};
use proptest::prelude::*;
use serde_json::json;

fn spec(rows: Vec<RowLayoutItem>, thumb: Option<ThumbClusterSpec>, halves: Halves) -> LayoutSpec {
    LayoutSpec {
        rows,
        thumb,
        pitch: 19.0,
        rotation: 0.0,
        halves,
        center_gap: 10.0,
        footprint: 18.0,
        origin: Point2D::new(5.0, 5.0),
    }
}

fn thumb(count: usize) -> ThumbClusterSpec {
    ThumbClusterSpec {
        count,
        spacing: 20.0,
        rotation: 17.0,
        base_offset: Point2D::new(25.0, 2.0),
        per_key: None,
    }
}

#[test]
fn three_key_row_is_anchored_at_origin() {
    let keys = build_layout(&spec(
        vec![RowLayoutItem::new(0, 3, 0.0)],
        None,
        Halves::Source,
    ))
    .unwrap();
    // Footprint bounds -9..47 shift so the minimum lands at (5, 5).
    assert_eq!(keys.len(), 3);
    assert_abs_diff_eq!(keys[0].pos.x, 14.0);
    assert_abs_diff_eq!(keys[2].pos.x, 52.0);
    assert_abs_diff_eq!(keys[0].pos.y, 14.0);

    let b = Bounds::of_footprints(&keys, 18.0).unwrap();
    assert_abs_diff_eq!(b.width(), 56.0);
    assert_abs_diff_eq!(b.min_x, 5.0);
    assert_abs_diff_eq!(b.min_y, 5.0);
}

#[test]
fn counts_match_halves() {
    let rows = vec![RowLayoutItem::new(0, 3, 0.0).with_thumb_anchor(1); 4];
    let n = 12;
    let m = 3;
    for (halves, expected) in [
        (Halves::Source, n + m),
        (Halves::Mirrored, n + m),
        (Halves::Both, 2 * (n + m)),
    ] {
        let keys = build_layout(&spec(rows.clone(), Some(thumb(m)), halves)).unwrap();
        assert_eq!(keys.len(), expected, "{halves:?}");
    }
}

#[test]
fn matrix_keys_precede_thumb_keys() {
    let rows = vec![RowLayoutItem::new(0, 2, 0.0).with_thumb_anchor(0)];
    let keys = build_layout(&spec(rows, Some(thumb(2)), Halves::Source)).unwrap();
    assert_eq!(keys[0].rot, 0.0);
    assert_eq!(keys[1].rot, 0.0);
    assert_abs_diff_eq!(keys[2].rot, 17.0);
    assert_abs_diff_eq!(keys[3].rot, 17.0);
}

#[test]
fn unrotated_halves_are_gap_apart() {
    let rows = vec![RowLayoutItem::new(0, 3, 0.0); 2];
    let keys = build_layout(&spec(rows, None, Halves::Both)).unwrap();
    let (mirrored, source) = keys.split_at(6);
    let lower = Bounds::of_footprints(mirrored, 18.0).unwrap();
    let upper = Bounds::of_footprints(source, 18.0).unwrap();
    assert_abs_diff_eq!(upper.min_y - lower.max_y, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lower.height(), upper.height(), epsilon = 1e-9);
}

#[test]
fn mirroring_twice_keeps_the_span() {
    let keys = vec![
        KeyPlacement::new(0.0, 0.0, 0.0),
        KeyPlacement::new(10.0, 30.0, 12.0),
        KeyPlacement::new(-4.0, 12.0, -7.0),
    ];
    let once = mirror_halves(&keys, 6.0, 18.0, Halves::Mirrored);
    let twice = mirror_halves(&once, 6.0, 18.0, Halves::Mirrored);
    let span = |ks: &[KeyPlacement]| Bounds::of_footprints(ks, 18.0).unwrap();
    let (a, b) = (span(&keys), span(&twice));
    assert_abs_diff_eq!(a.width(), b.width(), epsilon = 1e-9);
    assert_abs_diff_eq!(a.height(), b.height(), epsilon = 1e-9);
    for (k, t) in keys.iter().zip(&twice) {
        assert_abs_diff_eq!(k.rot, t.rot);
    }
}

#[test]
fn default_profile_builds() {
    let config = ProfileRegistry::builtin().resolve("split-36", None).unwrap();
    let layout = KeyLayout::from_config(&config).unwrap();
    assert_eq!(layout.placements.len(), 18);

    // Minimum corner sits at margin + wall.
    assert_abs_diff_eq!(layout.bounds.min_x, 9.5, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.bounds.min_y, 9.5, epsilon = 1e-9);
    assert_abs_diff_eq!(
        layout.plate.plate_width,
        layout.bounds.width() + 16.0,
        epsilon = 1e-9
    );
}

#[test]
fn left_side_flips_rotations() {
    let registry = ProfileRegistry::builtin();
    let right = KeyLayout::from_config(&registry.resolve("split-36", None).unwrap()).unwrap();
    let over = json!({"layout": {"side": "left"}});
    let left =
        KeyLayout::from_config(&registry.resolve("split-36", Some(&over)).unwrap()).unwrap();
    assert_eq!(left.placements.len(), right.placements.len());
    for (l, r) in left.placements.iter().zip(&right.placements) {
        assert_abs_diff_eq!(l.rot, -r.rot, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(left.plate.plate_width, right.plate.plate_width, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn rotation_round_trip(angle in -360.0f64..360.0, offset in -20.0f64..20.0) {
        let rows = vec![RowLayoutItem::new(0, 3, offset), RowLayoutItem::new(1, 2, 0.0)];
        let original = keycase_layout::matrix_keys(&rows, 18.0);
        let mut keys = original.clone();
        rotate_all(&mut keys, angle);
        rotate_all(&mut keys, -angle);
        for (a, b) in original.iter().zip(&keys) {
            prop_assert!((a.pos.x - b.pos.x).abs() < 1e-9);
            prop_assert!((a.pos.y - b.pos.y).abs() < 1e-9);
            prop_assert!((a.rot - b.rot).abs() < 1e-9);
        }
    }

    #[test]
    fn anchored_bounds_start_at_origin(angle in -90.0f64..90.0, count in 1usize..6) {
        let mut s = spec(vec![RowLayoutItem::new(0, count, 0.0)], None, Halves::Source);
        s.rotation = angle;
        let keys = build_layout(&s).unwrap();
        let b = Bounds::of_footprints(&keys, 18.0).unwrap();
        prop_assert!((b.min_x - 5.0).abs() < 1e-9);
        prop_assert!((b.min_y - 5.0).abs() < 1e-9);
    }
}
