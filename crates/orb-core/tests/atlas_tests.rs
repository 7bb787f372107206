// Tests for label atlas grid planning.

use orb_core::atlas::AtlasPlan;
use orb_core::constants::{ATLAS_TILE_HEIGHT, ATLAS_TILE_WIDTH};

#[test]
fn twelve_labels_pack_into_a_four_by_three_grid() {
    let plan = AtlasPlan::for_tiles(12, ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);
    assert_eq!(plan.cols, 4);
    assert_eq!(plan.rows, 3);
    assert_eq!(plan.width, 1024);
    assert_eq!(plan.height, 384);
}

#[test]
fn grid_never_degenerates_to_zero_tiles() {
    let empty = AtlasPlan::for_tiles(0, ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);
    assert_eq!((empty.cols, empty.rows), (1, 1));
    let single = AtlasPlan::for_tiles(1, ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);
    assert_eq!((single.cols, single.rows), (1, 1));
    assert_eq!(single.width, ATLAS_TILE_WIDTH);
    assert_eq!(single.height, ATLAS_TILE_HEIGHT);
}

#[test]
fn grid_always_has_room_for_every_tile() {
    for n in 1..=64 {
        let plan = AtlasPlan::for_tiles(n, ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);
        assert!(
            (plan.cols * plan.rows) as usize >= n,
            "{} tiles do not fit a {}x{} grid",
            n,
            plan.cols,
            plan.rows
        );
    }
}

#[test]
fn tile_origins_walk_the_grid_row_major() {
    let plan = AtlasPlan::for_tiles(12, ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);
    assert_eq!(plan.tile_origin(0), (0, 0));
    assert_eq!(plan.tile_origin(3), (768, 0));
    assert_eq!(plan.tile_origin(4), (0, 128));
    assert_eq!(plan.tile_origin(5), (256, 128));
    assert_eq!(plan.tile_origin(11), (768, 256));
}

#[test]
fn uv_rects_stay_normalized_and_top_left_first() {
    let plan = AtlasPlan::for_tiles(12, ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);

    let first = plan.uv_rect(0);
    assert!((first[0] - 0.0).abs() < 1e-6);
    assert!((first[1] - 0.0).abs() < 1e-6);
    assert!((first[2] - 0.25).abs() < 1e-6);
    assert!((first[3] - 1.0 / 3.0).abs() < 1e-6);

    for i in 0..12 {
        let [u0, v0, u1, v1] = plan.uv_rect(i);
        assert!(u0 < u1 && v0 < v1, "tile {} rect inverted", i);
        for c in [u0, v0, u1, v1] {
            assert!((0.0..=1.0).contains(&c), "tile {} uv {} out of range", i, c);
        }
    }
}
