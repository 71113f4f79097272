//! Coordinate transform tests

use stash_grid::core::{grid_to_screen, screen_to_grid, GridStore, TileSize};
use stash_grid::types::{Footprint, GridPos, ScreenPoint};

#[test]
fn test_transform_round_trip_2x3_with_97_unit_tiles() {
    let tile = TileSize::square(97.0);
    let fp = Footprint::new(2, 3);
    let grid = GridStore::new(10, 10).unwrap();

    for pos in [GridPos::new(0, 0), GridPos::new(3, 2)] {
        assert!(grid.in_bounds(pos.x + fp.w - 1, pos.y + fp.h - 1));
        let p = grid_to_screen(tile, fp, pos);
        assert_eq!(screen_to_grid(tile, p, Some(fp)), pos);
    }
}

#[test]
fn test_transform_round_trip_all_small_footprints() {
    let tile = TileSize::default();
    for w in 1..=4 {
        for h in 1..=4 {
            let fp = Footprint::new(w, h);
            for y in 0..6 {
                for x in 0..8 {
                    let pos = GridPos::new(x, y);
                    let p = grid_to_screen(tile, fp, pos);
                    assert_eq!(screen_to_grid(tile, p, Some(fp)), pos, "{w}x{h} at ({x},{y})");
                }
            }
        }
    }
}

#[test]
fn test_screen_y_axis_is_inverted() {
    let tile = TileSize::square(97.0);
    let p = grid_to_screen(tile, Footprint::new(2, 3), GridPos::new(3, 2));
    assert_eq!(p, ScreenPoint::new(3.0 * 97.0 + 97.0, -(2.0 * 97.0 + 97.0 * 1.5)));
    assert!(p.y < 0.0);
}

#[test]
fn test_pointer_lookup_without_held_item() {
    let tile = TileSize::new(20.0, 10.0);
    assert_eq!(
        screen_to_grid(tile, ScreenPoint::new(45.0, -25.0), None),
        GridPos::new(2, 2)
    );
}

#[test]
fn test_held_item_is_centered_under_pointer() {
    let tile = TileSize::square(10.0);
    // Pointer in the middle of cell (5, 5) holding a 3x3: anchor is one up-left.
    let p = ScreenPoint::new(55.0, -55.0);
    assert_eq!(screen_to_grid(tile, p, Some(Footprint::new(3, 3))), GridPos::new(4, 4));
    assert_eq!(screen_to_grid(tile, p, Some(Footprint::new(1, 1))), GridPos::new(5, 5));
}
