//! Grid <-> screen coordinate transform.
//!
//! Grid rows grow downward while the display's `y` axis grows upward, so the
//! transform negates `y` in both directions. This is the only place that sign
//! flip exists; the grid and the placement engine work purely in row/column
//! space.

use crate::types::{Footprint, GridPos, ScreenPoint, DEFAULT_TILE_SIZE};

/// Screen size of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSize {
    pub w: f32,
    pub h: f32,
}

impl TileSize {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    pub const fn square(size: f32) -> Self {
        Self { w: size, h: size }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::square(DEFAULT_TILE_SIZE)
    }
}

/// Visual center of a `footprint` item anchored at `pos`.
pub fn grid_to_screen(tile: TileSize, footprint: Footprint, pos: GridPos) -> ScreenPoint {
    let x = pos.x as f32 * tile.w + tile.w * footprint.w as f32 / 2.0;
    let y = pos.y as f32 * tile.h + tile.h * footprint.h as f32 / 2.0;
    ScreenPoint::new(x, -y)
}

/// Grid cell under `point`.
///
/// With `held`, the result is instead the anchor that centers a footprint of
/// that size under the point: `(w - 1) / 2` columns left and `(h - 1) / 2`
/// rows up. The offset is taken before flooring so that even-sized
/// footprints, whose center sits on a cell boundary, resolve to the anchor
/// [`grid_to_screen`] was given.
pub fn screen_to_grid(tile: TileSize, point: ScreenPoint, held: Option<Footprint>) -> GridPos {
    let mut gx = point.x / tile.w;
    let mut gy = -point.y / tile.h;

    if let Some(fp) = held {
        gx -= (fp.w - 1) as f32 / 2.0;
        gy -= (fp.h - 1) as f32 / 2.0;
    }

    GridPos::new(gx.floor() as i32, gy.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_single_cell() {
        let tile = TileSize::square(10.0);
        let p = grid_to_screen(tile, Footprint::new(1, 1), GridPos::new(2, 3));
        assert_eq!(p, ScreenPoint::new(25.0, -35.0));
    }

    #[test]
    fn cell_lookup_floors_toward_negative() {
        let tile = TileSize::square(10.0);
        assert_eq!(screen_to_grid(tile, ScreenPoint::new(0.0, 0.0), None), GridPos::new(0, 0));
        assert_eq!(screen_to_grid(tile, ScreenPoint::new(19.9, -0.1), None), GridPos::new(1, 0));
        // Left of / above the grid stays negative rather than truncating to 0.
        assert_eq!(screen_to_grid(tile, ScreenPoint::new(-0.5, 0.5), None), GridPos::new(-1, -1));
    }

    #[test]
    fn odd_footprint_recenters_by_whole_cells() {
        let tile = TileSize::square(10.0);
        // Pointer in cell (5, 5) holding a 3x3 item: anchor one cell up-left.
        let anchor = screen_to_grid(tile, ScreenPoint::new(55.0, -55.0), Some(Footprint::new(3, 3)));
        assert_eq!(anchor, GridPos::new(4, 4));
    }

    #[test]
    fn even_footprint_snaps_to_nearest_center() {
        let tile = TileSize::square(10.0);
        let fp = Footprint::new(2, 1);
        // Left half of cell 5 -> anchor 4, right half -> anchor 5.
        assert_eq!(screen_to_grid(tile, ScreenPoint::new(52.0, -5.0), Some(fp)).x, 4);
        assert_eq!(screen_to_grid(tile, ScreenPoint::new(57.0, -5.0), Some(fp)).x, 5);
    }

    #[test]
    fn roundtrip_for_every_small_footprint() {
        let tile = TileSize::default();
        for w in 1..=4 {
            for h in 1..=4 {
                let fp = Footprint::new(w, h);
                for (x, y) in [(0, 0), (3, 2), (7, 5)] {
                    let pos = GridPos::new(x, y);
                    let p = grid_to_screen(tile, fp, pos);
                    assert_eq!(screen_to_grid(tile, p, Some(fp)), pos, "{w}x{h} at {pos:?}");
                }
            }
        }
    }
}
