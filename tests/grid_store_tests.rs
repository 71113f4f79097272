//! GridStore tests - cell table storage primitive

use stash_grid::core::{GridError, GridStore};
use stash_grid::types::{GridPos, ItemId, Rect};

#[test]
fn test_grid_new_empty() {
    let grid = GridStore::new(20, 10).unwrap();
    assert_eq!(grid.width(), 20);
    assert_eq!(grid.height(), 10);
    assert_eq!(grid.cells().len(), 200);

    for y in 0..10 {
        for x in 0..20 {
            assert!(grid.in_bounds(x, y), "Cell ({}, {}) should be in bounds", x, y);
            assert_eq!(grid.cell_at(x, y), Ok(None));
        }
    }
}

#[test]
fn test_grid_cell_at_out_of_bounds() {
    let grid = GridStore::new(4, 3).unwrap();

    assert_eq!(grid.cell_at(-1, 0), Err(GridError::OutOfBounds { x: -1, y: 0 }));
    assert_eq!(grid.cell_at(0, -1), Err(GridError::OutOfBounds { x: 0, y: -1 }));
    assert_eq!(grid.cell_at(4, 0), Err(GridError::OutOfBounds { x: 4, y: 0 }));
    assert_eq!(grid.cell_at(0, 3), Err(GridError::OutOfBounds { x: 0, y: 3 }));

    // The lenient accessor reports nothing there.
    assert_eq!(grid.get(4, 0), None);
    assert!(!grid.is_occupied(-1, -1));
}

#[test]
fn test_grid_rejects_bad_dimensions() {
    assert!(matches!(GridStore::new(0, 5), Err(GridError::InvalidDimensions { .. })));
    assert!(matches!(GridStore::new(5, -2), Err(GridError::InvalidDimensions { .. })));
}

#[test]
fn test_grid_occupy_does_no_overlap_checking() {
    let mut grid = GridStore::new(4, 4).unwrap();
    grid.occupy(Rect::new(0, 0, 2, 2), ItemId(1));
    // Storage primitive: overwrites whatever is there.
    grid.occupy(Rect::new(1, 1, 2, 2), ItemId(2));

    assert_eq!(grid.get(0, 0), Some(ItemId(1)));
    assert_eq!(grid.get(1, 1), Some(ItemId(2)));
    assert_eq!(grid.get(2, 2), Some(ItemId(2)));
    assert_eq!(grid.occupied_count(), 7);
}

#[test]
fn test_grid_clear_rect() {
    let mut grid = GridStore::new(3, 3).unwrap();
    grid.occupy(Rect::new(0, 0, 3, 3), ItemId(0));
    grid.clear(Rect::new(1, 0, 2, 3));

    assert_eq!(grid.to_ascii(), "0..\n0..\n0..\n");
    assert!(grid.is_area_free(Rect::new(1, 0, 2, 3)));
    assert!(!grid.is_area_free(Rect::new(0, 0, 2, 1)));
}

#[test]
fn test_grid_occupied_row_major() {
    let mut grid = GridStore::new(3, 2).unwrap();
    grid.occupy(Rect::new(2, 0, 1, 1), ItemId(7));
    grid.occupy(Rect::new(0, 1, 1, 1), ItemId(3));

    let cells: Vec<_> = grid.occupied().collect();
    assert_eq!(
        cells,
        vec![(GridPos::new(2, 0), ItemId(7)), (GridPos::new(0, 1), ItemId(3))]
    );

    grid.clear_all();
    assert_eq!(grid.occupied_count(), 0);
}
