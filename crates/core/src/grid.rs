//! Grid module - the occupancy table of one inventory container
//!
//! A fixed `width x height` table where each cell is empty or holds the id of
//! the item covering it. Uses a flat buffer indexed `y * width + x`.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! `GridStore` is a storage primitive only: [`GridStore::occupy`] and
//! [`GridStore::clear`] write unconditionally. Bounds and overlap policy live
//! in [`crate::placement`].

use crate::error::GridError;
use crate::types::{GridPos, ItemId, Rect};

/// A cell of the grid: `None` when empty.
pub type Cell = Option<ItemId>;

/// Fixed-size occupancy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl GridStore {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The whole grid as a rectangle anchored at (0, 0).
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(GridPos::new(x, y))
    }

    /// Occupant of cell (x, y).
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { x, y })
    }

    /// Occupant of cell (x, y), treating out-of-bounds as empty.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Write `item` into every cell of `rect`.
    ///
    /// Caller guarantees `rect` is in bounds and free; cells outside the grid
    /// are skipped.
    pub fn occupy(&mut self, rect: Rect, item: ItemId) {
        self.fill(rect, Some(item));
    }

    /// Empty every cell of `rect`.
    pub fn clear(&mut self, rect: Rect) {
        self.fill(rect, None);
    }

    fn fill(&mut self, rect: Rect, cell: Cell) {
        let Some(clip) = rect.intersection(&self.bounds()) else {
            return;
        };
        let width = self.width as usize;
        let (x0, x1) = (clip.x as usize, clip.right() as usize);
        for y in clip.y..clip.bottom() {
            let start = (y as usize) * width;
            self.cells[start + x0..start + x1].fill(cell);
        }
    }

    /// The part of `rect` that lies on the grid, cell by cell.
    pub fn cells_within(&self, rect: Rect) -> impl Iterator<Item = GridPos> {
        rect.intersection(&self.bounds())
            .into_iter()
            .flat_map(|clip| clip.cells())
    }

    /// True when no cell of `rect` is occupied. Out-of-bounds cells count as
    /// free; combine with a bounds check.
    pub fn is_area_free(&self, rect: Rect) -> bool {
        self.cells_within(rect).all(|p| !self.is_occupied(p.x, p.y))
    }

    /// Empty the whole grid.
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate `(pos, occupant)` over every occupied cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (GridPos, ItemId)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|id| (GridPos::new((i % width) as i32, (i / width) as i32), id))
        })
    }

    /// One character per cell, one line per row: `.` for empty, otherwise
    /// the occupant id in base 36 (ids above 35 print as `#`).
    pub fn to_ascii(&self) -> String {
        let width = self.width as usize;
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(width) {
            for cell in row {
                out.push(match cell {
                    None => '.',
                    Some(id) => char::from_digit(id.0, 36).unwrap_or('#'),
                });
            }
            out.push('\n');
        }
        out
    }
}
