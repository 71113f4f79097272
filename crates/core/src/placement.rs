//! Placement engine - bounds, overlap resolution, atomic place/pick-up and
//! first-fit search.
//!
//! All functions here are synchronous and operate only on the grid and item
//! table passed in. Every check runs before the first write, so a call that
//! reports failure leaves both untouched.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::grid::GridStore;
use crate::item::ItemTable;
use crate::types::{Footprint, GridPos, ItemId, Rect};

/// What a rectangle covers on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapOutcome {
    /// No cell occupied.
    Clear,
    /// One or more cells occupied, all by this item.
    SingleOccupant(ItemId),
    /// Cells occupied by two or more distinct items.
    Conflict,
}

/// Result of [`place_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceResult {
    Placed,
    /// Placed, and the item that was there has been lifted off the grid.
    PlacedWithDisplaced(ItemId),
    OutOfBounds,
    Conflict,
    /// The id does not name a live item.
    UnknownItem,
    /// The item is anchored on some other grid.
    PlacedElsewhere,
}

impl PlaceResult {
    pub fn is_placed(self) -> bool {
        matches!(self, PlaceResult::Placed | PlaceResult::PlacedWithDisplaced(_))
    }

    pub fn displaced(self) -> Option<ItemId> {
        match self {
            PlaceResult::PlacedWithDisplaced(id) => Some(id),
            _ => None,
        }
    }

    /// The failure as an error, or `None` on success.
    pub fn error(self, x: i32, y: i32, id: ItemId) -> Option<GridError> {
        match self {
            PlaceResult::Placed | PlaceResult::PlacedWithDisplaced(_) => None,
            PlaceResult::OutOfBounds => Some(GridError::OutOfBounds { x, y }),
            PlaceResult::Conflict => Some(GridError::Conflict),
            PlaceResult::UnknownItem => Some(GridError::UnknownItem(id)),
            PlaceResult::PlacedElsewhere => Some(GridError::ItemPlaced(id)),
        }
    }
}

/// True iff all four corners of the `w x h` rectangle at (x, y) are in the
/// grid. A rectangle reaching past the `i32` range is out of bounds.
pub fn boundary_check(grid: &GridStore, x: i32, y: i32, w: i32, h: i32) -> bool {
    Rect::new(x, y, w, h)
        .corners()
        .iter()
        .all(|c| grid.in_bounds(c.x, c.y))
}

/// Classify the occupants of the `w x h` rectangle at (x, y).
///
/// Cells outside the grid are treated as empty.
pub fn overlap_check(grid: &GridStore, x: i32, y: i32, w: i32, h: i32) -> OverlapOutcome {
    let mut seen = ArrayVec::<ItemId, 2>::new();
    for pos in grid.cells_within(Rect::new(x, y, w, h)) {
        let Some(id) = grid.get(pos.x, pos.y) else {
            continue;
        };
        if seen.contains(&id) {
            continue;
        }
        if seen.try_push(id).is_err() {
            return OverlapOutcome::Conflict;
        }
    }

    match seen.as_slice() {
        [] => OverlapOutcome::Clear,
        [only] => OverlapOutcome::SingleOccupant(*only),
        _ => OverlapOutcome::Conflict,
    }
}

/// Put `id` on the grid with its top-left cell at (x, y).
///
/// If the target area covers exactly one other item, that item is lifted off
/// the grid (its anchor cleared) and reported as displaced. If the item being
/// placed is already on this grid it is moved: its old cells are released as
/// part of the same call. Re-placing an item over its own current cells is a
/// no-op success.
pub fn place_item(
    grid: &mut GridStore,
    items: &mut ItemTable,
    id: ItemId,
    x: i32,
    y: i32,
) -> PlaceResult {
    let Some(item) = items.get(id) else {
        return PlaceResult::UnknownItem;
    };
    let footprint = item.footprint();
    let previous = item.rect();
    if let Some(old) = previous {
        if grid.get(old.x, old.y) != Some(id) {
            return PlaceResult::PlacedElsewhere;
        }
    }

    if !boundary_check(grid, x, y, footprint.w, footprint.h) {
        return PlaceResult::OutOfBounds;
    }

    let displaced = match overlap_check(grid, x, y, footprint.w, footprint.h) {
        OverlapOutcome::Conflict => return PlaceResult::Conflict,
        OverlapOutcome::SingleOccupant(other) if other != id => Some(other),
        OverlapOutcome::SingleOccupant(_) | OverlapOutcome::Clear => None,
    };

    let target = Rect::at(GridPos::new(x, y), footprint);
    if previous == Some(target) {
        return PlaceResult::Placed;
    }

    // Checks are done; from here on every write succeeds.
    if let Some(other) = displaced {
        lift(grid, items, other);
    }
    if let Some(old) = previous {
        grid.clear(old);
    }

    grid.occupy(target, id);
    if let Some(item) = items.get_mut(id) {
        item.set_anchor(Some(target.anchor()));
    }

    match displaced {
        Some(other) => PlaceResult::PlacedWithDisplaced(other),
        None => PlaceResult::Placed,
    }
}

/// Lift the item covering (x, y) off the grid.
///
/// Any cell of a multi-cell item removes the whole item. Returns `None` for
/// empty or out-of-bounds cells.
pub fn pick_up_item(
    grid: &mut GridStore,
    items: &mut ItemTable,
    x: i32,
    y: i32,
) -> Option<ItemId> {
    let id = grid.cell_at(x, y).ok().flatten()?;
    lift(grid, items, id);
    Some(id)
}

/// Release every cell held by `id` and clear its anchor.
fn lift(grid: &mut GridStore, items: &mut ItemTable, id: ItemId) {
    match items.get_mut(id) {
        Some(item) => {
            if let Some(rect) = item.rect() {
                grid.clear(rect);
            }
            item.set_anchor(None);
        }
        None => {
            // Not in this table: scrub whatever cells still name it.
            let cells: Vec<GridPos> = grid
                .occupied()
                .filter(|&(_, occupant)| occupant == id)
                .map(|(pos, _)| pos)
                .collect();
            for pos in cells {
                grid.clear(Rect::new(pos.x, pos.y, 1, 1));
            }
        }
    }
}

/// First anchor, in row-major order, where a `footprint` rectangle lies in
/// bounds over empty cells only.
pub fn find_first_fit(grid: &GridStore, footprint: Footprint) -> Option<GridPos> {
    if !footprint.is_valid() {
        return None;
    }
    let max_y = grid.height() - footprint.h;
    let max_x = grid.width() - footprint.w;

    for y in 0..=max_y {
        for x in 0..=max_x {
            if grid.is_area_free(Rect::new(x, y, footprint.w, footprint.h)) {
                return Some(GridPos::new(x, y));
            }
        }
    }
    None
}

/// Store `id` at the first free anchor for its current footprint.
pub fn insert_item(
    grid: &mut GridStore,
    items: &mut ItemTable,
    id: ItemId,
) -> Result<GridPos, GridError> {
    let footprint = items
        .get(id)
        .ok_or(GridError::UnknownItem(id))?
        .footprint();
    let pos = find_first_fit(grid, footprint).ok_or(GridError::NoSpace)?;

    match place_item(grid, items, id, pos.x, pos.y) {
        PlaceResult::Placed => Ok(pos),
        other => Err(other.error(pos.x, pos.y, id).unwrap_or(GridError::Conflict)),
    }
}
