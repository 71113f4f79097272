//! Interactive inventory session.
//!
//! The session owns the item table, the inventory grids, the held item and a
//! cursor cell. Front ends feed it discrete commands; it turns them into
//! placement-engine calls against the active grid and keeps the held-item
//! state in step with what the engine reports.

use thiserror::Error;
use tracing::{debug, info, warn};

use stash_grid_core::{
    boundary_check, grid_to_screen, insert_item, pick_up_item, place_item, screen_to_grid,
    total_value, Catalog, GridError, GridSnapshot, GridStore, Item, ItemTable, PlaceResult,
    TileSize,
};

use crate::config::SessionConfig;
use crate::types::{Footprint, GridPos, InventoryAction, ItemData, ItemId, Rect, ScreenPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no inventory grid is active")]
    NoActiveGrid,

    #[error("grid {0} does not exist")]
    NoSuchGrid(usize),

    #[error("an item is already held")]
    HandsFull,

    #[error("no item is held")]
    NothingHeld,

    #[error("the catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl SessionError {
    pub fn code(self) -> &'static str {
        match self {
            SessionError::NoActiveGrid => "no_active_grid",
            SessionError::NoSuchGrid(_) => "no_such_grid",
            SessionError::HandsFull => "hands_full",
            SessionError::NothingHeld => "nothing_held",
            SessionError::EmptyCatalog => "empty_catalog",
            SessionError::Grid(e) => e.code(),
        }
    }
}

/// Result of [`InventorySession::interact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome {
    /// Empty hand over an empty cell.
    Nothing,
    PickedUp(ItemId),
    Placed { item: ItemId, at: GridPos },
    /// The held item was placed over another one, which is now held.
    Swapped { placed: ItemId, now_held: ItemId, at: GridPos },
}

/// What the cursor should highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub rect: Rect,
    /// The held item's footprint lies within the grid at the cursor. Always
    /// true when hovering a stored item.
    pub fits: bool,
    /// Stored item under the cursor, when nothing is held.
    pub hovered: Option<ItemId>,
}

#[derive(Debug, Clone)]
pub struct InventorySession {
    items: ItemTable,
    grids: Vec<GridStore>,
    active: Option<usize>,
    held: Option<ItemId>,
    cursor: GridPos,
    tile: TileSize,
    catalog: Catalog,
    spawned: usize,
}

impl InventorySession {
    pub fn new(config: &SessionConfig, catalog: Catalog) -> Result<Self, SessionError> {
        let grids = (0..config.grid_count.max(1))
            .map(|_| GridStore::new(config.grid_width, config.grid_height))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            width = config.grid_width,
            height = config.grid_height,
            grids = grids.len(),
            catalog = catalog.len(),
            "inventory session created"
        );
        Ok(Self::with_grids(grids, config.tile(), catalog))
    }

    /// Session over explicitly built grids; the first one starts active.
    pub fn with_grids(grids: Vec<GridStore>, tile: TileSize, catalog: Catalog) -> Self {
        let active = if grids.is_empty() { None } else { Some(0) };
        Self {
            items: ItemTable::new(),
            grids,
            active,
            held: None,
            cursor: GridPos::default(),
            tile,
            catalog,
            spawned: 0,
        }
    }

    pub fn items(&self) -> &ItemTable {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn grids(&self) -> &[GridStore] {
        &self.grids
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_grid(&self) -> Option<&GridStore> {
        self.active.and_then(|i| self.grids.get(i))
    }

    pub fn held(&self) -> Option<ItemId> {
        self.held
    }

    pub fn held_item(&self) -> Option<&Item> {
        self.held.and_then(|id| self.items.get(id))
    }

    pub fn cursor(&self) -> GridPos {
        self.cursor
    }

    pub fn tile(&self) -> TileSize {
        self.tile
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Make grid `index` the target of subsequent commands, or detach from
    /// all grids with `None`.
    pub fn select_grid(&mut self, index: Option<usize>) -> Result<(), SessionError> {
        if let Some(i) = index {
            if i >= self.grids.len() {
                return Err(SessionError::NoSuchGrid(i));
            }
        }
        self.active = index;
        self.clamp_cursor();
        debug!(grid = ?index, "grid selected");
        Ok(())
    }

    /// Activate the next grid, wrapping around.
    pub fn cycle_grid(&mut self) -> Result<usize, SessionError> {
        if self.grids.is_empty() {
            return Err(SessionError::NoActiveGrid);
        }
        let next = self.active.map_or(0, |i| (i + 1) % self.grids.len());
        self.select_grid(Some(next))?;
        Ok(next)
    }

    /// Move the cursor, staying inside the active grid.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor = self.cursor.offset(dx, dy);
        self.clamp_cursor();
    }

    pub fn set_cursor(&mut self, pos: GridPos) {
        self.cursor = pos;
    }

    /// Resolve a pointer position to the cursor cell.
    ///
    /// While an item is held the cursor becomes the anchor that centers the
    /// item under the pointer. The result is not clamped; a cursor outside
    /// the grid makes drops fail with an out-of-bounds error.
    pub fn set_cursor_from_screen(&mut self, point: ScreenPoint) -> GridPos {
        let held = self.held_item().map(Item::footprint);
        self.cursor = screen_to_grid(self.tile, point, held);
        self.cursor
    }

    /// Screen position of the held item's center at the cursor.
    pub fn held_screen_position(&self) -> Option<ScreenPoint> {
        let fp = self.held_item()?.footprint();
        Some(grid_to_screen(self.tile, fp, self.cursor))
    }

    fn clamp_cursor(&mut self) {
        if let Some(grid) = self.active_grid() {
            let (w, h) = (grid.width(), grid.height());
            self.cursor.x = self.cursor.x.clamp(0, w - 1);
            self.cursor.y = self.cursor.y.clamp(0, h - 1);
        }
    }

    fn active_index_or_err(&self) -> Result<usize, SessionError> {
        self.active
            .filter(|&i| i < self.grids.len())
            .ok_or(SessionError::NoActiveGrid)
    }

    /// Pick up what is under the cursor, or drop the held item there.
    pub fn interact(&mut self) -> Result<InteractOutcome, SessionError> {
        let gi = self.active_index_or_err()?;
        let GridPos { x, y } = self.cursor;
        let grid = &mut self.grids[gi];

        let Some(held) = self.held else {
            return Ok(match pick_up_item(grid, &mut self.items, x, y) {
                Some(id) => {
                    self.held = Some(id);
                    debug!(item = %id, x, y, "picked up");
                    InteractOutcome::PickedUp(id)
                }
                None => InteractOutcome::Nothing,
            });
        };

        let at = self.cursor;
        match place_item(grid, &mut self.items, held, x, y) {
            PlaceResult::Placed => {
                self.held = None;
                debug!(item = %held, x, y, "placed");
                Ok(InteractOutcome::Placed { item: held, at })
            }
            PlaceResult::PlacedWithDisplaced(other) => {
                self.held = Some(other);
                debug!(item = %held, displaced = %other, x, y, "placed with swap");
                Ok(InteractOutcome::Swapped {
                    placed: held,
                    now_held: other,
                    at,
                })
            }
            rejected => {
                let err = rejected.error(x, y, held).unwrap_or(GridError::Conflict);
                warn!(item = %held, x, y, code = err.code(), "drop rejected");
                Err(err.into())
            }
        }
    }

    /// Turn the held item by 90°.
    pub fn rotate_held(&mut self) -> Result<Footprint, SessionError> {
        let id = self.held.ok_or(SessionError::NothingHeld)?;
        let fp = self.items.rotate(id)?;
        debug!(item = %id, w = fp.w, h = fp.h, "rotated");
        Ok(fp)
    }

    /// Store the held item at the first free anchor of the active grid.
    pub fn auto_insert_held(&mut self) -> Result<GridPos, SessionError> {
        let id = self.held.ok_or(SessionError::NothingHeld)?;
        let gi = self.active_index_or_err()?;
        let pos = insert_item(&mut self.grids[gi], &mut self.items, id)?;
        self.held = None;
        debug!(item = %id, x = pos.x, y = pos.y, "auto-inserted");
        Ok(pos)
    }

    /// Take a new item into the hand, as when looting it from the world.
    pub fn hold_new(&mut self, data: ItemData) -> Result<ItemId, SessionError> {
        if self.held.is_some() {
            return Err(SessionError::HandsFull);
        }
        let id = self.items.insert(data)?;
        self.held = Some(id);
        debug!(item = %id, "holding new item");
        Ok(id)
    }

    /// Create an item and store it at the first free anchor.
    ///
    /// Returns `None`, with the item destroyed, when the active grid has no
    /// room for it.
    pub fn add_item(&mut self, data: ItemData) -> Result<Option<GridPos>, SessionError> {
        let gi = self.active_index_or_err()?;
        let name = data.name.clone();
        let id = self.items.insert(data)?;

        match insert_item(&mut self.grids[gi], &mut self.items, id) {
            Ok(pos) => {
                debug!(item = %id, name = %name, x = pos.x, y = pos.y, "item stored");
                Ok(Some(pos))
            }
            Err(GridError::NoSpace) => {
                self.items.remove(id)?;
                warn!(name = %name, "no room for item; discarded");
                Ok(None)
            }
            Err(e) => {
                self.items.remove(id)?;
                Err(e.into())
            }
        }
    }

    /// Store the next catalog entry (cycling through the catalog).
    pub fn spawn_next(&mut self) -> Result<Option<GridPos>, SessionError> {
        let data = self
            .catalog
            .pick(self.spawned)
            .cloned()
            .ok_or(SessionError::EmptyCatalog)?;
        self.spawned += 1;
        self.add_item(data)
    }

    /// Destroy the held item.
    pub fn discard_held(&mut self) -> Option<ItemData> {
        let id = self.held.take()?;
        match self.items.remove(id) {
            Ok(item) => {
                debug!(item = %id, name = item.name(), "discarded");
                Some(item.data().clone())
            }
            Err(e) => {
                warn!(item = %id, code = e.code(), "held item could not be discarded");
                None
            }
        }
    }

    /// Leave the inventory screen; anything still in hand is lost.
    pub fn close(&mut self) {
        if let Some(data) = self.discard_held() {
            info!(name = %data.name, "inventory closed with item in hand");
        }
    }

    /// Remove and destroy every stored item in every grid, and the item in
    /// hand. Returns how many stored items were removed.
    pub fn clear_grids(&mut self) -> usize {
        if let Some(data) = self.discard_held() {
            debug!(name = %data.name, "held item dropped by reset");
        }
        let mut removed = 0;
        for grid in &mut self.grids {
            let stored: Vec<(GridPos, ItemId)> = grid.occupied().collect();
            for (pos, id) in stored {
                if pick_up_item(grid, &mut self.items, pos.x, pos.y).is_some()
                    && self.items.remove(id).is_ok()
                {
                    removed += 1;
                }
            }
            grid.clear_all();
        }
        info!(removed, "all grids cleared");
        removed
    }

    /// Value of the active grid's contents.
    pub fn total_value(&self) -> i64 {
        self.active_grid()
            .map_or(0, |grid| total_value(grid, &self.items))
    }

    pub fn snapshot(&self) -> Option<GridSnapshot> {
        self.active_grid()
            .map(|grid| GridSnapshot::capture(grid, &self.items))
    }

    /// Area under the cursor worth highlighting, if any.
    pub fn highlight(&self) -> Option<Highlight> {
        let grid = self.active_grid()?;
        match self.held_item() {
            Some(item) => {
                let fp = item.footprint();
                let rect = Rect::at(self.cursor, fp);
                Some(Highlight {
                    rect,
                    fits: boundary_check(grid, rect.x, rect.y, fp.w, fp.h),
                    hovered: None,
                })
            }
            None => {
                let id = grid.get(self.cursor.x, self.cursor.y)?;
                let rect = self.items.get(id)?.rect()?;
                Some(Highlight {
                    rect,
                    fits: true,
                    hovered: Some(id),
                })
            }
        }
    }

    /// Apply a front-end command. Returns whether anything changed.
    pub fn apply_action(&mut self, action: InventoryAction) -> bool {
        if let Some((dx, dy)) = action.cursor_delta() {
            let before = self.cursor;
            self.move_cursor(dx, dy);
            return self.cursor != before;
        }

        let result: Result<bool, SessionError> = match action {
            InventoryAction::Interact => self
                .interact()
                .map(|o| !matches!(o, InteractOutcome::Nothing)),
            InventoryAction::Rotate => self.rotate_held().map(|_| true),
            InventoryAction::AutoInsert => self.auto_insert_held().map(|_| true),
            InventoryAction::SpawnItem => {
                if self.held.is_some() {
                    Err(SessionError::HandsFull)
                } else {
                    self.spawn_next().map(|pos| pos.is_some())
                }
            }
            InventoryAction::Discard => Ok(self.discard_held().is_some()),
            InventoryAction::NextGrid => self.cycle_grid().map(|_| true),
            InventoryAction::CursorLeft
            | InventoryAction::CursorRight
            | InventoryAction::CursorUp
            | InventoryAction::CursorDown => Ok(false),
        };

        match result {
            Ok(changed) => changed,
            Err(e) => {
                debug!(action = action.as_str(), code = e.code(), "action refused");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(w: i32, h: i32) -> InventorySession {
        let grid = GridStore::new(w, h).unwrap();
        InventorySession::with_grids(vec![grid], TileSize::square(10.0), Catalog::builtin())
    }

    #[test]
    fn pick_up_then_drop_elsewhere() {
        let mut s = session(4, 4);
        let pos = s.add_item(ItemData::new("Laptop", 2, 2, 400)).unwrap();
        assert_eq!(pos, Some(GridPos::new(0, 0)));

        s.set_cursor(GridPos::new(1, 1));
        let id = match s.interact().unwrap() {
            InteractOutcome::PickedUp(id) => id,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(s.held(), Some(id));
        assert_eq!(s.total_value(), 0);

        s.set_cursor(GridPos::new(2, 2));
        assert_eq!(
            s.interact().unwrap(),
            InteractOutcome::Placed { item: id, at: GridPos::new(2, 2) }
        );
        assert_eq!(s.held(), None);
        assert_eq!(s.total_value(), 400);
    }

    #[test]
    fn rejected_drop_keeps_item_in_hand() {
        let mut s = session(3, 3);
        let id = s.hold_new(ItemData::new("Rifle", 4, 1, 650)).unwrap();
        assert_eq!(
            s.interact(),
            Err(SessionError::Grid(GridError::OutOfBounds { x: 0, y: 0 }))
        );
        assert_eq!(s.held(), Some(id));
        assert_eq!(s.active_grid().unwrap().occupied_count(), 0);
    }

    #[test]
    fn rotate_requires_held_item() {
        let mut s = session(3, 3);
        assert_eq!(s.rotate_held(), Err(SessionError::NothingHeld));
        s.hold_new(ItemData::new("Rifle", 3, 1, 650)).unwrap();
        assert_eq!(s.rotate_held().unwrap(), Footprint::new(1, 3));
    }

    #[test]
    fn add_item_discards_when_full() {
        let mut s = session(1, 1);
        assert!(s.add_item(ItemData::new("Coin", 1, 1, 1)).unwrap().is_some());
        assert_eq!(s.add_item(ItemData::new("Coin", 1, 1, 1)).unwrap(), None);
        assert_eq!(s.items().len(), 1);
    }

    #[test]
    fn hands_full_blocks_new_pickups() {
        let mut s = session(2, 2);
        s.hold_new(ItemData::new("Key", 1, 1, 5)).unwrap();
        assert_eq!(
            s.hold_new(ItemData::new("Key", 1, 1, 5)),
            Err(SessionError::HandsFull)
        );
    }

    #[test]
    fn detached_session_refuses_grid_commands() {
        let mut s = session(2, 2);
        s.select_grid(None).unwrap();
        assert_eq!(s.interact(), Err(SessionError::NoActiveGrid));
        assert_eq!(s.select_grid(Some(5)), Err(SessionError::NoSuchGrid(5)));
        assert!(s.highlight().is_none());
    }

    #[test]
    fn cursor_is_clamped_to_grid() {
        let mut s = session(3, 2);
        s.move_cursor(-4, -4);
        assert_eq!(s.cursor(), GridPos::new(0, 0));
        s.move_cursor(10, 10);
        assert_eq!(s.cursor(), GridPos::new(2, 1));
        assert!(!s.apply_action(InventoryAction::CursorRight));
        assert!(s.apply_action(InventoryAction::CursorLeft));
    }

    #[test]
    fn error_codes_pass_through() {
        assert_eq!(SessionError::Grid(GridError::Conflict).code(), "conflict");
        assert_eq!(SessionError::HandsFull.code(), "hands_full");
    }
}
