//! Shared types - pure data structures and constants
//!
//! This crate defines the fundamental types used throughout the inventory:
//! item identities, grid coordinates, rectangles, item definitions and the
//! discrete commands a session accepts. Everything here is plain data with no
//! placement policy, usable from the core, the session layer and the terminal
//! front end alike.
//!
//! # Coordinate Spaces
//!
//! - **Grid space**: integer `(x, y)` cells, `x` grows to the right, `y` grows
//!   *downward* (row 0 is the top row).
//! - **Screen space**: floating point units, `x` grows to the right, `y` grows
//!   *upward*. The sign flip between the two lives only in the coordinate
//!   transform (`stash_grid_core::transform`).
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_WIDTH` | 20 | Columns of a freshly configured inventory |
//! | `DEFAULT_GRID_HEIGHT` | 10 | Rows of a freshly configured inventory |
//! | `DEFAULT_TILE_SIZE` | 97.0 | Screen units per cell, both axes |
//! | `DEFAULT_DAS_MS` | 170 | Delay before cursor auto-repeat starts |
//! | `DEFAULT_ARR_MS` | 60 | Interval between cursor auto-repeats |
//!
//! # Examples
//!
//! ```
//! use stash_grid_types::{Footprint, GridPos, InventoryAction, Rect};
//!
//! let rect = Rect::at(GridPos::new(1, 2), Footprint::new(2, 3));
//! assert_eq!(rect.right(), 3);
//! assert_eq!(rect.bottom(), 5);
//! assert_eq!(rect.cells().count(), 6);
//!
//! assert_eq!(InventoryAction::from_str("rotate"), Some(InventoryAction::Rotate));
//! ```

use serde::{Deserialize, Serialize};

/// Default inventory width in cells.
pub const DEFAULT_GRID_WIDTH: i32 = 20;

/// Default inventory height in cells.
pub const DEFAULT_GRID_HEIGHT: i32 = 10;

/// Default tile edge in screen units.
pub const DEFAULT_TILE_SIZE: f32 = 97.0;

/// Cursor DAS (Delayed Auto Shift) in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 170;

/// Cursor ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 60;

/// Fixed frame interval of the terminal front end (~60 FPS).
pub const TICK_MS: u32 = 16;

/// Identity of an item: an index into the item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A cell address in grid space.
///
/// Signed so that pointer positions left of or above the grid can be
/// represented and rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shifted by `(dx, dy)`, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Width and height of a rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub w: i32,
    pub h: i32,
}

impl Footprint {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// The same rectangle turned by 90 degrees.
    pub const fn transposed(self) -> Self {
        Self {
            w: self.h,
            h: self.w,
        }
    }

    pub const fn is_valid(self) -> bool {
        self.w > 0 && self.h > 0
    }
}

/// An axis-aligned rectangle of cells anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn at(anchor: GridPos, footprint: Footprint) -> Self {
        Self {
            x: anchor.x,
            y: anchor.y,
            w: footprint.w,
            h: footprint.h,
        }
    }

    pub const fn anchor(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    pub const fn footprint(&self) -> Footprint {
        Footprint::new(self.w, self.h)
    }

    /// One past the rightmost column, saturating at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom row, saturating at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// The four corner cells: top-left, top-right, bottom-left, bottom-right.
    ///
    /// A corner past the `i32` range saturates to `i32::MAX` or `i32::MIN`,
    /// neither of which is a cell of any grid.
    pub const fn corners(&self) -> [GridPos; 4] {
        let x1 = self.x.saturating_add(self.w.saturating_sub(1));
        let y1 = self.y.saturating_add(self.h.saturating_sub(1));
        [
            GridPos::new(self.x, self.y),
            GridPos::new(x1, self.y),
            GridPos::new(self.x, y1),
            GridPos::new(x1, y1),
        ]
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
    }

    /// The overlap of two rectangles, or `None` when they share no cell.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        let w = i32::try_from(i64::from(x1) - i64::from(x0)).ok()?;
        let h = i32::try_from(i64::from(y1) - i64::from(y0)).ok()?;
        Some(Rect::new(x0, y0, w, h))
    }

    /// Every cell of the rectangle in row-major order.
    ///
    /// Cells past `i32::MAX` cannot be addressed and are skipped.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let (x0, x1) = (self.x, self.right().max(self.x));
        let (y0, y1) = (self.y, self.bottom().max(self.y));
        (y0..y1).flat_map(move |cy| (x0..x1).map(move |cx| GridPos::new(cx, cy)))
    }
}

/// Content definition of an item, as supplied by the catalog.
///
/// Only `width`, `height` and `cost` carry meaning for the inventory; `name`
/// and `icon` are opaque attributes carried for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub cost: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ItemData {
    pub fn new(name: impl Into<String>, width: i32, height: i32, cost: i64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            cost,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.width, self.height)
    }
}

/// A point in screen space (`y` grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Discrete commands understood by an inventory session.
///
/// These are produced by the key mapping and by any other front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryAction {
    /// Move the cursor one cell left
    CursorLeft,
    /// Move the cursor one cell right
    CursorRight,
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Pick up the item under the cursor, or drop the held item there
    Interact,
    /// Turn the held item by 90°
    Rotate,
    /// Store the held item in the first free slot
    AutoInsert,
    /// Take a catalog item and auto-insert it
    SpawnItem,
    /// Destroy the held item
    Discard,
    /// Make the next grid the active one
    NextGrid,
}

impl InventoryAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stash_grid_types::InventoryAction;
    ///
    /// assert_eq!(InventoryAction::from_str("cursorLeft"), Some(InventoryAction::CursorLeft));
    /// assert_eq!(InventoryAction::from_str("AUTOINSERT"), Some(InventoryAction::AutoInsert));
    /// assert_eq!(InventoryAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(InventoryAction::CursorLeft),
            "cursorright" => Some(InventoryAction::CursorRight),
            "cursorup" => Some(InventoryAction::CursorUp),
            "cursordown" => Some(InventoryAction::CursorDown),
            "interact" => Some(InventoryAction::Interact),
            "rotate" => Some(InventoryAction::Rotate),
            "autoinsert" => Some(InventoryAction::AutoInsert),
            "spawnitem" => Some(InventoryAction::SpawnItem),
            "discard" => Some(InventoryAction::Discard),
            "nextgrid" => Some(InventoryAction::NextGrid),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryAction::CursorLeft => "cursorLeft",
            InventoryAction::CursorRight => "cursorRight",
            InventoryAction::CursorUp => "cursorUp",
            InventoryAction::CursorDown => "cursorDown",
            InventoryAction::Interact => "interact",
            InventoryAction::Rotate => "rotate",
            InventoryAction::AutoInsert => "autoInsert",
            InventoryAction::SpawnItem => "spawnItem",
            InventoryAction::Discard => "discard",
            InventoryAction::NextGrid => "nextGrid",
        }
    }

    /// Cursor delta for movement actions.
    pub fn cursor_delta(&self) -> Option<(i32, i32)> {
        match self {
            InventoryAction::CursorLeft => Some((-1, 0)),
            InventoryAction::CursorRight => Some((1, 0)),
            InventoryAction::CursorUp => Some((0, -1)),
            InventoryAction::CursorDown => Some((0, 1)),
            _ => None,
        }
    }
}
