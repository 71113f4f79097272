//! Core inventory logic - pure, deterministic, and testable
//!
//! This crate packs rectangular items into a fixed 2D grid, the way a
//! first-fit allocator packs blocks into an address range. It has **zero
//! dependencies** on input, rendering or I/O (catalog file loading aside) and
//! performs no logging.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy table, cell -> item id
//! - [`item`]: item footprint/rotation model and the item arena
//! - [`placement`]: bounds check, overlap resolution, place/pick-up, first-fit
//! - [`transform`]: grid <-> screen coordinate transform
//! - [`scoring`]: inventory valuation, one count per item
//! - [`snapshot`]: serializable copy of a grid for tests and debugging
//! - [`catalog`]: item definitions loaded from CSV or JSON
//!
//! # Invariants
//!
//! - A placed item with anchor `(ax, ay)` and footprint `(w, h)` owns exactly
//!   the cells `(ax + i, ay + j)` for `0 <= i < w`, `0 <= j < h`.
//! - No cell is claimed by two items.
//! - Failed operations do not mutate anything.
//!
//! # Example
//!
//! ```
//! use stash_grid_core::{place_item, pick_up_item, GridStore, ItemTable, PlaceResult};
//! use stash_grid_types::ItemData;
//!
//! let mut grid = GridStore::new(4, 4).unwrap();
//! let mut items = ItemTable::new();
//! let a = items.insert(ItemData::new("Jewelry Case", 2, 2, 750)).unwrap();
//! let b = items.insert(ItemData::new("Laptop", 2, 2, 400)).unwrap();
//!
//! assert_eq!(place_item(&mut grid, &mut items, a, 0, 0), PlaceResult::Placed);
//!
//! // Dropping B over A swaps them: A comes back off the grid.
//! assert_eq!(place_item(&mut grid, &mut items, b, 0, 0), PlaceResult::PlacedWithDisplaced(a));
//! assert!(!items.get(a).unwrap().is_placed());
//!
//! // Any cell of B picks up all of B.
//! assert_eq!(pick_up_item(&mut grid, &mut items, 1, 1), Some(b));
//! assert_eq!(grid.occupied_count(), 0);
//! ```

pub mod catalog;
pub mod error;
pub mod grid;
pub mod item;
pub mod placement;
pub mod scoring;
pub mod snapshot;
pub mod transform;

pub use stash_grid_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogError, DEFAULT_CATALOG_CSV};
pub use error::GridError;
pub use grid::{Cell, GridStore};
pub use item::{Item, ItemTable};
pub use placement::{
    boundary_check, find_first_fit, insert_item, overlap_check, pick_up_item, place_item,
    OverlapOutcome, PlaceResult,
};
pub use scoring::{placed_items, total_value};
pub use snapshot::{GridSnapshot, ItemSnapshot};
pub use transform::{grid_to_screen, screen_to_grid, TileSize};
