//! Terminal front end for the inventory.
//!
//! Renders into a plain character framebuffer instead of a widget toolkit,
//! then flushes it with crossterm. Everything except [`renderer`] is pure and
//! unit-testable.

pub mod fb;
pub mod inventory_view;
pub mod renderer;

pub use stash_grid_core as core;
pub use stash_grid_engine as engine;
pub use stash_grid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use inventory_view::{item_color, GridLayout, InventoryView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, FrameStats, TerminalRenderer};
