//! Inventory session layer.
//!
//! Turns front-end commands (cursor moves, pick up / drop, rotate,
//! auto-insert) into placement-engine calls against the active grid and keeps
//! track of the item in hand. This is the only layer that logs; the core
//! stays silent.

pub mod config;
pub mod session;

pub use stash_grid_core as core;
pub use stash_grid_types as types;

pub use config::SessionConfig;
pub use session::{Highlight, InteractOutcome, InventorySession, SessionError};
