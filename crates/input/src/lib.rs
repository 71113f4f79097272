//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InventoryAction`] and
//! provides a DAS/ARR cursor handler suitable for terminal environments
//! (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use stash_grid_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
