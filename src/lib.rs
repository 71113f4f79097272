//! Stash grid (workspace facade crate).
//!
//! Re-exports the crates under `crates/` so applications can depend on a
//! single package: `stash_grid::{core, engine, input, term, types}`.

pub use stash_grid_core as core;
pub use stash_grid_engine as engine;
pub use stash_grid_input as input;
pub use stash_grid_term as term;
pub use stash_grid_types as types;
