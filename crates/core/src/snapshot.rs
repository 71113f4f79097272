use serde::{Deserialize, Serialize};

use crate::grid::GridStore;
use crate::item::ItemTable;
use crate::types::GridPos;

/// Stable 64-bit FNV-1a over a byte stream.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions, so
/// snapshots hash with this instead.
pub fn fnv1a64(bytes: impl IntoIterator<Item = u8>) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut h = OFFSET_BASIS;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(PRIME);
    }
    h
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: u32,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub rotated: bool,
    pub cost: i64,
    pub anchor: GridPos,
}

/// Plain-data copy of one grid and the items stored in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major occupant ids, `null` for empty cells.
    pub cells: Vec<Option<u32>>,
    /// Items anchored in this grid, row-major by anchor.
    pub items: Vec<ItemSnapshot>,
    pub cells_hash: u64,
}

impl GridSnapshot {
    pub fn capture(grid: &GridStore, items: &ItemTable) -> Self {
        let cells: Vec<Option<u32>> = grid.cells().iter().map(|c| c.map(|id| id.0)).collect();

        let stored = grid
            .occupied()
            .filter_map(|(pos, id)| {
                let item = items.get(id)?;
                if item.anchor() != Some(pos) {
                    return None;
                }
                let fp = item.footprint();
                Some(ItemSnapshot {
                    id: id.0,
                    name: item.name().to_string(),
                    width: fp.w,
                    height: fp.h,
                    rotated: item.is_rotated(),
                    cost: item.cost(),
                    anchor: pos,
                })
            })
            .collect();

        Self {
            width: grid.width(),
            height: grid.height(),
            cells_hash: hash_cells(&cells),
            cells,
            items: stored,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// Hash of the cell table; empty cells hash as `0`, occupied as `id + 1`.
pub fn hash_cells(cells: &[Option<u32>]) -> u64 {
    fnv1a64(
        cells
            .iter()
            .flat_map(|c| c.map_or(0u32, |id| id.wrapping_add(1)).to_le_bytes()),
    )
}
