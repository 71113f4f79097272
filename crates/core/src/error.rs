use thiserror::Error;

use crate::types::ItemId;

/// Failures of grid and item operations.
///
/// Every variant is recoverable: the operation that reports it has left the
/// grid and the item table exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("target area overlaps more than one item")]
    Conflict,

    #[error("no free area large enough for the item")]
    NoSpace,

    #[error("item footprint {width}x{height} must be positive")]
    InvalidFootprint { width: i32, height: i32 },

    #[error("grid dimensions {width}x{height} must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("item {0} is not in the item table")]
    UnknownItem(ItemId),

    #[error("item {0} is placed on a grid; pick it up first")]
    ItemPlaced(ItemId),
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "out_of_bounds",
            GridError::Conflict => "conflict",
            GridError::NoSpace => "no_space",
            GridError::InvalidFootprint { .. } => "invalid_footprint",
            GridError::InvalidDimensions { .. } => "invalid_dimensions",
            GridError::UnknownItem(_) => "unknown_item",
            GridError::ItemPlaced(_) => "item_placed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_snake_case_and_distinct() {
        let all = [
            GridError::OutOfBounds { x: -1, y: 0 },
            GridError::Conflict,
            GridError::NoSpace,
            GridError::InvalidFootprint { width: 0, height: 1 },
            GridError::InvalidDimensions { width: 0, height: 0 },
            GridError::UnknownItem(ItemId(3)),
            GridError::ItemPlaced(ItemId(3)),
        ];
        let mut codes: Vec<_> = all.iter().map(|e| e.code()).collect();
        assert!(codes.iter().all(|c| c.chars().all(|ch| ch.is_ascii_lowercase() || ch == '_')));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn messages_name_the_offending_values() {
        let msg = GridError::OutOfBounds { x: 20, y: 3 }.to_string();
        assert_eq!(msg, "cell (20, 3) is outside the grid");
        let msg = GridError::ItemPlaced(ItemId(7)).to_string();
        assert!(msg.contains("#7"));
    }
}
