//! Inventory valuation.
//!
//! Multi-cell items appear in many cells, so each item is counted only at the
//! cell that equals its own stored anchor.

use crate::grid::GridStore;
use crate::item::ItemTable;
use crate::types::ItemId;

/// Sum of `cost` over every item stored in `grid`, each counted once.
pub fn total_value(grid: &GridStore, items: &ItemTable) -> i64 {
    anchored(grid, items)
        .filter_map(|id| items.get(id))
        .map(|item| item.cost())
        .sum()
}

/// Items stored in `grid`, ordered by anchor (row-major).
pub fn placed_items(grid: &GridStore, items: &ItemTable) -> Vec<ItemId> {
    anchored(grid, items).collect()
}

fn anchored<'a>(grid: &'a GridStore, items: &'a ItemTable) -> impl Iterator<Item = ItemId> + 'a {
    grid.occupied().filter_map(move |(pos, id)| {
        let item = items.get(id)?;
        (item.anchor() == Some(pos)).then_some(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::place_item;
    use crate::types::ItemData;

    #[test]
    fn multi_cell_items_count_once() {
        let mut grid = GridStore::new(5, 5).unwrap();
        let mut items = ItemTable::new();
        let painting = items.insert(ItemData::new("Painting", 3, 2, 1200)).unwrap();
        let coin = items.insert(ItemData::new("Coin", 1, 1, 15)).unwrap();

        place_item(&mut grid, &mut items, painting, 1, 1);
        place_item(&mut grid, &mut items, coin, 0, 4);

        assert_eq!(total_value(&grid, &items), 1215);
        assert_eq!(placed_items(&grid, &items), vec![painting, coin]);
    }

    #[test]
    fn empty_grid_is_worth_nothing() {
        let grid = GridStore::new(3, 3).unwrap();
        assert_eq!(total_value(&grid, &ItemTable::new()), 0);
    }
}
