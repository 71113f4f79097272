//! Item module - footprint/orientation model and the item arena
//!
//! Items live in an [`ItemTable`] and are referred to everywhere else by
//! [`ItemId`]. The grid only ever stores ids, so there is no aliasing between
//! the occupancy table and the items themselves.

use crate::error::GridError;
use crate::types::{Footprint, GridPos, ItemData, ItemId, Rect};

/// An inventory item: a rectangle of cells that can be turned by 90°.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    data: ItemData,
    rotated: bool,
    anchor: Option<GridPos>,
}

impl Item {
    /// Build an item from its catalog definition.
    ///
    /// Fails with [`GridError::InvalidFootprint`] unless both base
    /// dimensions are positive.
    pub fn new(id: ItemId, data: ItemData) -> Result<Self, GridError> {
        if !data.footprint().is_valid() {
            return Err(GridError::InvalidFootprint {
                width: data.width,
                height: data.height,
            });
        }
        Ok(Self {
            id,
            data,
            rotated: false,
            anchor: None,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn data(&self) -> &ItemData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn cost(&self) -> i64 {
        self.data.cost
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Unrotated dimensions as defined by the catalog.
    pub fn base_footprint(&self) -> Footprint {
        self.data.footprint()
    }

    /// Effective dimensions after rotation.
    pub fn footprint(&self) -> Footprint {
        if self.rotated {
            self.data.footprint().transposed()
        } else {
            self.data.footprint()
        }
    }

    /// Top-left occupied cell, or `None` while the item is held.
    pub fn anchor(&self) -> Option<GridPos> {
        self.anchor
    }

    pub fn is_placed(&self) -> bool {
        self.anchor.is_some()
    }

    /// The cells this item currently covers.
    pub fn rect(&self) -> Option<Rect> {
        self.anchor.map(|a| Rect::at(a, self.footprint()))
    }

    /// Toggle the orientation of a held item.
    ///
    /// Turning a placed item would change its footprint under the grid's
    /// feet, so it is refused with [`GridError::ItemPlaced`].
    pub fn rotate(&mut self) -> Result<(), GridError> {
        if self.is_placed() {
            return Err(GridError::ItemPlaced(self.id));
        }
        self.rotated = !self.rotated;
        Ok(())
    }

    pub(crate) fn set_anchor(&mut self, anchor: Option<GridPos>) {
        self.anchor = anchor;
    }
}

/// Arena owning every live item.
///
/// Ids are slot indices; slots freed by [`ItemTable::remove`] are reused by
/// later insertions.
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    slots: Vec<Option<Item>>,
    free: Vec<u32>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unplaced item from its definition.
    pub fn insert(&mut self, data: ItemData) -> Result<ItemId, GridError> {
        let id = match self.free.last() {
            Some(&slot) => ItemId(slot),
            None => ItemId(self.slots.len() as u32),
        };
        let item = Item::new(id, data)?;

        if self.free.pop().is_some() {
            self.slots[id.index()] = Some(item);
        } else {
            self.slots.push(Some(item));
        }
        Ok(id)
    }

    /// Destroy an unplaced item and hand back its contents.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, GridError> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or(GridError::UnknownItem(id))?;
        let placed = match slot {
            None => return Err(GridError::UnknownItem(id)),
            Some(item) => item.is_placed(),
        };
        if placed {
            return Err(GridError::ItemPlaced(id));
        }

        let item = slot.take().ok_or(GridError::UnknownItem(id))?;
        self.free.push(id.0);
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Rotate a held item.
    pub fn rotate(&mut self, id: ItemId) -> Result<Footprint, GridError> {
        let item = self.get_mut(id).ok_or(GridError::UnknownItem(id))?;
        item.rotate()?;
        Ok(item.footprint())
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crowbar() -> ItemData {
        ItemData::new("Crowbar", 3, 1, 40)
    }

    #[test]
    fn footprint_swaps_when_rotated() {
        let mut item = Item::new(ItemId(0), crowbar()).unwrap();
        assert_eq!(item.footprint(), Footprint::new(3, 1));

        item.rotate().unwrap();
        assert!(item.is_rotated());
        assert_eq!(item.footprint(), Footprint::new(1, 3));
        assert_eq!(item.base_footprint(), Footprint::new(3, 1));

        item.rotate().unwrap();
        assert_eq!(item.footprint(), Footprint::new(3, 1));
    }

    #[test]
    fn non_positive_footprint_is_rejected() {
        let err = Item::new(ItemId(0), ItemData::new("Ghost", 0, 2, 1)).unwrap_err();
        assert_eq!(err, GridError::InvalidFootprint { width: 0, height: 2 });

        let err = Item::new(ItemId(0), ItemData::new("Ghost", 2, -1, 1)).unwrap_err();
        assert_eq!(err, GridError::InvalidFootprint { width: 2, height: -1 });
    }

    #[test]
    fn placed_item_refuses_rotation() {
        let mut item = Item::new(ItemId(4), crowbar()).unwrap();
        item.set_anchor(Some(GridPos::new(0, 0)));

        assert_eq!(item.rotate(), Err(GridError::ItemPlaced(ItemId(4))));
        assert!(!item.is_rotated());
    }

    #[test]
    fn table_reuses_freed_slots() {
        let mut table = ItemTable::new();
        let a = table.insert(crowbar()).unwrap();
        let b = table.insert(ItemData::new("Watch", 1, 1, 250)).unwrap();
        assert_eq!((a, b), (ItemId(0), ItemId(1)));

        let removed = table.remove(a).unwrap();
        assert_eq!(removed.name(), "Crowbar");
        assert!(!table.contains(a));
        assert_eq!(table.len(), 1);

        let c = table.insert(ItemData::new("Ring", 1, 1, 500)).unwrap();
        assert_eq!(c, a);
        assert_eq!(table.get(c).unwrap().name(), "Ring");
    }

    #[test]
    fn table_insert_failure_does_not_consume_slot() {
        let mut table = ItemTable::new();
        let a = table.insert(crowbar()).unwrap();
        table.remove(a).unwrap();

        assert!(table.insert(ItemData::new("Bad", 0, 0, 0)).is_err());
        assert_eq!(table.insert(crowbar()).unwrap(), a);
    }

    #[test]
    fn table_refuses_to_remove_placed_items() {
        let mut table = ItemTable::new();
        let id = table.insert(crowbar()).unwrap();
        table.get_mut(id).unwrap().set_anchor(Some(GridPos::new(1, 1)));

        assert_eq!(table.remove(id).unwrap_err(), GridError::ItemPlaced(id));
        assert!(table.contains(id));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut table = ItemTable::new();
        assert_eq!(table.remove(ItemId(9)).unwrap_err(), GridError::UnknownItem(ItemId(9)));
        assert_eq!(table.rotate(ItemId(9)).unwrap_err(), GridError::UnknownItem(ItemId(9)));
    }
}
