//! Storage seam shared by the array and linked-list backpacks

use crate::error::Result;
use crate::item::ItemRecord;
use crate::search::SearchReport;

/// Bounded item storage
pub trait ItemStore {
    /// Maximum number of records
    fn capacity(&self) -> usize;

    /// Current number of records
    fn len(&self) -> usize;

    /// Check if the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if another insert would fail
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Add a record; fails with `CapacityExceeded` when full
    fn insert(&mut self, item: ItemRecord) -> Result<()>;

    /// Remove the first record with exactly this name; fails with `NotFound`
    fn remove(&mut self, name: &str) -> Result<ItemRecord>;

    /// Sequential search by exact name
    fn find(&self, name: &str) -> SearchReport;

    /// Record at a storage position
    fn get(&self, index: usize) -> Option<&ItemRecord>;

    /// Records in storage order
    fn items(&self) -> Box<dyn Iterator<Item = &ItemRecord> + '_>;

    /// Remove every record
    fn clear(&mut self);
}
