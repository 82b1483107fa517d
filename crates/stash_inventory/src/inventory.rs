//! Array-backed backpack

use crate::error::{InventoryError, Result};
use crate::item::{ItemRecord, Variant};
use crate::search::{binary_search_by_name, sequential_search, SearchReport};
use crate::sort::{SortKey, SortReport, SortStrategy};
use crate::store::ItemStore;
use serde::Serialize;

/// Largest capacity any backpack may be created with
pub const MAX_CAPACITY: usize = 20;

/// Fixed-capacity backpack stored contiguously
///
/// Tracks which field the records are currently ordered by; binary search
/// is only allowed while that is the name.
#[derive(Debug, Clone, Serialize)]
pub struct Backpack {
    /// Records in storage order
    items: Vec<ItemRecord>,
    /// Maximum number of records
    capacity: usize,
    /// Field the records are ordered by
    sort_key: SortKey,
}

impl Backpack {
    /// Create an empty backpack with given capacity
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(InventoryError::invalid(format!(
                "capacity {} exceeds the maximum of {}",
                capacity, MAX_CAPACITY
            )));
        }

        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            sort_key: SortKey::None,
        })
    }

    /// Create an empty backpack sized for a variant
    pub fn for_variant(variant: Variant) -> Self {
        let capacity = variant.default_capacity();
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            sort_key: SortKey::None,
        }
    }

    /// Field the records are currently ordered by
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Records as a slice
    pub fn as_slice(&self) -> &[ItemRecord] {
        &self.items
    }

    /// Add a record at the end
    ///
    /// The new record is unordered relative to the rest, so the sort key is
    /// reset.
    pub fn insert(&mut self, item: ItemRecord) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(InventoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        log::debug!("Inserting '{}' at slot {}", item.name(), self.items.len());
        self.items.push(item);
        self.sort_key = SortKey::None;
        Ok(())
    }

    /// Remove the first record with exactly this name
    ///
    /// Later records shift left one position; their relative order, and so
    /// the sort key, is kept.
    pub fn remove(&mut self, name: &str) -> Result<ItemRecord> {
        let index = self.find(name).into_result(name)?;
        log::debug!("Removing '{}' from slot {}", name, index);
        Ok(self.items.remove(index))
    }

    /// Sequential search by exact name
    pub fn find(&self, name: &str) -> SearchReport {
        sequential_search(&self.items, name)
    }

    /// Binary search by name
    ///
    /// Fails with `Precondition` unless the last sort was by name; the search
    /// does not run in that case.
    pub fn binary_search(&self, name: &str) -> Result<SearchReport> {
        if self.sort_key != SortKey::Name {
            return Err(InventoryError::Precondition {
                required: SortKey::Name,
                current: self.sort_key,
            });
        }

        Ok(binary_search_by_name(&self.items, name))
    }

    /// Sort with the given algorithm
    pub fn sort(&mut self, strategy: SortStrategy) -> SortReport {
        let report = strategy.run_timed(&mut self.items);
        self.sort_key = report.key;
        report
    }

    /// Sort by a key, using the algorithm bound to it
    pub fn sort_by(&mut self, key: SortKey) -> Result<SortReport> {
        let strategy = key
            .strategy()
            .ok_or_else(|| InventoryError::invalid("cannot sort by 'none'"))?;
        Ok(self.sort(strategy))
    }
}

impl ItemStore for Backpack {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: ItemRecord) -> Result<()> {
        Backpack::insert(self, item)
    }

    fn remove(&mut self, name: &str) -> Result<ItemRecord> {
        Backpack::remove(self, name)
    }

    fn find(&self, name: &str) -> SearchReport {
        Backpack::find(self, name)
    }

    fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.items.get(index)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &ItemRecord> + '_> {
        Box::new(self.items.iter())
    }

    fn clear(&mut self) {
        self.items.clear();
        self.sort_key = SortKey::None;
    }
}

impl Default for Backpack {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}
