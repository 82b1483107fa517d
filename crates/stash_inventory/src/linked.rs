//! Linked-list backpack
//!
//! A singly linked alternative to [`Backpack`](crate::Backpack) with the
//! same capacity rule. New records go to the head, so storage order is most
//! recent first. It supports insert, remove, listing and sequential search;
//! sorting and binary search are array-only.

use crate::error::{InventoryError, Result};
use crate::item::{ItemRecord, Variant};
use crate::inventory::MAX_CAPACITY;
use crate::search::{sequential_search, SearchReport};
use crate::store::ItemStore;

#[derive(Debug)]
struct Node {
    item: ItemRecord,
    next: Option<Box<Node>>,
}

/// Fixed-capacity backpack stored as a singly linked list
#[derive(Debug)]
pub struct LinkedBackpack {
    head: Option<Box<Node>>,
    len: usize,
    capacity: usize,
}

impl LinkedBackpack {
    /// Create an empty list with given capacity
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(InventoryError::invalid(format!(
                "capacity {} exceeds the maximum of {}",
                capacity, MAX_CAPACITY
            )));
        }

        Ok(Self {
            head: None,
            len: 0,
            capacity,
        })
    }

    /// Create an empty list sized for a variant
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            head: None,
            len: 0,
            capacity: variant.default_capacity(),
        }
    }

    /// Iterate records from the head
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Unlink the node at `index`
    fn unlink(&mut self, index: usize) -> Option<ItemRecord> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.len -= 1;
        Some(node.item)
    }
}

impl ItemStore for LinkedBackpack {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, item: ItemRecord) -> Result<()> {
        if self.len >= self.capacity {
            return Err(InventoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        log::debug!("Pushing '{}' onto list head", item.name());
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<ItemRecord> {
        let index = self.find(name).into_result(name)?;
        log::debug!("Unlinking '{}' at position {}", name, index);
        self.unlink(index)
            .ok_or_else(|| InventoryError::not_found(name))
    }

    fn find(&self, name: &str) -> SearchReport {
        sequential_search(self.iter(), name)
    }

    fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.iter().nth(index)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &ItemRecord> + '_> {
        Box::new(self.iter())
    }

    fn clear(&mut self) {
        // Iterative so long lists never recurse through Box drops
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl Drop for LinkedBackpack {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for LinkedBackpack {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Iterator over a [`LinkedBackpack`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ItemRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

impl<'a> IntoIterator for &'a LinkedBackpack {
    type Item = &'a ItemRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchOutcome;

    fn item(name: &str) -> ItemRecord {
        ItemRecord::new(name, "arma", 1).unwrap()
    }

    fn names(list: &LinkedBackpack) -> Vec<&str> {
        list.iter().map(|i| i.name()).collect()
    }

    #[test]
    fn test_push_front_order() {
        let mut list = LinkedBackpack::new(5).unwrap();
        list.insert(item("AK-47")).unwrap();
        list.insert(item("Faca")).unwrap();
        list.insert(item("Kit")).unwrap();

        assert_eq!(names(&list), ["Kit", "Faca", "AK-47"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).map(|i| i.name()), Some("AK-47"));
        assert!(list.get(3).is_none());
    }

    #[test]
    fn test_capacity() {
        let mut list = LinkedBackpack::new(1).unwrap();
        list.insert(item("Faca")).unwrap();

        assert_eq!(
            list.insert(item("Kit")).unwrap_err(),
            InventoryError::CapacityExceeded { capacity: 1 }
        );
        assert_eq!(names(&list), ["Faca"]);
        assert!(LinkedBackpack::new(MAX_CAPACITY + 1).is_err());
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = LinkedBackpack::new(5).unwrap();
        for name in ["a", "b", "c", "d"] {
            list.insert(item(name)).unwrap();
        }
        // d c b a
        assert_eq!(list.remove("d").unwrap().name(), "d");
        assert_eq!(list.remove("b").unwrap().name(), "b");
        assert_eq!(list.remove("a").unwrap().name(), "a");

        assert_eq!(names(&list), ["c"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut list = LinkedBackpack::new(5).unwrap();
        list.insert(item("Kit")).unwrap();

        assert_eq!(list.remove("Faca").unwrap_err(), InventoryError::not_found("Faca"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_find() {
        let mut list = LinkedBackpack::new(5).unwrap();
        list.insert(item("AK-47")).unwrap();
        list.insert(item("Kit")).unwrap();

        let report = list.find("AK-47");
        assert_eq!(report.outcome, SearchOutcome::Found(1));
        assert_eq!(report.comparisons, 2);

        let empty = LinkedBackpack::new(5).unwrap();
        assert_eq!(empty.find("X").comparisons, 0);
    }

    #[test]
    fn test_clear() {
        let mut list = LinkedBackpack::default();
        for name in ["a", "b", "c"] {
            list.insert(item(name)).unwrap();
        }

        list.clear();

        assert!(list.is_empty());
        assert!(list.iter().next().is_none());
        list.insert(item("Kit")).unwrap();
        assert_eq!(list.len(), 1);
    }
}
