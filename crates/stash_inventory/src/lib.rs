//! Stash Inventory - Bounded Backpack Storage
//!
//! This crate provides the in-memory core of the stash backpack manager.
//!
//! # Features
//!
//! - Item records with length-bounded name and category fields
//! - Array-backed [`Backpack`] with a fixed capacity and a sort-key flag
//! - Linked-list-backed [`LinkedBackpack`] sharing the [`ItemStore`] seam
//! - Bubble, insertion and selection sorts with comparison counting
//! - Sequential and binary search by name
//! - Wall-time measurement of sort runs
//!
//! # Example
//!
//! ```
//! use stash_inventory::prelude::*;
//!
//! let mut backpack = Backpack::new(3).unwrap();
//! backpack.insert(ItemRecord::new("AK-47", "arma", 2).unwrap()).unwrap();
//! backpack.insert(ItemRecord::new("Kit", "cura", 1).unwrap()).unwrap();
//! backpack.insert(ItemRecord::new("Faca", "arma", 1).unwrap()).unwrap();
//!
//! let report = backpack.sort(SortStrategy::Bubble);
//! assert_eq!(report.comparisons, 3);
//!
//! let found = backpack.binary_search("Kit").unwrap();
//! assert_eq!(found.outcome, SearchOutcome::Found(2));
//! ```

pub mod error;
pub mod inventory;
pub mod item;
pub mod linked;
pub mod search;
pub mod sort;
pub mod store;

pub mod prelude {
    pub use crate::error::{InventoryError, Result};
    pub use crate::inventory::{Backpack, MAX_CAPACITY};
    pub use crate::item::{ItemRecord, LengthPolicy, Variant, CATEGORY_MAX_CHARS, NAME_MAX_CHARS};
    pub use crate::linked::LinkedBackpack;
    pub use crate::search::{SearchOutcome, SearchReport};
    pub use crate::sort::{SortKey, SortReport, SortStrategy};
    pub use crate::store::ItemStore;
}

pub use prelude::*;
