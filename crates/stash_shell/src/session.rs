//! Shell session state
//!
//! A session owns the one backpack the shell operates on, plus the counters
//! of the most recent sort and search for later display.

use serde::{Deserialize, Serialize};
use stash_inventory::{
    Backpack, InventoryError, ItemStore, LengthPolicy, LinkedBackpack, SearchReport, SortReport,
    Variant,
};

use crate::command::CommandError;
use crate::config::ShellConfig;

/// Which backing store a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Contiguous array; supports sorting and binary search
    Array,
    /// Singly linked list
    Linked,
}

impl Default for StoreKind {
    fn default() -> Self {
        Self::Array
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::Linked => write!(f, "linked"),
        }
    }
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "array" | "vector" | "vec" => Ok(Self::Array),
            "linked" | "list" => Ok(Self::Linked),
            other => Err(format!("Unknown store: {}", other)),
        }
    }
}

/// The backing store of a session
#[derive(Debug)]
pub enum Store {
    /// Array-backed backpack
    Array(Backpack),
    /// Linked-list backpack
    Linked(LinkedBackpack),
}

impl Store {
    /// Create an empty store
    pub fn new(kind: StoreKind, capacity: usize) -> Result<Self, InventoryError> {
        Ok(match kind {
            StoreKind::Array => Self::Array(Backpack::new(capacity)?),
            StoreKind::Linked => Self::Linked(LinkedBackpack::new(capacity)?),
        })
    }

    /// Store kind
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Array(_) => StoreKind::Array,
            Self::Linked(_) => StoreKind::Linked,
        }
    }

    /// Shared view
    pub fn as_store(&self) -> &dyn ItemStore {
        match self {
            Self::Array(backpack) => backpack,
            Self::Linked(list) => list,
        }
    }

    /// Mutable shared view
    pub fn as_store_mut(&mut self) -> &mut dyn ItemStore {
        match self {
            Self::Array(backpack) => backpack,
            Self::Linked(list) => list,
        }
    }

    /// The array backpack, for array-only operations
    pub fn backpack(&self, operation: &str) -> Result<&Backpack, CommandError> {
        match self {
            Self::Array(backpack) => Ok(backpack),
            Self::Linked(_) => Err(unsupported(StoreKind::Linked, operation)),
        }
    }

    /// Mutable array backpack, for array-only operations
    pub fn backpack_mut(&mut self, operation: &str) -> Result<&mut Backpack, CommandError> {
        match self {
            Self::Array(backpack) => Ok(backpack),
            Self::Linked(_) => Err(unsupported(StoreKind::Linked, operation)),
        }
    }
}

fn unsupported(kind: StoreKind, operation: &str) -> CommandError {
    CommandError::Unsupported {
        store: kind.to_string(),
        operation: operation.to_string(),
    }
}

/// Kind of the last search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Linear scan
    Sequential,
    /// Binary search over a name-sorted array
    Binary,
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// Interactive session
#[derive(Debug)]
pub struct Session {
    /// Backing store
    store: Store,
    /// Backpack flavour
    variant: Variant,
    /// Policy for over-long fields
    policy: LengthPolicy,
    /// Most recent sort run
    last_sort: Option<SortReport>,
    /// Most recent search run
    last_search: Option<(SearchKind, SearchReport)>,
    /// Cleared by `quit`
    running: bool,
}

impl Session {
    /// Create a session over an existing store
    pub fn new(store: Store, variant: Variant, policy: LengthPolicy) -> Self {
        Self {
            store,
            variant,
            policy,
            last_sort: None,
            last_search: None,
            running: true,
        }
    }

    /// Create a session as described by a config
    pub fn from_config(config: &ShellConfig) -> Result<Self, InventoryError> {
        let store = Store::new(config.store, config.effective_capacity())?;
        log::info!(
            "Session: {} store, {} variant, capacity {}",
            config.store,
            config.variant,
            store.as_store().capacity()
        );
        Ok(Self::new(store, config.variant, config.length_policy()))
    }

    /// Backing store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable backing store
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Backpack flavour
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Policy for over-long fields
    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Most recent sort run
    pub fn last_sort(&self) -> Option<&SortReport> {
        self.last_sort.as_ref()
    }

    /// Record a sort run
    pub fn record_sort(&mut self, report: SortReport) {
        self.last_sort = Some(report);
    }

    /// Most recent search run
    pub fn last_search(&self) -> Option<&(SearchKind, SearchReport)> {
        self.last_search.as_ref()
    }

    /// Record a search run
    pub fn record_search(&mut self, kind: SearchKind, report: SearchReport) {
        self.last_search = Some((kind, report));
    }

    /// Check if the session should keep reading commands
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop after the current command
    pub fn stop(&mut self) {
        self.running = false;
    }
}
