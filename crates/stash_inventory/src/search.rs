//! Searching by name

use crate::error::{InventoryError, Result};
use crate::item::ItemRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// Search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    /// Match at this position (storage order)
    Found(usize),
    /// No record has the requested name
    NotFound,
}

impl SearchOutcome {
    /// Index of the match, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(*index),
            Self::NotFound => None,
        }
    }

    /// Check if a match was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Outcome of one search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Where the name was found
    pub outcome: SearchOutcome,
    /// Name comparisons performed
    pub comparisons: usize,
}

impl SearchReport {
    /// Convert a miss into `InventoryError::NotFound`
    pub fn into_result(self, name: &str) -> Result<usize> {
        self.outcome
            .index()
            .ok_or_else(|| InventoryError::not_found(name))
    }
}

/// Linear scan for the first exact (case-sensitive) name match
pub fn sequential_search<'a, I>(items: I, name: &str) -> SearchReport
where
    I: IntoIterator<Item = &'a ItemRecord>,
{
    let mut comparisons = 0;

    for (index, item) in items.into_iter().enumerate() {
        comparisons += 1;
        if item.name() == name {
            return SearchReport {
                outcome: SearchOutcome::Found(index),
                comparisons,
            };
        }
    }

    SearchReport {
        outcome: SearchOutcome::NotFound,
        comparisons,
    }
}

/// Binary search over a slice already ordered by name.
///
/// With duplicate names any matching index may be returned.
pub fn binary_search_by_name(items: &[ItemRecord], name: &str) -> SearchReport {
    // Inclusive range [lo, hi - 1]; `hi` is kept exclusive so it cannot underflow
    let mut lo = 0;
    let mut hi = items.len();
    let mut comparisons = 0;

    while lo < hi {
        let mid = (lo + hi - 1) / 2;
        comparisons += 1;
        match name.cmp(items[mid].name()) {
            Ordering::Equal => {
                return SearchReport {
                    outcome: SearchOutcome::Found(mid),
                    comparisons,
                }
            }
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }

    SearchReport {
        outcome: SearchOutcome::NotFound,
        comparisons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<ItemRecord> {
        names
            .iter()
            .map(|n| ItemRecord::new(*n, "arma", 1).unwrap())
            .collect()
    }

    #[test]
    fn test_sequential_search() {
        let items = sorted(&["Kit", "AK-47", "Faca"]);

        let report = sequential_search(&items, "AK-47");
        assert_eq!(report.outcome, SearchOutcome::Found(1));
        assert_eq!(report.comparisons, 2);

        let report = sequential_search(&items, "Pistola");
        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(report.comparisons, 3);
    }

    #[test]
    fn test_sequential_search_is_case_sensitive() {
        let items = sorted(&["Faca"]);
        assert!(!sequential_search(&items, "faca").outcome.is_found());
    }

    #[test]
    fn test_sequential_search_empty() {
        let report = sequential_search(&[], "X");
        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(report.comparisons, 0);
    }

    #[test]
    fn test_binary_search() {
        let items = sorted(&["AK-47", "Faca", "Kit"]);

        let report = binary_search_by_name(&items, "Kit");
        assert_eq!(report.outcome, SearchOutcome::Found(2));
        assert_eq!(report.comparisons, 2);

        let report = binary_search_by_name(&items, "Faca");
        assert_eq!(report.outcome, SearchOutcome::Found(1));
        assert_eq!(report.comparisons, 1);
    }

    #[test]
    fn test_binary_search_misses() {
        let items = sorted(&["AK-47", "Faca", "Kit"]);

        // Below the first element: mid=1, then mid=0
        let report = binary_search_by_name(&items, "0");
        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(report.comparisons, 2);

        let report = binary_search_by_name(&items, "Zip");
        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(report.comparisons, 2);

        assert_eq!(binary_search_by_name(&[], "Kit").comparisons, 0);
    }

    #[test]
    fn test_binary_search_even_length_midpoint() {
        let items = sorted(&["a", "b", "c", "d"]);

        // (0 + 3) / 2 = 1 is probed first
        let report = binary_search_by_name(&items, "b");
        assert_eq!(report.outcome, SearchOutcome::Found(1));
        assert_eq!(report.comparisons, 1);
    }

    #[test]
    fn test_into_result() {
        let items = sorted(&["Faca"]);
        assert_eq!(sequential_search(&items, "Faca").into_result("Faca"), Ok(0));
        assert_eq!(
            sequential_search(&items, "Kit").into_result("Kit"),
            Err(InventoryError::not_found("Kit"))
        );
    }
}
