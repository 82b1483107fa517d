//! Instrumented sorting
//!
//! Each algorithm sorts in place by one field and returns how many element
//! comparisons it made. Comparisons are byte-wise for the string fields.

use crate::item::ItemRecord;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Field the backpack is currently ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Unordered (fresh, cleared, or modified by an insert)
    None,
    /// Ordered by name
    Name,
    /// Ordered by category
    Category,
    /// Ordered by rank
    Rank,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::None
    }
}

impl SortKey {
    /// Algorithm that sorts by this key (`None` for `SortKey::None`)
    pub fn strategy(&self) -> Option<SortStrategy> {
        match self {
            Self::None => None,
            Self::Name => Some(SortStrategy::Bubble),
            Self::Category => Some(SortStrategy::Insertion),
            Self::Rank => Some(SortStrategy::Selection),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Name => write!(f, "name"),
            Self::Category => write!(f, "category"),
            Self::Rank => write!(f, "rank"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nome" => Ok(Self::Name),
            "category" | "type" | "tipo" => Ok(Self::Category),
            "rank" | "quantity" | "priority" | "prioridade" => Ok(Self::Rank),
            "none" => Ok(Self::None),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Sorting algorithm, each bound to one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Bubble sort by name
    Bubble,
    /// Insertion sort by category
    Insertion,
    /// Selection sort by rank
    Selection,
}

impl SortStrategy {
    /// All strategies
    pub const ALL: [SortStrategy; 3] = [Self::Bubble, Self::Insertion, Self::Selection];

    /// Key this strategy orders by
    pub fn key(&self) -> SortKey {
        match self {
            Self::Bubble => SortKey::Name,
            Self::Insertion => SortKey::Category,
            Self::Selection => SortKey::Rank,
        }
    }

    /// Sort `items` in place, returning the comparison count
    pub fn run(&self, items: &mut [ItemRecord]) -> usize {
        match self {
            Self::Bubble => bubble_sort_by_name(items),
            Self::Insertion => insertion_sort_by_category(items),
            Self::Selection => selection_sort_by_rank(items),
        }
    }

    /// Sort `items` in place and measure the run
    pub fn run_timed(&self, items: &mut [ItemRecord]) -> SortReport {
        let (comparisons, elapsed) = timed(|| self.run(items));
        log::debug!(
            "{} sort of {} items: {} comparisons in {:?}",
            self,
            items.len(),
            comparisons,
            elapsed
        );

        SortReport {
            strategy: *self,
            key: self.key(),
            comparisons,
            elapsed,
        }
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bubble => write!(f, "bubble"),
            Self::Insertion => write!(f, "insertion"),
            Self::Selection => write!(f, "selection"),
        }
    }
}

/// Outcome of one sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortReport {
    /// Algorithm used
    pub strategy: SortStrategy,
    /// Key the items are now ordered by
    pub key: SortKey,
    /// Element comparisons performed
    pub comparisons: usize,
    /// Wall time of the run (advisory only)
    pub elapsed: Duration,
}

/// Run `f` and measure its wall time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Bubble sort by name.
///
/// Every pass scans the whole unsorted prefix; there is no early exit on a
/// pass without swaps, so the count is always `n * (n - 1) / 2`.
pub fn bubble_sort_by_name(items: &mut [ItemRecord]) -> usize {
    let n = items.len();
    let mut comparisons = 0;

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            comparisons += 1;
            if items[j].name() > items[j + 1].name() {
                items.swap(j, j + 1);
            }
        }
    }

    comparisons
}

/// Insertion sort by category.
///
/// Counts one comparison per category test against the held key; the
/// lower-bound check is free.
pub fn insertion_sort_by_category(items: &mut [ItemRecord]) -> usize {
    let mut comparisons = 0;

    for i in 1..items.len() {
        // The key stays at `i` until its hole is known
        let mut hole = i;
        while hole > 0 {
            comparisons += 1;
            if items[hole - 1].category() > items[i].category() {
                hole -= 1;
            } else {
                break;
            }
        }
        items[hole..=i].rotate_right(1);
    }

    comparisons
}

/// Selection sort by rank
pub fn selection_sort_by_rank(items: &mut [ItemRecord]) -> usize {
    let n = items.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            comparisons += 1;
            if items[j].rank() < items[min].rank() {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }

    comparisons
}
