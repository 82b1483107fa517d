//! Item records and field validation

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};

/// Maximum item name length, in characters
pub const NAME_MAX_CHARS: usize = 29;

/// Maximum item category length, in characters
pub const CATEGORY_MAX_CHARS: usize = 19;

/// What to do with a name or category longer than its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Fail with `InvalidInput`
    Reject,
    /// Keep the leading characters that fit
    Truncate,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self::Reject
    }
}

/// Backpack flavour
///
/// The two flavours share every operation; they differ in default capacity
/// and in what the numeric rank means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Loot backpack: rank is a carried quantity
    Loot,
    /// Escape components: rank is a priority from 1 to 10
    Components,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Loot
    }
}

impl Variant {
    /// Default number of slots
    pub fn default_capacity(&self) -> usize {
        match self {
            Self::Loot => 10,
            Self::Components => 20,
        }
    }

    /// Human label for the rank field
    pub fn rank_label(&self) -> &'static str {
        match self {
            Self::Loot => "Quantity",
            Self::Components => "Priority",
        }
    }

    /// Check a rank value against this variant's range
    pub fn validate_rank(&self, rank: i32) -> Result<i32> {
        match self {
            Self::Loot if rank < 0 => Err(InventoryError::invalid(format!(
                "quantity must not be negative (got {})",
                rank
            ))),
            Self::Components if !(1..=10).contains(&rank) => Err(InventoryError::invalid(
                format!("priority must be between 1 and 10 (got {})", rank),
            )),
            _ => Ok(rank),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loot => write!(f, "loot"),
            Self::Components => write!(f, "components"),
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = InventoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loot" | "items" | "backpack" => Ok(Self::Loot),
            "components" | "component" | "parts" => Ok(Self::Components),
            other => Err(InventoryError::invalid(format!("unknown variant: {}", other))),
        }
    }
}

/// A single record in a backpack
///
/// Fields are private so the length bounds hold for every constructed
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ItemRecord {
    name: String,
    category: String,
    rank: i32,
}

impl ItemRecord {
    /// Create a record, rejecting fields longer than their bound
    pub fn new(name: impl Into<String>, category: impl Into<String>, rank: i32) -> Result<Self> {
        Self::with_policy(name, category, rank, LengthPolicy::Reject)
    }

    /// Create a record, applying `policy` to over-long fields
    pub fn with_policy(
        name: impl Into<String>,
        category: impl Into<String>,
        rank: i32,
        policy: LengthPolicy,
    ) -> Result<Self> {
        let name = bound_field("name", name.into(), NAME_MAX_CHARS, policy)?;
        if name.is_empty() {
            return Err(InventoryError::invalid("name must not be empty"));
        }
        let category = bound_field("category", category.into(), CATEGORY_MAX_CHARS, policy)?;

        Ok(Self {
            name,
            category,
            rank,
        })
    }

    /// Create a record whose rank is checked against `variant`
    pub fn for_variant(
        variant: Variant,
        name: impl Into<String>,
        category: impl Into<String>,
        rank: i32,
        policy: LengthPolicy,
    ) -> Result<Self> {
        let rank = variant.validate_rank(rank)?;
        Self::with_policy(name, category, rank, policy)
    }

    /// Item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Quantity or priority, depending on the variant
    pub fn rank(&self) -> i32 {
        self.rank
    }
}

impl std::fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) x{}", self.name, self.category, self.rank)
    }
}

fn bound_field(field: &str, value: String, max: usize, policy: LengthPolicy) -> Result<String> {
    let value = value.trim();
    match value.char_indices().nth(max) {
        None => Ok(value.to_string()),
        Some((cut, _)) => match policy {
            LengthPolicy::Truncate => {
                log::debug!("Truncating {} to {} characters", field, max);
                Ok(value[..cut].trim_end().to_string())
            }
            LengthPolicy::Reject => Err(InventoryError::invalid(format!(
                "{} is longer than {} characters",
                field, max
            ))),
        },
    }
}
