//! Shopping item model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry on the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Free-text description of what to buy
    pub description: String,

    /// Creation time, also the sort key for the list (UTC)
    pub created_at: Timestamp,

    /// Whether the item has been ticked off
    #[serde(default)]
    pub complete: bool,
}

impl ShoppingItem {
    /// Creates a new, incomplete item with a fresh ID stamped with the
    /// current time.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            created_at: Timestamp::now(),
            complete: false,
        }
    }

    /// Case-insensitive substring match against the description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
    }
}
