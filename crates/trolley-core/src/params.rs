//! Parameter structures for shopping list operations.
//!
//! These are shared by every interface (HTTP forms, CLI arguments) and carry
//! no framework-specific derives beyond serde. Interface layers either
//! deserialize straight into them or convert their own argument types with
//! `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   HTTP Forms    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ListError, Result};

/// Parameters for operations requiring just an item ID.
///
/// Used for toggle and delete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Id {
    /// The ID of the item to operate on
    pub id: Uuid,
}

impl Id {
    /// Parses an ID from its textual form.
    pub fn parse(raw: &str) -> Result<Self> {
        parse_id(raw).map(|id| Self { id })
    }
}

/// Parameters for adding an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItem {
    /// What to buy. Any text is accepted, including the empty string.
    #[serde(default)]
    pub description: String,
}

/// Parameters for renaming an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameItem {
    /// The ID of the item to rename
    pub id: Uuid,
    /// The new description
    pub name: String,
}

/// Parameters for reordering the list.
///
/// IDs are kept as raw strings so that a single malformed entry can reject
/// the whole batch before anything is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderItems {
    /// Item IDs in the requested display order
    #[serde(default)]
    pub ids: Vec<String>,
}

impl ReorderItems {
    /// Parses every ID, failing on the first malformed one.
    pub fn parse_ids(&self) -> Result<Vec<Uuid>> {
        self.ids.iter().map(|raw| parse_id(raw)).collect()
    }
}

/// Parameters for a substring search over descriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchItems {
    /// Case-insensitive substring; empty matches everything
    #[serde(rename = "search", default)]
    pub query: String,
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|e| {
        ListError::invalid_input("id").with_reason(format!("'{raw}' is not a valid item ID: {e}"))
    })
}
