//! High-level shopping list API.
//!
//! [`ShoppingList`] is the entry point for every interface. It holds only the
//! database path; each operation opens a connection on a blocking thread,
//! does its work and returns the result.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  HTTP handlers  │    │  ShoppingList   │    │    Database     │
//! │   CLI commands  │───▶│   (item_ops)    │───▶│ (item_queries)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Interfaces           Domain logic          Data persistence
//! ```
//!
//! Rename and toggle read the whole list, find the item and write it back.
//! There is no locking around that sequence, so two concurrent toggles of
//! the same item race and the last write wins.
//!
//! # Usage
//!
//! ```rust
//! use trolley_core::{params::AddItem, ShoppingListBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = ShoppingListBuilder::new()
//!     .with_database_path(Some("shopping.db"))
//!     .build()
//!     .await?;
//!
//! let item = list
//!     .add(&AddItem {
//!         description: "Oat milk".to_string(),
//!     })
//!     .await?;
//! assert!(!item.complete);
//!
//! for item in &list.shopping_items().await? {
//!     println!("{}", item.description);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{ListError, Result},
};

pub mod builder;
pub mod item_ops;


pub use builder::ShoppingListBuilder;

/// Main interface for managing the shopping list.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub(crate) db_path: PathBuf,
}

impl ShoppingList {
    /// Creates a list backed by the database at `db_path`.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(ListError::join)?
    }
}
