//! Core library for the Trolley shopping list.
//!
//! This crate owns everything below the interfaces: the [`ShoppingItem`]
//! model, SQLite persistence ([`db`]), the domain operations on
//! [`ShoppingList`] (add, rename, toggle, delete, reorder, search) and the
//! markdown [`display`] used by the command line.
//!
//! # Quick Start
//!
//! ```rust
//! use trolley_core::{
//!     params::{AddItem, Id, SearchItems},
//!     ShoppingListBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = ShoppingListBuilder::new()
//!     .with_database_path(Some("shopping.db"))
//!     .build()
//!     .await?;
//!
//! let milk = list
//!     .add(&AddItem {
//!         description: "Milk".to_string(),
//!     })
//!     .await?;
//! list.toggle_done(&Id { id: milk.id }).await?;
//!
//! let found = list
//!     .search(&SearchItems {
//!         query: "MILK".to_string(),
//!     })
//!     .await?;
//! println!("{}", found);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod list;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use display::{Items, LocalDateTime, OperationStatus};
pub use error::{ListError, Result};
pub use list::{ShoppingList, ShoppingListBuilder};
pub use models::ShoppingItem;
pub use params::{AddItem, Id, RenameItem, ReorderItems, SearchItems};
