//! Display formatting for items and item collections.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation feedback get newtype wrappers so each output
//! context can format consistently. All output is markdown, rendered by the
//! CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Items)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use trolley_core::{display::Items, models::ShoppingItem};
//!
//! let items = Items(vec![ShoppingItem::new("Apples"), ShoppingItem::new("Pears")]);
//! let output = format!("{}", items);
//! assert!(output.contains("- [ ] Apples"));
//!
//! let empty = Items(vec![]);
//! assert_eq!(format!("{}", empty), "No items on the list.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::Items;
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
