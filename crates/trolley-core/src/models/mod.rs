//! Data models for the shopping list.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use trolley_core::models::ShoppingItem;
//!
//! let item = ShoppingItem::new("Oat milk");
//! assert!(!item.complete);
//! println!("{}", item); // Markdown bullet with a checkbox
//! ```

pub mod item;


pub use item::ShoppingItem;
