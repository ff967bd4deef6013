//! Collection wrapper types for displaying groups of items.

use std::{fmt, ops::Index};

use crate::models::ShoppingItem;

/// Newtype wrapper for displaying an ordered collection of items.
///
/// Handles the empty list gracefully and formats each item using its own
/// `Display` implementation, preserving list order.
///
/// # Examples
///
/// ```rust
/// use trolley_core::{display::Items, models::ShoppingItem};
///
/// let items = Items(vec![ShoppingItem::new("Butter")]);
/// assert_eq!(items.len(), 1);
/// assert!(format!("{}", items).contains("Butter"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items(pub Vec<ShoppingItem>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, ShoppingItem> {
        self.0.iter()
    }

    /// Number of items already ticked off.
    pub fn completed(&self) -> usize {
        self.0.iter().filter(|item| item.complete).count()
    }
}

impl Index<usize> for Items {
    type Output = ShoppingItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = ShoppingItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a ShoppingItem;
    type IntoIter = std::slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items on the list.")
        } else {
            for item in &self.0 {
                write!(f, "{}", item)?;
            }
            Ok(())
        }
    }
}
