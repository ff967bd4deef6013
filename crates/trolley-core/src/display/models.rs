//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::ShoppingItem;

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.complete { "x" } else { " " };
        writeln!(f, "- [{check}] {}", self.description)?;
        writeln!(f, "  - ID: {}", self.id)?;
        writeln!(f, "  - Added: {}", LocalDateTime(&self.created_at))
    }
}
