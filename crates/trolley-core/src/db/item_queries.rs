//! Shopping item CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result},
    models::ShoppingItem,
};

const INSERT_ITEM_SQL: &str =
    "INSERT INTO shopping_items (id, description, created_at, complete) VALUES (?1, ?2, ?3, ?4)";
// rowid breaks ties between items created within the same microsecond.
const SELECT_ITEMS_SQL: &str =
    "SELECT id, description, created_at, complete FROM shopping_items ORDER BY created_at, rowid";
const UPDATE_ITEM_SQL: &str =
    "UPDATE shopping_items SET description = ?1, complete = ?2 WHERE id = ?3";
const DELETE_ITEM_SQL: &str = "DELETE FROM shopping_items WHERE id = ?1";
const UPDATE_ITEM_CREATED_AT_SQL: &str = "UPDATE shopping_items SET created_at = ?1 WHERE id = ?2";

/// Gap between consecutive synthetic timestamps assigned by a reorder.
const REORDER_STEP_MICROS: i64 = 1_000;

impl super::Database {
    /// Helper function to construct a ShoppingItem from a database row
    fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<ShoppingItem> {
        let id_str: String = row.get(0)?;
        let id = Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
        })?;

        let created_at = Timestamp::from_microsecond(row.get::<_, i64>(2)?).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e))
        })?;

        Ok(ShoppingItem {
            id,
            description: row.get(1)?,
            created_at,
            complete: row.get(3)?,
        })
    }

    /// Inserts a new item as-is.
    pub fn insert_item(&mut self, item: &ShoppingItem) -> Result<()> {
        self.connection
            .execute(
                INSERT_ITEM_SQL,
                params![
                    item.id.to_string(),
                    item.description,
                    item.created_at.as_microsecond(),
                    item.complete
                ],
            )
            .db_context("Failed to insert item")?;
        Ok(())
    }

    /// Returns every item, oldest `created_at` first.
    pub fn get_items(&self) -> Result<Vec<ShoppingItem>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEMS_SQL)
            .db_context("Failed to prepare items query")?;

        let items = stmt
            .query_map([], Self::build_item_from_row)
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read item row")?;

        Ok(items)
    }

    /// Writes the item's description and completion flag.
    ///
    /// `created_at` is left alone. Updating an unknown ID is a no-op; the
    /// returned count tells the caller whether a row matched.
    pub fn update_item(&mut self, item: &ShoppingItem) -> Result<usize> {
        self.connection
            .execute(
                UPDATE_ITEM_SQL,
                params![item.description, item.complete, item.id.to_string()],
            )
            .db_context("Failed to update item")
    }

    /// Deletes an item by ID. Deleting an unknown ID succeeds and removes
    /// nothing.
    pub fn delete_item(&mut self, id: Uuid) -> Result<usize> {
        self.connection
            .execute(DELETE_ITEM_SQL, params![id.to_string()])
            .db_context("Failed to delete item")
    }

    /// Re-sequences items so that listing returns them in the order given.
    ///
    /// Each ID gets `base + i` milliseconds as its new `created_at`. Runs in
    /// a single transaction: either every update lands or none do. IDs that
    /// match no row are skipped. Returns the number of rows updated.
    pub fn reorder_items(&mut self, ids: &[Uuid], base: Timestamp) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let base = base.as_microsecond();
        let mut updated = 0;
        for (position, id) in ids.iter().enumerate() {
            let created_at = base + position as i64 * REORDER_STEP_MICROS;
            updated += tx
                .execute(
                    UPDATE_ITEM_CREATED_AT_SQL,
                    params![created_at, id.to_string()],
                )
                .db_context("Failed to update item position")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }
}
