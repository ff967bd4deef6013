//! Item operations for the ShoppingList.

use jiff::Timestamp;
use log::debug;

use super::ShoppingList;
use crate::{
    db::Database,
    display::Items,
    error::{ListError, Result},
    models::ShoppingItem,
    params::{AddItem, Id, RenameItem, ReorderItems, SearchItems},
};

impl ShoppingList {
    /// Adds a new, incomplete item stamped with the current time.
    ///
    /// The description is stored as given; empty strings are accepted.
    pub async fn add(&self, params: &AddItem) -> Result<ShoppingItem> {
        let item = ShoppingItem::new(params.description.clone());

        self.with_db(move |db| {
            db.insert_item(&item)?;
            debug!("Added item {}", item.id);
            Ok(item)
        })
        .await
    }

    /// Replaces an item's description and returns the updated item.
    ///
    /// # Errors
    ///
    /// `ListError::ItemNotFound` if no item has the given ID.
    pub async fn rename(&self, params: &RenameItem) -> Result<ShoppingItem> {
        let id = params.id;
        let name = params.name.clone();

        self.with_db(move |db| {
            let mut item = find_item(db, id)?;
            item.description = name;
            db.update_item(&item)?;
            Ok(item)
        })
        .await
    }

    /// Flips an item's completion flag and returns the updated item.
    ///
    /// # Errors
    ///
    /// `ListError::ItemNotFound` if no item has the given ID.
    pub async fn toggle_done(&self, params: &Id) -> Result<ShoppingItem> {
        let id = params.id;

        self.with_db(move |db| {
            let mut item = find_item(db, id)?;
            item.complete = !item.complete;
            db.update_item(&item)?;
            Ok(item)
        })
        .await
    }

    /// Removes an item. Removing an ID that does not exist is not an error.
    pub async fn delete(&self, params: &Id) -> Result<()> {
        let id = params.id;

        self.with_db(move |db| {
            let removed = db.delete_item(id)?;
            debug!("Delete of {id} removed {removed} row(s)");
            Ok(())
        })
        .await
    }

    /// Puts the named items in the given order.
    ///
    /// Every ID is parsed before anything is written, so one malformed ID
    /// rejects the whole request. The writes themselves happen in a single
    /// transaction. Items not named keep their position relative to each
    /// other and sort ahead of the reordered ones.
    ///
    /// # Errors
    ///
    /// `ListError::InvalidInput` for a malformed ID.
    pub async fn reorder(&self, params: &ReorderItems) -> Result<()> {
        let ids = params.parse_ids()?;

        self.with_db(move |db| {
            let updated = db.reorder_items(&ids, Timestamp::now())?;
            debug!("Reordered {updated} of {} requested item(s)", ids.len());
            Ok(())
        })
        .await
    }

    /// Items whose description contains the query, ignoring case, in list
    /// order. An empty query returns the whole list.
    pub async fn search(&self, params: &SearchItems) -> Result<Items> {
        let needle = params.query.to_lowercase();

        let items = self.with_db(|db| db.get_items()).await?;

        Ok(Items(
            items
                .into_iter()
                .filter(|item| item.matches_lowercase(&needle))
                .collect(),
        ))
    }

    /// The whole list, ordered by `created_at`.
    pub async fn shopping_items(&self) -> Result<Items> {
        self.with_db(|db| db.get_items()).await.map(Items)
    }
}

/// Scans the full list for `id`.
fn find_item(db: &Database, id: uuid::Uuid) -> Result<ShoppingItem> {
    db.get_items()?
        .into_iter()
        .find(|item| item.id == id)
        .ok_or(ListError::ItemNotFound { id })
}
