//! Terminal commands operating directly on the shopping list database.
//!
//! Each clap argument struct converts into the matching core parameter type
//! with `From`, so the core crate stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ShoppingList
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use trolley_core::{
    params::{AddItem, Id, RenameItem, ReorderItems, SearchItems},
    OperationStatus, ShoppingList,
};
use uuid::Uuid;

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to the end of the list
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Change an item's description
    #[command(alias = "mv")]
    Rename(RenameItemArgs),
    /// Tick an item off, or un-tick it
    #[command(alias = "t")]
    Toggle(ItemIdArgs),
    /// Remove an item
    #[command(alias = "rm")]
    Delete(ItemIdArgs),
    /// Find items whose description contains a substring (case-insensitive)
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Put items in the given order
    Reorder(ReorderArgs),
    /// Show the whole list
    #[command(alias = "ls")]
    List,
}

/// Add an item
#[derive(Args)]
pub struct AddItemArgs {
    /// What to buy
    pub description: String,
}

impl From<AddItemArgs> for AddItem {
    fn from(val: AddItemArgs) -> Self {
        AddItem {
            description: val.description,
        }
    }
}

/// Rename an item
#[derive(Args)]
pub struct RenameItemArgs {
    /// ID of the item
    pub id: Uuid,
    /// New description
    pub name: String,
}

impl From<RenameItemArgs> for RenameItem {
    fn from(val: RenameItemArgs) -> Self {
        RenameItem {
            id: val.id,
            name: val.name,
        }
    }
}

/// Operate on a single item
#[derive(Args)]
pub struct ItemIdArgs {
    /// ID of the item
    pub id: Uuid,
}

impl From<ItemIdArgs> for Id {
    fn from(val: ItemIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Search the list
#[derive(Args)]
pub struct SearchArgs {
    /// Substring to look for; empty matches everything
    #[arg(default_value = "")]
    pub query: String,
}

impl From<SearchArgs> for SearchItems {
    fn from(val: SearchArgs) -> Self {
        SearchItems { query: val.query }
    }
}

/// Reorder the list
#[derive(Args)]
pub struct ReorderArgs {
    /// Item IDs in the desired order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl From<ReorderArgs> for ReorderItems {
    fn from(val: ReorderArgs) -> Self {
        ReorderItems { ids: val.ids }
    }
}

/// Runs terminal commands against a list and prints markdown results.
pub struct Cli {
    list: ShoppingList,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(list: ShoppingList, renderer: TerminalRenderer) -> Self {
        Self { list, renderer }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let item = self
                    .list
                    .add(&args.into())
                    .await
                    .context("Failed to add item")?;
                self.renderer.render(&format!("{item}"));
            }
            ItemCommands::Rename(args) => {
                let item = self
                    .list
                    .rename(&args.into())
                    .await
                    .context("Failed to rename item")?;
                self.renderer.render(&format!("{item}"));
            }
            ItemCommands::Toggle(args) => {
                let item = self
                    .list
                    .toggle_done(&args.into())
                    .await
                    .context("Failed to toggle item")?;
                self.renderer.render(&format!("{item}"));
            }
            ItemCommands::Delete(args) => {
                let params: Id = args.into();
                self.list
                    .delete(&params)
                    .await
                    .context("Failed to delete item")?;
                let status = OperationStatus::success(format!("Deleted item {}", params.id));
                self.renderer.render(&status.to_string());
            }
            ItemCommands::Search(args) => {
                let results = self
                    .list
                    .search(&args.into())
                    .await
                    .context("Failed to search items")?;
                self.renderer.render(&results.to_string());
            }
            ItemCommands::Reorder(args) => {
                self.list
                    .reorder(&args.into())
                    .await
                    .context("Failed to reorder items")?;
                self.list_items().await?;
            }
            ItemCommands::List => self.list_items().await?,
        }
        Ok(())
    }

    pub async fn list_items(&self) -> Result<()> {
        let items = self
            .list
            .shopping_items()
            .await
            .context("Failed to list items")?;
        self.renderer.render(&items.to_string());
        Ok(())
    }
}
