//! Builder for creating and configuring ShoppingList instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::ShoppingList;
use crate::{
    db::Database,
    error::{ListError, Result},
};

/// Builder for creating and configuring ShoppingList instances.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListBuilder {
    database_path: Option<PathBuf>,
}

impl ShoppingListBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/trolley/shopping.db` or
    /// `~/.local/share/trolley/shopping.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the list, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `ListError::FileSystem` if the parent directory cannot be
    /// created, `ListError::XdgDirectory` if no default path can be
    /// determined, and `ListError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<ShoppingList> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ListError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(ListError::join)??;

        debug!("Shopping list database ready at {}", db_path.display());

        Ok(ShoppingList::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trolley")
            .place_data_file("shopping.db")
            .map_err(|e| ListError::XdgDirectory(e.to_string()))
    }
}
