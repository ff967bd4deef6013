use tempfile::TempDir;
use trolley_core::{params::AddItem, ShoppingItem, ShoppingList, ShoppingListBuilder};

/// Helper function to create a test list
pub async fn create_test_list() -> (TempDir, ShoppingList) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let list = ShoppingListBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create list");
    (temp_dir, list)
}

/// Adds an item, panicking on failure
pub async fn add_item(list: &ShoppingList, description: &str) -> ShoppingItem {
    list.add(&AddItem {
        description: description.to_string(),
    })
    .await
    .expect("Failed to add item")
}
