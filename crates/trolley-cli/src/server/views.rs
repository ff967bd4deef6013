//! HTML rendering with Liquid templates.
//!
//! Three templates are compiled once at startup: the full page (`index`), the
//! list fragment (`items`) and a single row (`item`). `index` and `items`
//! pull the smaller ones in as partials, so a row looks the same whether it
//! arrives with the page or as an htmx swap.

use liquid::partials::{EagerCompiler, InMemorySource};
use serde::Serialize;
use trolley_core::{Items, LocalDateTime, ShoppingItem};

use super::error::AppError;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.liquid");
const ITEMS_TEMPLATE: &str = include_str!("../../templates/items.liquid");
const ITEM_TEMPLATE: &str = include_str!("../../templates/item.liquid");

/// Compiled page and fragment templates.
pub struct Views {
    index: liquid::Template,
    items: liquid::Template,
    item: liquid::Template,
}

#[derive(Serialize)]
struct ItemContext {
    id: String,
    description: String,
    complete: bool,
    added: String,
}

impl From<&ShoppingItem> for ItemContext {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id.to_string(),
            description: item.description.clone(),
            complete: item.complete,
            added: LocalDateTime(&item.created_at).to_string(),
        }
    }
}

#[derive(Serialize)]
struct ListContext {
    items: Vec<ItemContext>,
    total: usize,
    completed: usize,
}

impl From<&Items> for ListContext {
    fn from(items: &Items) -> Self {
        Self {
            items: items.iter().map(ItemContext::from).collect(),
            total: items.len(),
            completed: items.completed(),
        }
    }
}

#[derive(Serialize)]
struct SingleContext {
    item: ItemContext,
}

impl Views {
    /// Parses every template, failing on the first syntax error.
    pub fn new() -> Result<Self, liquid::Error> {
        let mut partials = InMemorySource::new();
        partials.add("item", ITEM_TEMPLATE);
        partials.add("items", ITEMS_TEMPLATE);

        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(EagerCompiler::new(partials))
            .build()?;

        Ok(Self {
            index: parser.parse(INDEX_TEMPLATE)?,
            items: parser.parse(ITEMS_TEMPLATE)?,
            item: parser.parse(ITEM_TEMPLATE)?,
        })
    }

    /// The full page.
    pub fn index(&self, items: &Items) -> Result<String, AppError> {
        render(&self.index, &ListContext::from(items))
    }

    /// The `<li>` rows for a list, without the surrounding page.
    pub fn items(&self, items: &Items) -> Result<String, AppError> {
        render(&self.items, &ListContext::from(items))
    }

    /// A single `<li>` row.
    pub fn item(&self, item: &ShoppingItem) -> Result<String, AppError> {
        render(
            &self.item,
            &SingleContext {
                item: ItemContext::from(item),
            },
        )
    }
}

fn render<T: Serialize>(template: &liquid::Template, context: &T) -> Result<String, AppError> {
    let globals = liquid::to_object(context).map_err(|e| AppError::Template(e.to_string()))?;
    template
        .render(&globals)
        .map_err(|e| AppError::Template(e.to_string()))
}
