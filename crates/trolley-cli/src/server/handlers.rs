//! Request handlers for the shopping list routes.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use trolley_core::params::{AddItem, Id, RenameItem, ReorderItems, SearchItems};

use super::{error::AppError, AppState};

/// Rename form. `name` is optional here so a missing field is reported as a
/// malformed payload rather than a generic extractor rejection.
#[derive(Deserialize)]
pub struct RenameForm {
    name: Option<String>,
}

/// GET / renders the whole page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let items = state.list.shopping_items().await?;
    Ok(Html(state.views.index(&items)?))
}

/// POST /shopping-item adds an item and sends the browser back to the list.
///
/// A request without a form body adds an item with an empty description.
pub async fn add(
    State(state): State<Arc<AppState>>,
    form: Option<Form<AddItem>>,
) -> Result<Redirect, AppError> {
    let params = form.map(|Form(params)| params).unwrap_or_default();
    state.list.add(&params).await?;
    Ok(Redirect::to("/"))
}

/// GET /shopping-item?search= renders the matching rows.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchItems>,
) -> Result<Html<String>, AppError> {
    let results = state.list.search(&params).await?;
    Ok(Html(state.views.items(&results)?))
}

/// POST /shopping-item/sort applies the posted `id` order and renders the
/// full list.
///
/// The body is decoded as raw pairs because `id` repeats. A request without
/// a form body reorders nothing and still renders the list.
pub async fn reorder(
    State(state): State<Arc<AppState>>,
    form: Option<Form<Vec<(String, String)>>>,
) -> Result<Html<String>, AppError> {
    let fields = form.map(|Form(fields)| fields).unwrap_or_default();
    let params = ReorderItems {
        ids: fields
            .into_iter()
            .filter(|(key, _)| key == "id")
            .map(|(_, value)| value)
            .collect(),
    };

    state.list.reorder(&params).await?;
    let items = state.list.shopping_items().await?;
    Ok(Html(state.views.items(&items)?))
}

/// POST /shopping-item/{id}/toggle flips completion and renders the row.
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let item = state.list.toggle_done(&Id::parse(&id)?).await?;
    Ok(Html(state.views.item(&item)?))
}

/// DELETE /shopping-item/{id} removes the item. The empty body lets htmx
/// swap the row away.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.list.delete(&Id::parse(&id)?).await?;
    Ok(StatusCode::OK)
}

/// PATCH /shopping-item/{id} renames the item and renders the row.
pub async fn rename(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<RenameForm>,
) -> Result<Html<String>, AppError> {
    let id = Id::parse(&id)?.id;
    let name = form
        .name
        .ok_or_else(|| AppError::MalformedPayload("missing form field 'name'".to_string()))?;

    let item = state.list.rename(&RenameItem { id, name }).await?;
    Ok(Html(state.views.item(&item)?))
}
