//! HTTP server for the shopping list.
//!
//! Routes map one-to-one onto [`ShoppingList`] operations. Full-page requests
//! get the whole document; htmx requests get the fragment they swap in.
//!
//! | Method | Path                        | Response                    |
//! |--------|-----------------------------|-----------------------------|
//! | GET    | `/`                         | full page                   |
//! | POST   | `/shopping-item`            | 303 redirect to `/`         |
//! | GET    | `/shopping-item?search=`    | matching rows               |
//! | POST   | `/shopping-item/sort`       | all rows in the new order   |
//! | POST   | `/shopping-item/:id/toggle` | updated row                 |
//! | DELETE | `/shopping-item/:id`        | empty 200                   |
//! | PATCH  | `/shopping-item/:id`        | updated row                 |
//! | GET    | `/static/*path`             | embedded asset              |

use std::{net::SocketAddr, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use axum::{
    extract::{ConnectInfo, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, patch, post},
    Router,
};
use log::info;
use tokio::{net::TcpListener, signal};
use trolley_core::ShoppingList;

pub mod assets;
pub mod error;
pub mod handlers;
pub mod views;

use views::Views;

/// Shared state handed to every handler.
pub struct AppState {
    pub list: ShoppingList,
    pub views: Views,
}

impl AppState {
    /// Compiles the templates and wraps everything for sharing.
    pub fn new(list: ShoppingList) -> Result<Arc<Self>> {
        let views = Views::new().context("Failed to compile templates")?;
        Ok(Arc::new(Self { list, views }))
    }
}

/// Builds the application router with request logging.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/shopping-item", post(handlers::add).get(handlers::search))
        .route("/shopping-item/sort", post(handlers::reorder))
        .route("/shopping-item/:id/toggle", post(handlers::toggle))
        .route(
            "/shopping-item/:id",
            patch(handlers::rename).delete(handlers::delete),
        )
        .route("/static/*path", get(assets::static_file))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Binds `addr` and serves until Ctrl+C or SIGTERM.
pub async fn serve(list: ShoppingList, addr: SocketAddr) -> Result<()> {
    info!("Using database at {}", list.database_path().display());
    let app = router(AppState::new(list)?);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!("Started {method} {path} from {remote}");
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "Completed {method} {path} with {} in {:?}",
        response.status().as_u16(),
        start.elapsed()
    );
    response
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;
    use trolley_core::{params::AddItem, ShoppingItem, ShoppingListBuilder};

    use super::*;

    const FORM: &str = "application/x-www-form-urlencoded";

    async fn create_test_app() -> (TempDir, ShoppingList, Router) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let list = ShoppingListBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .build()
            .await
            .expect("Failed to create list");
        let app = router(AppState::new(list.clone()).expect("Failed to build state"));
        (temp_dir, list, app)
    }

    async fn add(list: &ShoppingList, description: &str) -> ShoppingItem {
        list.add(&AddItem {
            description: description.to_string(),
        })
        .await
        .expect("Failed to add item")
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        form: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, FORM);
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .expect("Request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_items() {
        let (_temp_dir, list, app) = create_test_app().await;
        add(&list, "Porridge oats").await;

        let (status, body) = send(&app, Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<html"));
        assert!(body.contains("Porridge oats"));
    }

    #[tokio::test]
    async fn test_add_redirects_home() {
        let (_temp_dir, list, app) = create_test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/shopping-item")
                    .header(header::CONTENT_TYPE, FORM)
                    .body(Body::from("description=Brown+rice"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let items = list.shopping_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Brown rice");
        assert!(!items[0].complete);
    }

    #[tokio::test]
    async fn test_search_returns_fragment() {
        let (_temp_dir, list, app) = create_test_app().await;
        add(&list, "Soy Milk").await;
        add(&list, "Bagels").await;

        let (status, body) = send(&app, Method::GET, "/shopping-item?search=MILK", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Soy Milk"));
        assert!(!body.contains("Bagels"));
        assert!(!body.contains("<html"));
    }

    #[tokio::test]
    async fn test_search_without_query_lists_everything() {
        let (_temp_dir, list, app) = create_test_app().await;
        add(&list, "Soy Milk").await;
        add(&list, "Bagels").await;

        let (status, body) = send(&app, Method::GET, "/shopping-item", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Soy Milk"));
        assert!(body.contains("Bagels"));
    }

    #[tokio::test]
    async fn test_toggle_renders_checked_row() {
        let (_temp_dir, list, app) = create_test_app().await;
        let item = add(&list, "Lentils").await;

        let uri = format!("/shopping-item/{}/toggle", item.id);
        let (status, body) = send(&app, Method::POST, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("checked"));
        assert!(list.shopping_items().await.unwrap()[0].complete);
    }

    #[tokio::test]
    async fn test_toggle_malformed_id_is_bad_request() {
        let (_temp_dir, _list, app) = create_test_app().await;

        let (status, body) = send(&app, Method::POST, "/shopping-item/nope/toggle", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("nope"));
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_not_found() {
        let (_temp_dir, _list, app) = create_test_app().await;

        let uri = format!("/shopping-item/{}/toggle", uuid::Uuid::new_v4());
        let (status, body) = send(&app, Method::POST, &uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));
    }

    #[tokio::test]
    async fn test_rename_renders_updated_row() {
        let (_temp_dir, list, app) = create_test_app().await;
        let item = add(&list, "Chedar").await;

        let uri = format!("/shopping-item/{}", item.id);
        let (status, body) = send(&app, Method::PATCH, &uri, Some("name=Cheddar")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("value=\"Cheddar\""));
        assert_eq!(list.shopping_items().await.unwrap()[0].description, "Cheddar");
    }

    #[tokio::test]
    async fn test_rename_without_name_is_bad_request() {
        let (_temp_dir, list, app) = create_test_app().await;
        let item = add(&list, "Cumin").await;

        let uri = format!("/shopping-item/{}", item.id);
        let (status, _body) = send(&app, Method::PATCH, &uri, Some("other=x")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(list.shopping_items().await.unwrap()[0].description, "Cumin");
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let (_temp_dir, list, app) = create_test_app().await;
        let item = add(&list, "Capers").await;

        let uri = format!("/shopping-item/{}", item.id);
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert!(list.shopping_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let (_temp_dir, list, app) = create_test_app().await;
        add(&list, "Olives").await;

        let uri = format!("/shopping-item/{}", uuid::Uuid::new_v4());
        let (status, _body) = send(&app, Method::DELETE, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.shopping_items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sort_applies_posted_order() {
        let (_temp_dir, list, app) = create_test_app().await;
        let a = add(&list, "Alpha").await;
        let b = add(&list, "Bravo").await;
        let c = add(&list, "Charlie").await;

        let form = format!("id={}&id={}&id={}", b.id, a.id, c.id);
        let (status, body) = send(&app, Method::POST, "/shopping-item/sort", Some(&form)).await;

        assert_eq!(status, StatusCode::OK);
        let bravo = body.find("Bravo").unwrap();
        let alpha = body.find("Alpha").unwrap();
        let charlie = body.find("Charlie").unwrap();
        assert!(bravo < alpha && alpha < charlie);

        let ids: Vec<_> = list
            .shopping_items()
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![b.id, a.id, c.id]);
    }

    #[tokio::test]
    async fn test_sort_with_malformed_id_is_rejected() {
        let (_temp_dir, list, app) = create_test_app().await;
        let a = add(&list, "Alpha").await;
        let b = add(&list, "Bravo").await;

        let form = format!("id={}&id=garbage&id={}", b.id, a.id);
        let (status, _body) = send(&app, Method::POST, "/shopping-item/sort", Some(&form)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let items = list.shopping_items().await.unwrap();
        assert_eq!(items[0].id, a.id);
        assert_eq!(items[1].id, b.id);
    }

    #[tokio::test]
    async fn test_sort_without_body_renders_list() {
        let (_temp_dir, list, app) = create_test_app().await;
        let a = add(&list, "Alpha").await;
        let b = add(&list, "Bravo").await;

        let (status, body) = send(&app, Method::POST, "/shopping-item/sort", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.find("Alpha").unwrap() < body.find("Bravo").unwrap());
        let items = list.shopping_items().await.unwrap();
        assert_eq!(items[0].id, a.id);
        assert_eq!(items[1].id, b.id);
    }

    #[tokio::test]
    async fn test_add_without_body_adds_empty_item() {
        let (_temp_dir, list, app) = create_test_app().await;

        let (status, _body) = send(&app, Method::POST, "/shopping-item", None).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        let items = list.shopping_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "");
    }

    #[tokio::test]
    async fn test_static_asset_served_with_mime_type() {
        let (_temp_dir, _list, app) = create_test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/static/styles.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn test_missing_static_asset_is_not_found() {
        let (_temp_dir, _list, app) = create_test_app().await;

        let (status, _body) = send(&app, Method::GET, "/static/missing.js", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
