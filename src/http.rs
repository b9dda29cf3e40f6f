//! HTTP transport for the directory.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /`: list contacts.
//! - `GET /:id`: retrieve one contact.
//! - `POST /create`: create from a form-encoded `name`/`phone` body.
//! - `POST /:id/update`: update from a form-encoded body.
//! - `POST /:id/delete`: delete; responds `{}`.
//! - `GET /health`: health check returning `{ "ok": true }`.
//!
//! Failures respond with `{ "message": ... }` and the error's status code.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use contact_directory::{http, Directory, InMemoryBlobStore};
//!
//! let directory = Arc::new(Directory::new(InMemoryBlobStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(directory.clone());
//!
//! // Or serve directly
//! http::serve(directory, "0.0.0.0:3000").await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

use crate::directory::{Directory, DirectoryError};
use crate::record::RecordDraft;
use crate::store::BlobStore;

type Shared<S> = State<Arc<Directory<S>>>;

/// Build an axum `Router` serving the given directory.
pub fn router<S: BlobStore + 'static>(directory: Arc<Directory<S>>) -> Router {
    Router::new()
        .route("/", get(list_handler::<S>))
        .route("/health", get(health_handler))
        .route("/create", post(create_handler::<S>))
        .route("/:id", get(retrieve_handler::<S>))
        .route("/:id/update", post(update_handler::<S>))
        .route("/:id/delete", post(delete_handler::<S>))
        .with_state(directory)
}

/// Serve the directory over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: BlobStore + 'static>(
    directory: Arc<Directory<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(directory);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

fn respond<T: serde::Serialize>(result: Result<T, DirectoryError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => {
            if matches!(e, DirectoryError::Store(_)) {
                warn!(error = %e, "store failure");
            }
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "message": e.to_string() }))).into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn list_handler<S: BlobStore + 'static>(State(directory): Shared<S>) -> Response {
    respond(directory.list().await)
}

async fn retrieve_handler<S: BlobStore + 'static>(
    State(directory): Shared<S>,
    Path(id): Path<String>,
) -> Response {
    respond(directory.retrieve(&id).await)
}

async fn create_handler<S: BlobStore + 'static>(
    State(directory): Shared<S>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    respond(directory.create(RecordDraft::from_form(&form)).await)
}

async fn update_handler<S: BlobStore + 'static>(
    State(directory): Shared<S>,
    Path(id): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    respond(directory.update(&id, RecordDraft::from_form(&form)).await)
}

async fn delete_handler<S: BlobStore + 'static>(
    State(directory): Shared<S>,
    Path(id): Path<String>,
) -> Response {
    respond(directory.delete(&id).await.map(|()| json!({})))
}
