//! Route handlers.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use receipt_core::{Document, ReceiptData, ReceiptService, ServerConfig};

use crate::error::ApiError;

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReceiptService>,
}

impl AppState {
    pub fn new(service: ReceiptService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/ocr", post(process_receipt))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

#[derive(Serialize)]
struct StatusMessage {
    message: &'static str,
}

/// Handler for `GET /`.
async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Receipt OCR API is running",
    })
}

/// Handler for `POST /ocr`.
async fn process_receipt(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ReceiptData>, ApiError> {
    let mut document: Option<Document> = None;
    let mut api_key = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;

                let mut doc = Document::new(bytes.to_vec());
                doc.content_type = content_type;
                doc.file_name = file_name;
                document = Some(doc);
            }
            Some("api_key") => {
                api_key = field.text().await?;
            }
            other => {
                debug!(field = ?other, "ignoring unknown form field");
            }
        }
    }

    let document = document.ok_or(ApiError::MissingField("file"))?;
    let receipt = state.service.process(&document, &api_key).await?;

    Ok(Json(receipt))
}
