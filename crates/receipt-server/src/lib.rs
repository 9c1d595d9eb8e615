//! HTTP API for receipt OCR.
//!
//! Routes:
//! - `POST /ocr`: multipart upload (`file`, `api_key`) → extracted receipt
//! - `GET /`: liveness message

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{router, AppState};
pub use server::start_server;
