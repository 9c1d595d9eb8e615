//! Core library for receipt OCR processing.
//!
//! This crate provides:
//! - A client for the vendor document OCR API (Mistral)
//! - Receipt field extraction (merchant, date, total, line items)
//! - The receipt service tying the two together
//! - Configuration shared by the server and CLI

pub mod error;
pub mod models;
pub mod receipt;
pub mod service;
pub mod vendor;

pub use error::{ReceiptError, Result, VendorError};
pub use models::config::{ExtractionConfig, ReceiptConfig, ServerConfig, VendorConfig};
pub use models::receipt::{Document, LineItem, ReceiptData};
pub use receipt::{ReceiptParser, TextExtractor};
pub use service::ReceiptService;
pub use vendor::{MistralClient, OcrVendor};
