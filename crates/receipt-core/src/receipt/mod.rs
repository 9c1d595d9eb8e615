//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::ReceiptParser;

use crate::models::receipt::ReceiptData;

/// Trait for turning OCR text into receipt fields.
///
/// Extraction never fails: fields that cannot be found are left empty.
pub trait TextExtractor: Send + Sync {
    /// Extract receipt data from plain text.
    fn extract_from_text(&self, text: &str) -> ReceiptData;
}
