//! Receipt data models.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// MIME type used when the upload carries none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Structured data extracted from a receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Merchant name (first meaningful header line).
    pub merchant: Option<String>,

    /// Purchase date.
    pub date: Option<NaiveDate>,

    /// Total amount.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,

    /// Line items in the order they appear in the text.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// OCR text exactly as returned by the vendor.
    #[serde(default)]
    pub raw_text: String,
}

impl ReceiptData {
    /// Check if no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.merchant.is_none() && self.date.is_none() && self.amount.is_none() && self.items.is_empty()
    }

    /// Sum of all item prices, including a synthetic tax item.
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// A single (name, price) entry on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as printed.
    pub name: String,

    /// Item price. The currency is implicit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// An uploaded receipt file.
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw file content.
    pub bytes: Vec<u8>,

    /// MIME type reported by the uploader.
    pub content_type: Option<String>,

    /// Original file name, for logging only.
    pub file_name: Option<String>,
}

impl Document {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
            file_name: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// MIME type to advertise to the vendor.
    pub fn mime_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Encode as `data:<mime>;base64,<payload>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.bytes))
    }

    /// Guess a MIME type from a file extension.
    pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
        match extension.to_lowercase().as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "tif" | "tiff" => Some("image/tiff"),
            "bmp" => Some("image/bmp"),
            "pdf" => Some("application/pdf"),
            _ => None,
        }
    }
}
