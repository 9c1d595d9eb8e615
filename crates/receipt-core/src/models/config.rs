//! Configuration structures for the receipt service.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ReceiptError, Result};

/// Main configuration for the receipt service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// OCR vendor configuration.
    pub vendor: VendorConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, e.g. "0.0.0.0:8000".
    pub bind: String,

    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,

    /// Allow cross-origin requests from any origin.
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
            permissive_cors: true,
        }
    }
}

/// OCR vendor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorConfig {
    /// Vendor name used in error messages.
    pub name: String,

    /// Document OCR endpoint.
    pub endpoint: String,

    /// Processing mode flag sent with every document.
    pub mode: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            name: "Mistral".to_string(),
            endpoint: "https://api.mistral.ai/v1/document/ocr".to_string(),
            mode: "detailed".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Receipt field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How many leading lines are candidates for the merchant name.
    pub merchant_scan_lines: usize,

    /// Header line that is never taken as the merchant.
    pub header_line: String,

    /// Item names (compared case-insensitively) that are never line items.
    pub excluded_item_names: Vec<String>,

    /// Append a synthetic "Tax" item when a labeled tax amount is found.
    pub append_tax_item: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            merchant_scan_lines: 3,
            header_line: "RECEIPT".to_string(),
            excluded_item_names: ["total", "subtotal", "tax", "amount"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            append_tax_item: true,
        }
    }
}

impl ReceiptConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ReceiptError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ReceiptError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
