//! Error types for the receipt-core library.

use thiserror::Error;

/// Main error type for the receipt library.
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// The caller did not supply a vendor credential.
    #[error("API key is required")]
    MissingApiKey,

    /// The OCR vendor call failed.
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while talking to the OCR vendor.
#[derive(Error, Debug)]
pub enum VendorError {
    /// The vendor answered with a non-success status.
    #[error("{vendor} API error: {body}")]
    Status {
        vendor: String,
        status: u16,
        body: String,
    },

    /// The vendor could not be reached (connect failure, timeout, reset).
    #[error("Error communicating with {vendor}: {message}")]
    Transport { vendor: String, message: String },

    /// The vendor answered 2xx but the body could not be understood.
    #[error("Error communicating with {vendor}: invalid response: {message}")]
    InvalidResponse { vendor: String, message: String },
}

impl VendorError {
    /// Status code reported by the vendor, if it got that far.
    pub fn vendor_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for the receipt library.
pub type Result<T> = std::result::Result<T, ReceiptError>;
