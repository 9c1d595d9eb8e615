//! Receipt service: vendor OCR followed by field extraction.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::error::{ReceiptError, Result};
use crate::models::receipt::{Document, ReceiptData};
use crate::receipt::TextExtractor;
use crate::vendor::OcrVendor;

/// Runs one document through the vendor and the extractor.
///
/// Holds no per-request state, so one instance is shared by all requests.
pub struct ReceiptService {
    vendor: Arc<dyn OcrVendor>,
    extractor: Arc<dyn TextExtractor>,
}

impl ReceiptService {
    pub fn new(vendor: Arc<dyn OcrVendor>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { vendor, extractor }
    }

    /// Name of the configured vendor.
    pub fn vendor_name(&self) -> &str {
        self.vendor.name()
    }

    /// OCR `document` with the caller's `api_key` and extract receipt fields.
    ///
    /// An empty key is rejected before the vendor is contacted.
    pub async fn process(&self, document: &Document, api_key: &str) -> Result<ReceiptData> {
        if api_key.is_empty() {
            return Err(ReceiptError::MissingApiKey);
        }

        let start = Instant::now();
        info!(
            vendor = self.vendor.name(),
            file = document.file_name.as_deref().unwrap_or("<unnamed>"),
            bytes = document.bytes.len(),
            "Processing receipt"
        );

        let raw_text = self.vendor.recognize(document, api_key).await.inspect_err(|e| {
            warn!(error = %e, "OCR vendor call failed");
        })?;

        let receipt = self.extractor.extract_from_text(&raw_text);
        if receipt.is_empty() {
            warn!("No receipt fields found in OCR text");
        }

        info!(
            items = receipt.items.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Receipt processed"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VendorError;
    use crate::receipt::ReceiptParser;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Vendor double that counts calls and replays a canned outcome.
    struct FakeVendor {
        calls: AtomicUsize,
        status: Option<u16>,
        text: String,
    }

    impl FakeVendor {
        fn ok(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                status: None,
                text: text.to_string(),
            }
        }

        fn failing(status: u16, body: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                status: Some(status),
                text: body.to_string(),
            }
        }
    }

    #[async_trait]
    impl OcrVendor for FakeVendor {
        fn name(&self) -> &str {
            "Fake"
        }

        async fn recognize(&self, _document: &Document, _api_key: &str) -> std::result::Result<String, VendorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.status {
                Some(status) => Err(VendorError::Status {
                    vendor: "Fake".to_string(),
                    status,
                    body: self.text.clone(),
                }),
                None => Ok(self.text.clone()),
            }
        }
    }

    fn service(vendor: Arc<FakeVendor>) -> ReceiptService {
        ReceiptService::new(vendor, Arc::new(ReceiptParser::new()))
    }

    #[tokio::test]
    async fn test_missing_api_key_never_calls_vendor() {
        let vendor = Arc::new(FakeVendor::ok("Shop"));
        let svc = service(vendor.clone());

        let err = svc.process(&Document::new(vec![1]), "").await.unwrap_err();

        assert!(matches!(err, ReceiptError::MissingApiKey));
        assert_eq!(vendor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_extracts_fields() {
        let vendor = Arc::new(FakeVendor::ok("Corner Cafe\nTotal: $12.50"));
        let svc = service(vendor.clone());

        let receipt = svc.process(&Document::new(vec![1]), "key").await.unwrap();

        assert_eq!(receipt.merchant.as_deref(), Some("Corner Cafe"));
        assert_eq!(receipt.amount.map(|a| a.to_string()), Some("12.50".to_string()));
        assert_eq!(receipt.raw_text, "Corner Cafe\nTotal: $12.50");
        assert_eq!(vendor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_vendor_error_passes_through() {
        let vendor = Arc::new(FakeVendor::failing(429, "rate limited"));
        let svc = service(vendor);

        let err = svc.process(&Document::new(vec![1]), "key").await.unwrap_err();

        match err {
            ReceiptError::Vendor(v) => {
                assert_eq!(v.vendor_status(), Some(429));
                assert!(v.to_string().contains("rate limited"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
