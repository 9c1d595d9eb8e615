//! Merchant name extraction.

use super::{ExtractionMatch, FieldExtractor};

/// Picks the merchant from the top of the receipt.
pub struct MerchantExtractor {
    scan_lines: usize,
    header_line: String,
}

impl MerchantExtractor {
    pub fn new() -> Self {
        Self {
            scan_lines: 3,
            header_line: "RECEIPT".to_string(),
        }
    }

    /// Set how many leading lines are considered.
    pub fn with_scan_lines(mut self, scan_lines: usize) -> Self {
        self.scan_lines = scan_lines;
        self
    }

    /// Set the header line that is skipped.
    pub fn with_header_line(mut self, header_line: impl Into<String>) -> Self {
        self.header_line = header_line.into();
        self
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        text.lines()
            .take(self.scan_lines)
            .map(str::trim)
            .filter(|line| !line.is_empty() && *line != self.header_line)
            .map(|line| ExtractionMatch::new(line.to_string(), line))
            .collect()
    }
}
