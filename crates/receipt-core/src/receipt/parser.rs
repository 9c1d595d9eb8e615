//! Rule-based receipt parser.

use std::time::Instant;

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::receipt::{LineItem, ReceiptData};

use super::rules::{
    AmountExtractor, DateExtractor, FieldExtractor, LineItemExtractor, MerchantExtractor,
    TaxExtractor,
};
use super::TextExtractor;

/// Receipt parser applying each field rule independently.
pub struct ReceiptParser {
    merchant: MerchantExtractor,
    dates: DateExtractor,
    amounts: AmountExtractor,
    items: LineItemExtractor,
    tax: TaxExtractor,
    append_tax_item: bool,
}

impl ReceiptParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            merchant: MerchantExtractor::new()
                .with_scan_lines(config.merchant_scan_lines)
                .with_header_line(config.header_line.clone()),
            dates: DateExtractor::new(),
            amounts: AmountExtractor::new(),
            items: LineItemExtractor::new().with_excluded_names(&config.excluded_item_names),
            tax: TaxExtractor::new(),
            append_tax_item: config.append_tax_item,
        }
    }

    /// Set whether a labeled tax amount is appended as a "Tax" item.
    pub fn with_tax_item(mut self, append: bool) -> Self {
        self.append_tax_item = append;
        self
    }

    /// Parse receipt fields from OCR text.
    pub fn parse(&self, text: &str) -> ReceiptData {
        let start = Instant::now();

        let merchant = self.merchant.extract(text).map(|m| m.value);

        let date = self.dates.extract(text).map(|m| {
            debug!(source = %m.source, date = %m.value, "matched date");
            m.value
        });

        let amount = self.amounts.extract(text).map(|m| {
            debug!(source = %m.source, amount = %m.value, "matched total");
            m.value
        });

        let mut items: Vec<LineItem> = self
            .items
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect();

        if self.append_tax_item {
            if let Some(tax) = self.tax.extract(text) {
                debug!(source = %tax.source, "appending tax item");
                items.push(LineItem::new("Tax", tax.value));
            }
        }

        debug!(
            merchant = merchant.is_some(),
            date = date.is_some(),
            amount = amount.is_some(),
            items = items.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "parsed receipt text"
        );

        ReceiptData {
            merchant,
            date,
            amount,
            items,
            raw_text: text.to_string(),
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for ReceiptParser {
    fn extract_from_text(&self, text: &str) -> ReceiptData {
        self.parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_basic_receipt() {
        let text = "RECEIPT\nCorner Cafe\nDate: 03/04/23\nCoffee....$3.50\nBagel   $2.25\nTax: $0.50\nTotal: $6.25";

        let receipt = ReceiptParser::new().parse(text);

        assert_eq!(receipt.merchant.as_deref(), Some("Corner Cafe"));
        assert_eq!(receipt.date, NaiveDate::from_ymd_opt(2023, 3, 4));
        assert_eq!(receipt.amount, Some(dec("6.25")));
        assert_eq!(
            receipt.items,
            vec![
                LineItem::new("Coffee", dec("3.50")),
                LineItem::new("Bagel", dec("2.25")),
                LineItem::new("Tax", dec("0.50")),
            ]
        );
        assert_eq!(receipt.raw_text, text);
    }

    #[test]
    fn test_empty_text() {
        let receipt = ReceiptParser::new().parse("");
        assert!(receipt.is_empty());
        assert_eq!(receipt.raw_text, "");
    }

    #[test]
    fn test_tax_item_without_other_items() {
        let receipt = ReceiptParser::new().parse("Tax: $1.20");
        assert_eq!(receipt.items, vec![LineItem::new("Tax", dec("1.20"))]);
    }

    #[test]
    fn test_tax_item_can_be_disabled() {
        let receipt = ReceiptParser::new().with_tax_item(false).parse("Tax: $1.20");
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = ExtractionConfig {
            header_line: "INVOICE".to_string(),
            ..ExtractionConfig::default()
        };
        let receipt = ReceiptParser::from_config(&config).parse("INVOICE\nHardware Store");
        assert_eq!(receipt.merchant.as_deref(), Some("Hardware Store"));
    }
}
