//! Line item extraction.

use tracing::trace;

use crate::models::receipt::LineItem;

use super::amounts::parse_amount;
use super::patterns::ITEM_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Extracts `name ... price` pairs line by line.
///
/// Every item pattern is tried on every line and all of their matches are
/// kept, so one line can yield more than one item.
pub struct LineItemExtractor {
    excluded_names: Vec<String>,
}

impl LineItemExtractor {
    pub fn new() -> Self {
        Self {
            excluded_names: ["total", "subtotal", "tax", "amount"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the names that are never treated as items.
    pub fn with_excluded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_names = names.into_iter().map(|s| s.as_ref().to_lowercase()).collect();
        self
    }

    fn is_excluded(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.excluded_names.iter().any(|excluded| *excluded == name)
    }

    fn extract_line(&self, line: &str, offset: usize, out: &mut Vec<ExtractionMatch<LineItem>>) {
        for pattern in ITEM_PATTERNS.iter() {
            for caps in pattern.captures_iter(line) {
                let name = caps[1].trim();
                if self.is_excluded(name) {
                    trace!(item = name, "skipping summary line");
                    continue;
                }

                let Some(price) = parse_amount(&caps[2]) else {
                    continue;
                };

                let Some(full) = caps.get(0) else {
                    continue;
                };
                out.push(
                    ExtractionMatch::new(LineItem::new(name, price), full.as_str())
                        .with_position(offset + full.start(), offset + full.end()),
                );
            }
        }
    }
}

impl Default for LineItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LineItemExtractor {
    type Output = ExtractionMatch<LineItem>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut items = Vec::new();
        let mut offset = 0;

        for line in text.split_inclusive('\n') {
            self.extract_line(line.trim_end_matches(['\n', '\r']), offset, &mut items);
            offset += line.len();
        }

        items
    }
}
