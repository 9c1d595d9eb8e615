//! Rule-based field extractors for receipts.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod merchant;
pub mod patterns;

pub use amounts::{parse_amount, AmountExtractor, TaxExtractor};
pub use dates::{parse_date, DateExtractor};
pub use items::LineItemExtractor;
pub use merchant::MerchantExtractor;
pub use patterns::*;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidates, best first.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// First match of each pattern, in pattern order, parsed by `parse`.
///
/// Only the first match of a pattern is considered; when it fails to parse
/// the pattern is skipped rather than retried on later matches.
pub(crate) fn first_match_per_pattern<T>(
    patterns: &[Regex],
    text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Vec<ExtractionMatch<T>> {
    patterns
        .iter()
        .filter_map(|pattern| {
            let caps = pattern.captures(text)?;
            let group = caps.get(1)?;
            let value = parse(group.as_str())?;
            let full = caps.get(0)?;
            Some(ExtractionMatch::new(value, full.as_str()).with_position(full.start(), full.end()))
        })
        .collect()
}
