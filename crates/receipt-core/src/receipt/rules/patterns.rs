//! Regex patterns for receipt field extraction.
//!
//! Each list is ordered by priority; extractors walk them front to back.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dates: labeled forms first, then bare forms.
    pub static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"Date: (\d{1,2}/\d{1,2}/\d{2,4})").unwrap(),
        Regex::new(r"Date: (\d{1,2}-\d{1,2}-\d{2,4})").unwrap(),
        Regex::new(r"Date: (\d{4}-\d{2}-\d{2})").unwrap(),
        Regex::new(r"(\d{1,2}/\d{1,2}/\d{2,4})").unwrap(),
        Regex::new(r"(\d{2}-\d{2}-\d{4})").unwrap(),
    ];

    // Total amount, case-insensitive.
    pub static ref AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)Total: \$?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)TOTAL\s+\$?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)Amount: \$?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)AMOUNT\s+\$?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)Total\s+\$?(\d+\.\d+)").unwrap(),
    ];

    // Line items, applied per line.
    pub static ref ITEM_PATTERNS: Vec<Regex> = vec![
        // Coffee.....$3.50
        Regex::new(r"([A-Za-z0-9\s]+)\.{2,}\s*\$?(\d+\.\d+)").unwrap(),
        // Coffee   $3.50
        Regex::new(r"([A-Za-z0-9\s]+)\s+\$?(\d+\.\d+)").unwrap(),
        // Coffee: $3.50
        Regex::new(r"([A-Za-z0-9\s]+):\s*\$?(\d+\.\d+)").unwrap(),
    ];

    // Labeled tax amount, case-insensitive.
    pub static ref TAX_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)Tax:?\s*\$?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)TAX\s+\$?(\d+\.\d+)").unwrap(),
    ];
}
