//! Output formatting shared by `scan` and `extract`.

use std::fs;
use std::path::Path;

use console::style;
use receipt_core::ReceiptData;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (same shape as the HTTP API)
    Json,
    /// CSV of line items
    Csv,
    /// Plain text summary
    Text,
}

pub fn format_receipt(receipt: &ReceiptData, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
        OutputFormat::Csv => format_csv(receipt),
        OutputFormat::Text => Ok(format_text(receipt)),
    }
}

/// Print to stdout or write to `output`.
pub fn write_output(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} Output written to {}", style("✓").green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn format_csv(receipt: &ReceiptData) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["merchant", "date", "name", "price"])?;

    let merchant = receipt.merchant.clone().unwrap_or_default();
    let date = receipt.date.map(|d| d.to_string()).unwrap_or_default();

    for item in &receipt.items {
        wtr.write_record([
            merchant.as_str(),
            date.as_str(),
            item.name.as_str(),
            item.price.to_string().as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(receipt: &ReceiptData) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Merchant: {}\n",
        receipt.merchant.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Date:     {}\n",
        receipt.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Total:    {}\n",
        receipt.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
    ));

    if !receipt.items.is_empty() {
        output.push_str("\nItems:\n");
        for item in &receipt.items {
            output.push_str(&format!("  {:<30} {:>10}\n", item.name, item.price));
        }
        output.push_str(&format!("  {:<30} {:>10}\n", "(sum)", receipt.items_total()));
    }

    output
}
