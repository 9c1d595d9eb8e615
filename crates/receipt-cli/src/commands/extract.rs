//! Extract command - run field extraction on OCR text.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use receipt_core::ReceiptParser;

use super::load_config;
use super::output::{format_receipt, write_output, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file with OCR output, or "-" for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;

    info!("Extracting fields from {} characters of text", text.len());

    let receipt = ReceiptParser::from_config(&config.extraction).parse(&text);

    let output = format_receipt(&receipt, args.format)?;
    write_output(&output, args.output.as_deref())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {}", input, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocr.txt");
        std::fs::write(&path, "Shop\nTotal: $1.00").unwrap();

        assert_eq!(read_input(path.to_str().unwrap()).unwrap(), "Shop\nTotal: $1.00");
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input("/nonexistent/receipt/ocr.txt").is_err());
    }
}
