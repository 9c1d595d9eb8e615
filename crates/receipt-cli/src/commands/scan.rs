//! Scan command - OCR a single receipt file through the vendor.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use tracing::{debug, info};

use receipt_core::{Document, MistralClient, ReceiptParser, ReceiptService};

use super::load_config;
use super::output::{format_receipt, write_output, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Receipt file (image or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Vendor API key
    #[arg(long, env = "RECEIPT_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning file: {}", args.input.display());

    let bytes = fs::read(&args.input)?;
    let mut document = Document::new(bytes);
    if let Some(ext) = args.input.extension().and_then(|e| e.to_str()) {
        if let Some(mime) = Document::content_type_for_extension(ext) {
            document = document.with_content_type(mime);
        }
    }
    if let Some(name) = args.input.file_name().and_then(|n| n.to_str()) {
        document = document.with_file_name(name);
    }

    let vendor = MistralClient::new(&config.vendor)?;
    let parser = ReceiptParser::from_config(&config.extraction);
    let service = ReceiptService::new(Arc::new(vendor), Arc::new(parser));

    let receipt = service.process(&document, &args.api_key).await?;

    let output = format_receipt(&receipt, args.format)?;
    write_output(&output, args.output.as_deref())?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
