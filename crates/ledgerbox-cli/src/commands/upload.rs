//! Upload command - send a document to LedgerBox for processing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use ledgerbox_core::DocumentModel;

use crate::client::{LedgerBoxClient, UploadFile};

use super::config::load_config;

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// File to upload (PDF, JPEG or PNG)
    #[arg(required = true)]
    file: PathBuf,

    /// Processing model
    #[arg(short, long, value_parser = super::parse_model)]
    model: DocumentModel,

    /// Filename sent to the API (default: the file's name)
    #[arg(long)]
    filename: Option<String>,

    /// MIME type (default: inferred from the extension)
    #[arg(long)]
    content_type: Option<String>,
}

pub async fn run(args: UploadArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.file.exists() {
        anyhow::bail!("Input file not found: {}", args.file.display());
    }

    let file = UploadFile::from_path(&args.file, args.filename, args.content_type, &config.upload)?;
    let client = LedgerBoxClient::new(&config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Uploading {}...", file.filename));

    let response = client.upload(file, args.model).await;
    pb.finish_and_clear();
    let response = response?;

    println!("{}", serde_json::to_string_pretty(response.body())?);
    match response.job_id() {
        Some(job_id) => eprintln!(
            "{} {} - fetch results with 'ledgerbox results {} --model {}'",
            style("✓").green(),
            response.message().filter(|m| !m.is_empty()).unwrap_or("Uploaded"),
            job_id,
            args.model
        ),
        None => warn!("Upload accepted but the response carries no jobId"),
    }

    Ok(())
}
