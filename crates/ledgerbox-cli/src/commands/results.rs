//! Results command - fetch a job export and normalize it.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use ledgerbox_core::{normalize, DocumentModel};

use crate::client::LedgerBoxClient;
use crate::output::{format_envelope, OutputFormat};

use super::config::load_config;

/// Arguments for the results command.
#[derive(Args)]
pub struct ResultsArgs {
    /// Job ID returned by the upload command
    #[arg(required = true)]
    job_id: String,

    /// Model the file was processed with
    #[arg(short, long, value_parser = super::parse_model)]
    model: DocumentModel,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ResultsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let client = LedgerBoxClient::new(&config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching results for {}...", args.job_id));

    let raw = client.fetch_job_result(&args.job_id).await;
    pb.finish_and_clear();
    let raw = raw?;

    let envelope = normalize(args.model, &raw)?;
    debug!("Job {} normalized with {} fields", args.job_id, envelope.fields.len());

    let output = format_envelope(&envelope, args.format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
