//! Normalize command - validate saved job exports offline.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use glob::glob;
use serde_json::Value;
use tracing::{debug, error, warn};

use ledgerbox_core::{normalize, DocumentModel, Envelope};

use crate::output::{format_envelope, OutputFormat};

use super::config::load_config;

/// Arguments for the normalize command.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Export JSON file, glob pattern, or "-" for stdin
    #[arg(required = true)]
    input: String,

    /// Model the exports were produced with
    #[arg(short, long, value_parser = super::parse_model)]
    model: DocumentModel,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write one output file per input into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: NormalizeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if args.input == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        let envelope = normalize_str(&content, args.model)?;
        println!("{}", format_envelope(&envelope, args.format, config.output.pretty)?);
        return Ok(());
    }

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let mut used_names = HashSet::new();
    let mut failed = 0usize;
    for path in &files {
        let envelope = match normalize_file(path, args.model) {
            Ok(envelope) => envelope,
            Err(e) if args.continue_on_error => {
                warn!("Failed to normalize {}: {}", path.display(), e);
                failed += 1;
                continue;
            }
            Err(e) => {
                error!("Failed to normalize {}: {}", path.display(), e);
                anyhow::bail!("{}: {}", path.display(), e);
            }
        };

        let content = format_envelope(&envelope, args.format, config.output.pretty)?;

        match &args.output_dir {
            Some(output_dir) => {
                let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("result");
                let name = unique_name(stem, args.format.extension(), &mut used_names);
                let output_path = output_dir.join(name);
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
            None => println!("{}", content),
        }
    }

    if files.len() > 1 || failed > 0 {
        eprintln!(
            "{} Normalized {} of {} files",
            if failed == 0 { style("✓").green() } else { style("!").yellow() },
            files.len() - failed,
            files.len()
        );
    }

    Ok(())
}

/// `<stem>.<ext>`, suffixed `-2`, `-3`, ... when an earlier input of the
/// same run already took that name.
fn unique_name(stem: &str, extension: &str, used: &mut HashSet<String>) -> String {
    let mut name = format!("{}.{}", stem, extension);
    let mut n = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}.{}", stem, n, extension);
        n += 1;
    }
    if n > 2 {
        warn!("Output name {}.{} already used, writing {}", stem, extension, name);
    }
    name
}

fn normalize_file(path: &Path, model: DocumentModel) -> anyhow::Result<Envelope> {
    let content = fs::read_to_string(path)?;
    normalize_str(&content, model)
}

fn normalize_str(content: &str, model: DocumentModel) -> anyhow::Result<Envelope> {
    let raw: Value = serde_json::from_str(content)?;
    Ok(normalize(model, &raw)?)
}
