//! Sample command - print a representative result for a model.

use clap::Args;

use ledgerbox_core::{sample, DocumentModel};

/// Arguments for the sample command.
#[derive(Args)]
pub struct SampleArgs {
    /// Processing model
    #[arg(value_parser = super::parse_model)]
    model: DocumentModel,
}

pub fn run(args: SampleArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&sample(args.model))?);
    Ok(())
}
