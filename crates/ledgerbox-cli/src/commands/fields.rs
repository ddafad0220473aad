//! Fields command - list the output fields of a model.

use clap::Args;
use console::style;

use ledgerbox_core::{describe_fields, output_fields, DisplayType};

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Processing model (invoice, receipt, bankstatement)
    model: String,

    /// Include the envelope fields (id, status, jobId, model)
    #[arg(long)]
    all: bool,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: FieldsArgs) -> anyhow::Result<()> {
    let fields = if args.all {
        output_fields(&args.model)
    } else {
        describe_fields(&args.model)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    if fields.is_empty() {
        eprintln!(
            "{} No fields known for model {:?}",
            style("ℹ").blue(),
            args.model
        );
        return Ok(());
    }

    let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in &fields {
        let kind = match field.field_type {
            DisplayType::Number => "number",
            DisplayType::String => "string",
        };
        println!("{:width$}  {}", field.name, kind, width = width);
    }

    Ok(())
}
