//! Rendering of normalized envelopes as JSON, CSV, or plain text.

use console::style;
use serde_json::Value;

use ledgerbox_core::models::status::{status_color, StatusColor};
use ledgerbox_core::Envelope;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row, nested lists as JSON)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_envelope(envelope: &Envelope, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(envelope)?),
        OutputFormat::Json => Ok(serde_json::to_string(envelope)?),
        OutputFormat::Csv => format_csv(envelope),
        OutputFormat::Text => Ok(format_text(envelope)),
    }
}

fn format_csv(envelope: &Envelope) -> anyhow::Result<String> {
    let value = envelope.to_value();
    let object = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("envelope is not an object"))?;

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(object.keys())?;
    wtr.write_record(object.values().map(cell))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn format_text(envelope: &Envelope) -> String {
    let mut output = String::new();

    if let Some(job_id) = &envelope.job_id {
        output.push_str(&format!("Job: {}\n", job_id));
    }
    if let Some(status) = &envelope.status {
        let styled = match status_color(status) {
            StatusColor::Positive => style(status).green(),
            StatusColor::Destructive => style(status).red(),
            StatusColor::Muted => style(status).dim(),
        };
        output.push_str(&format!("Status: {}\n", styled));
    }
    output.push_str(&format!("Model: {}\n", envelope.model));

    if envelope.fields.is_empty() {
        output.push_str("\n(no fields extracted)\n");
        return output;
    }

    output.push('\n');
    for (name, value) in &envelope.fields {
        match value {
            Value::Array(items) if items.is_empty() => {
                output.push_str(&format!("{}: (none)\n", name));
            }
            Value::Array(items) => {
                output.push_str(&format!("{}:\n", name));
                for item in items {
                    output.push_str(&format!("  - {}\n", inline(item)));
                }
            }
            other => output.push_str(&format!("{}: {}\n", name, cell(other))),
        }
    }

    output
}

fn inline(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, cell(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => cell(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerbox_core::{normalize, sample, DocumentModel};

    fn invoice_envelope() -> Envelope {
        normalize(DocumentModel::Invoice, &sample(DocumentModel::Invoice)).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let csv = format_envelope(&invoice_envelope(), OutputFormat::Csv, false).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,status,jobId,model,CustomerName"));
        assert!(lines[1].starts_with("job-12345,success,job-12345,invoice,ACME Corporation"));
    }

    #[test]
    fn test_text_lists_line_items() {
        let text = format_envelope(&invoice_envelope(), OutputFormat::Text, false).unwrap();

        assert!(text.contains("Job: job-12345"));
        assert!(text.contains("Model: invoice"));
        assert!(text.contains("LineItems:\n  - Items: Product A, Amount: 500.0, Quantity: 5"));
    }

    #[test]
    fn test_compact_json() {
        let json = format_envelope(&invoice_envelope(), OutputFormat::Json, false).unwrap();
        assert!(json.starts_with(r#"{"id":"job-12345","status":"success""#));
    }
}
