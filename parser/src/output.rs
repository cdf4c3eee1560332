//! Output formatting for parse outcomes.

use curl_schema_core::{ParamValue, ParseOutcome};
use std::collections::BTreeMap;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

/// Formats one parse outcome in the requested output format.
pub fn format_outcome(outcome: &ParseOutcome, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcome)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(outcome).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(outcome_to_text(outcome)),
    }
}

/// Formats several outcomes parsed from one input file.
///
/// JSON and YAML render an array; text renders consecutive blocks separated
/// by a blank line.
pub fn format_outcomes(outcomes: &[ParseOutcome], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcomes)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(outcomes).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(outcome_to_text)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn outcome_to_text(outcome: &ParseOutcome) -> String {
    let parsed = &outcome.parsed;
    let mut out = String::new();

    out.push_str(&format!("URL: {}\n", parsed.url));
    out.push_str(&format!("Method: {}\n", parsed.method));

    if let Some(ref params) = parsed.params {
        out.push_str("\nQuery parameters:\n");
        for (key, value) in params {
            match value {
                ParamValue::Single(v) => out.push_str(&format!("  {key}: {v}\n")),
                ParamValue::Many(vs) => out.push_str(&format!("  {key}: {}\n", vs.join(", "))),
            }
        }
    }

    if let Some(ref headers) = parsed.headers {
        push_section(&mut out, "Headers", headers);
    }
    if let Some(ref cookies) = parsed.cookies {
        push_section(&mut out, "Cookies", cookies);
    }
    if let Some(ref data) = parsed.data {
        out.push_str(&format!("\nBody:\n{data}\n"));
    }

    if !outcome.unresolved.is_empty() {
        out.push_str("\nUnresolved:\n");
        for (key, values) in &outcome.unresolved {
            out.push_str(&format!("  {key}: {}\n", values.join(" ")));
        }
    }

    out
}

fn push_section(out: &mut String, title: &str, entries: &BTreeMap<String, String>) {
    out.push_str(&format!("\n{title}:\n"));
    for (key, value) in entries {
        out.push_str(&format!("  {key}: {value}\n"));
    }
}
