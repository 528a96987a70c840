//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to stdout
//! as a single JSON object, replacing the one-line-per-input output.

use serde::Serialize;

use crate::convert::{Conversion, Converted, Mode};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The conversion direction: `"format"` or `"parse"`.
    pub mode: Mode,

    /// One entry per input, in input order.
    pub results: Vec<JsonResultEntry>,

    /// Aggregated counts.
    pub summary: JsonSummary,
}

/// A single converted input.
#[derive(Debug, Serialize)]
pub struct JsonResultEntry {
    /// The input exactly as given.
    pub input: String,

    /// The converted value.
    pub output: JsonValue,
}

/// A converted value: a string for `format`, a number for `parse`.
///
/// Non-finite parse results have no JSON representation and serialize as
/// `null`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonValue {
    /// Money string
    Text(String),

    /// Parsed number, `None` when not finite
    Number(Option<f64>),
}

/// Aggregated counts across all inputs.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    /// Number of inputs converted.
    pub total: usize,

    /// Number of inputs that formatted to an empty string.
    pub empty: usize,

    /// Number of inputs without a numeric prefix.
    pub not_a_number: usize,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a batch of conversions.
    #[must_use]
    pub fn from_conversions(mode: Mode, conversions: &[Conversion]) -> Self {
        Self {
            mode,
            results: conversions
                .iter()
                .map(JsonResultEntry::from_conversion)
                .collect(),
            summary: JsonSummary::from_conversions(conversions),
        }
    }
}

impl JsonResultEntry {
    /// Convert a `Conversion` into a `JsonResultEntry`.
    #[must_use]
    pub fn from_conversion(conversion: &Conversion) -> Self {
        let output = match &conversion.output {
            Converted::Text(text) => JsonValue::Text(text.clone()),
            Converted::Number(n) => JsonValue::Number(n.is_finite().then_some(*n)),
        };

        Self {
            input: conversion.input.clone(),
            output,
        }
    }
}

impl JsonSummary {
    /// Compute counts from a batch of conversions.
    #[must_use]
    pub fn from_conversions(conversions: &[Conversion]) -> Self {
        Self {
            total: conversions.len(),
            empty: conversions.iter().filter(|c| c.output.is_empty()).count(),
            not_a_number: conversions.iter().filter(|c| c.not_a_number).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_all;

    #[test]
    fn test_json_format_mode() {
        let conversions = convert_all(Mode::Format, &["1234.5", "0", "abc"]);
        let output = JsonOutput::from_conversions(Mode::Format, &conversions);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["mode"], "format");
        assert_eq!(json["results"][0]["input"], "1234.5");
        assert_eq!(json["results"][0]["output"], "1,234.50");
        assert_eq!(json["results"][1]["output"], "");
        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["summary"]["empty"], 2);
        assert_eq!(json["summary"]["not_a_number"], 1);
    }

    #[test]
    fn test_json_parse_mode() {
        let conversions = convert_all(Mode::Parse, &["1,234.50", "$5", "Infinity"]);
        let output = JsonOutput::from_conversions(Mode::Parse, &conversions);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["mode"], "parse");
        assert_eq!(json["results"][0]["output"], 1234.5);
        assert!(json["results"][1]["output"].is_null());
        assert!(json["results"][2]["output"].is_null());
        assert_eq!(json["summary"]["empty"], 0);
        assert_eq!(json["summary"]["not_a_number"], 1);
    }

    #[test]
    fn test_json_empty_batch() {
        let output = JsonOutput::from_conversions(Mode::Parse, &[]);
        let json = serde_json::to_string(&output).unwrap();

        assert!(json.contains("\"results\":[]"));
        assert!(json.contains("\"total\":0"));
    }
}
