//! Batch conversion of textual inputs.
//!
//! The CLI receives every input as text, whichever direction it converts in.
//! This module runs [`money::format`] or [`money::parse`] over a list of such
//! inputs and keeps enough per-item detail for reporting.

use std::fmt;

use serde::Serialize;

use crate::money;

/// Conversion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Number to money string
    Format,

    /// Money string to number
    Parse,
}

/// Result of converting a single value.
#[derive(Clone, Debug, PartialEq)]
pub enum Converted {
    /// Output of [`money::format`]
    Text(String),

    /// Output of [`money::parse`]
    Number(f64),
}

impl Converted {
    /// Whether the conversion produced an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One input together with its converted value.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    /// The input exactly as given
    pub input: String,

    /// The converted value
    pub output: Converted,

    /// The input was non-empty but had no numeric prefix
    pub not_a_number: bool,
}

/// Convert every input in the given direction.
#[must_use]
pub fn convert_all<S: AsRef<str>>(mode: Mode, inputs: &[S]) -> Vec<Conversion> {
    inputs
        .iter()
        .map(|input| match mode {
            Mode::Format => format_input(input.as_ref()),
            Mode::Parse => parse_input(input.as_ref()),
        })
        .collect()
}

/// Read the input as a number (commas allowed) and format it.
///
/// An empty input is the absent value. Non-numeric input formats like `NaN`,
/// to an empty string, and is flagged.
#[must_use]
pub fn format_input(input: &str) -> Conversion {
    let value = money::parse(input);

    Conversion {
        input: input.to_string(),
        output: Converted::Text(money::format(value)),
        not_a_number: value.is_nan(),
    }
}

/// Parse the input as a money string.
#[must_use]
pub fn parse_input(input: &str) -> Conversion {
    let value = money::parse(input);

    Conversion {
        input: input.to_string(),
        output: Converted::Number(value),
        not_a_number: value.is_nan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_input() {
        let conversion = format_input("1234.5");
        assert_eq!(conversion.output, Converted::Text("1,234.50".to_string()));
        assert!(!conversion.not_a_number);

        let grouped = format_input("1,234.5");
        assert_eq!(grouped.output.to_string(), "1,234.50");
    }

    #[test]
    fn test_format_input_empty_and_garbage() {
        let empty = format_input("");
        assert!(empty.output.is_empty());
        assert!(!empty.not_a_number);

        let zero = format_input("0");
        assert!(zero.output.is_empty());
        assert!(!zero.not_a_number);

        let garbage = format_input("abc");
        assert!(garbage.output.is_empty());
        assert!(garbage.not_a_number);
    }

    #[test]
    fn test_parse_input() {
        let conversion = parse_input("1,234.50");
        assert_eq!(conversion.output, Converted::Number(1234.5));
        assert_eq!(conversion.output.to_string(), "1234.5");
        assert!(!conversion.not_a_number);

        assert_eq!(parse_input("1000000.00").output.to_string(), "1000000");
        assert_eq!(parse_input("").output.to_string(), "0");
    }

    #[test]
    fn test_parse_input_not_a_number() {
        let conversion = parse_input("$5");
        assert!(conversion.not_a_number);
        assert_eq!(conversion.output.to_string(), "NaN");
        assert!(!conversion.output.is_empty());
    }

    #[test]
    fn test_infinity_display() {
        assert_eq!(parse_input("Infinity").output.to_string(), "Infinity");
        assert_eq!(parse_input("-1e400").output.to_string(), "-Infinity");
        assert_eq!(format_input("1e400").output.to_string(), "Infinity");
    }

    #[test]
    fn test_convert_all_keeps_order() {
        let results = convert_all(Mode::Format, &["1", "", "1000"]);
        let outputs: Vec<String> = results.iter().map(|c| c.output.to_string()).collect();
        assert_eq!(outputs, vec!["1.00", "", "1,000.00"]);

        let results = convert_all(Mode::Parse, &[String::from("2,500.00")]);
        assert_eq!(results[0].output, Converted::Number(2500.0));
    }
}
