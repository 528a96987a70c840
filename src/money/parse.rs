//! Money string to number conversion.

/// Parse a money string back into a number.
///
/// Absent or empty input yields `0.0`. Otherwise all commas are dropped and
/// the longest numeric prefix is converted; anything after it is ignored. Text
/// without a numeric prefix yields `NaN`, so callers that care about the
/// difference between "zero" and "garbage" must check [`f64::is_nan`].
///
/// # Examples
///
/// ```
/// # use money_fmt::money::parse;
/// assert_eq!(parse("1,234.50"), 1234.5);
/// assert_eq!(parse("12.5 USD"), 12.5);
/// assert_eq!(parse(""), 0.0);
/// assert!(parse("USD 12.5").is_nan());
/// ```
#[must_use]
pub fn parse<'a>(text: impl Into<Option<&'a str>>) -> f64 {
    let Some(text) = text.into().filter(|t| !t.is_empty()) else {
        return 0.0;
    };

    leading_number(&text.replace(',', ""))
}

/// Convert the longest numeric prefix of `text`, skipping leading whitespace.
fn leading_number(text: &str) -> f64 {
    let text = text.trim_start_matches(is_leading_space);

    numeric_prefix_len(text)
        .and_then(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Length of the longest prefix that reads as a decimal literal.
///
/// Accepted shape: `[+-]? (Infinity | digits [. digits] | . digits) ([eE] [+-]? digits)?`.
/// An exponent marker without digits after it is left unconsumed.
fn numeric_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[pos..].starts_with("Infinity") {
        return Some(pos + "Infinity".len());
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let has_point = bytes.get(pos) == Some(&b'.');
    let frac_digits = if has_point {
        count_digits(&bytes[pos + 1..])
    } else {
        0
    };

    if int_digits + frac_digits == 0 {
        return None;
    }

    if has_point {
        pos += 1 + frac_digits;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let exp = pos + 1 + usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(pos)
}

/// Whitespace skipped before a number: Unicode space separators, TAB, VT,
/// FF, LF, CR, U+2028, U+2029 and the byte order mark. NEL (U+0085) is not
/// included even though [`char::is_whitespace`] accepts it.
fn is_leading_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
