//! Number to money string conversion.

use std::sync::LazyLock;

use regex::Regex;

/// Format a number as a money string: two decimals, comma-grouped thousands.
///
/// Absent input, zero (of either sign) and `NaN` all count as "no value" and
/// produce an empty string. Infinite values render as `Infinity` and
/// `-Infinity`, which [`parse`](super::parse) reads back.
///
/// Rounding picks the two-decimal value nearest to the exact binary value of
/// `value`; exact ties round away from zero.
///
/// # Examples
///
/// ```
/// # use money_fmt::money::format;
/// assert_eq!(format(1234.5), "1,234.50");
/// assert_eq!(format(-42.1), "-42.10");
/// assert_eq!(format(None), "");
/// assert_eq!(format(0.0), "");
/// ```
#[must_use]
pub fn format(value: impl Into<Option<f64>>) -> String {
    let Some(value) = value.into().filter(|v| *v != 0.0 && !v.is_nan()) else {
        return String::new();
    };

    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    group_thousands(&fixed_two(value))
}

/// Shape of every non-empty, finite [`format`] result, ASCII digits only.
#[allow(clippy::expect_used)]
static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]{1,3}(,[0-9]{3})*\.[0-9]{2}$").expect("money pattern is valid")
});

/// Check whether `text` has exactly the shape [`format`] produces for a
/// finite non-zero value.
#[must_use]
pub fn is_canonical(text: &str) -> bool {
    CANONICAL.is_match(text)
}

/// Render a finite value with exactly two fractional digits.
///
/// `{:.2}` already yields the nearest decimal but breaks exact ties towards
/// even. A tie at the third decimal is only possible when the value is an odd
/// multiple of 1/8, so those are rounded up in integer cents instead.
// the cast only runs on non-negative whole numbers below 2^53
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fixed_two(value: f64) -> String {
    let eighths = value.abs() * 8.0;

    if eighths.fract() == 0.0 && eighths < EXACT_INTEGER_LIMIT {
        let eighths = eighths as u64;
        if eighths % 2 == 1 {
            let cents = (eighths * 25 + 1) / 2;
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{sign}{}.{:02}", cents / 100, cents % 100);
        }
    }

    format!("{value:.2}")
}

/// 2^53; every `f64` at or above it is an even integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Insert a comma before every group of three integer digits.
fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = fixed
        .strip_prefix('-')
        .map_or(("", fixed), |rest| ("-", rest));
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3);
    grouped.push_str(sign);

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}
