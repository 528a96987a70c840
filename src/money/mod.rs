//! Money display format.
//!
//! Numbers are rendered with exactly two decimals and a comma before every
//! group of three integer digits (`1234.5` becomes `"1,234.50"`), and parsed
//! back leniently. Neither direction ever fails: absent input maps to an empty
//! string or `0.0`, and unparsable text maps to `NaN`.

pub mod format;
pub mod parse;

pub use format::{format, is_canonical};
pub use parse::parse;
