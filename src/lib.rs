//! # money-fmt
//!
//! Format numbers as comma-grouped, two-decimal "money" strings and parse
//! them back.
//!
//! ```
//! use money_fmt::{format, parse};
//!
//! assert_eq!(format(1234.5), "1,234.50");
//! assert_eq!(parse("1,234.50"), 1234.5);
//! ```
//!
//! Both functions are infallible: absent input becomes `""` or `0.0`, and text
//! without a leading number parses to `NaN`.

pub mod config;
pub mod convert;
pub mod money;
pub mod output;

pub use config::{FileConfig, OutputOptions};
pub use money::{format, parse};
