//! Resolved output options.
//!
//! These are the effective settings after layering CLI flags over the
//! configuration file.

/// How conversion results are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print a single JSON document instead of one line per input
    pub json: bool,

    /// Warn on stderr about empty, non-numeric or non-canonical inputs
    pub verbose: bool,

    /// Fail when an input is not a number
    pub strict: bool,
}

impl OutputOptions {
    /// Whether human-readable warnings should be printed.
    ///
    /// Warnings are never mixed into JSON output.
    #[must_use]
    pub const fn warnings(self) -> bool {
        self.verbose && !self.json
    }
}
