//! Command-line interface definition and argument parsing.
//!
//! This module defines the subcommands and flags using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use clap::{Args, Parser, Subcommand};

use money_fmt::config::{FileConfig, OutputOptions};
use money_fmt::convert::Mode;

/// Flags controlling how results are reported, shared by every subcommand.
#[derive(Args)]
struct OutputArgs {
    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, warnings are suppressed and one JSON document with every
    /// result and a summary is printed to stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Warn about inputs that produce empty, non-numeric or non-canonical results
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Exit with an error if any input is not a number
    ///
    /// By default non-numeric input is converted leniently (to an empty string
    /// when formatting, to `NaN` when parsing).
    #[arg(long, global = true)]
    strict: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Format numbers as money strings (`1234.5` -> `1,234.50`)
    ///
    /// Reads one value per line from stdin when no values are given. An empty
    /// value, zero, or a non-number prints an empty line.
    Format {
        /// Numbers to format
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Parse money strings into numbers (`1,234.50` -> `1234.5`)
    ///
    /// Reads one value per line from stdin when no values are given. Text
    /// without a leading number prints `NaN`.
    Parse {
        /// Money strings to parse
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "money-fmt")]
#[command(about = "Format numbers as comma-grouped money strings and parse them back")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// The conversion requested on the command line with its inputs, or
    /// `None` for the `config` subcommand.
    #[must_use]
    pub fn conversion(&self) -> Option<(Mode, &[String])> {
        match &self.command {
            Commands::Format { values } => Some((Mode::Format, values.as_slice())),
            Commands::Parse { values } => Some((Mode::Parse, values.as_slice())),
            Commands::Config { .. } => None,
        }
    }

    /// Whether `--json` was passed on the command line.
    ///
    /// Used before the config file is loaded, to keep warnings out of JSON.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    /// Extract output options from CLI args and config file.
    ///
    /// For each flag, `true` on the command line wins, then the config file
    /// value, then `false`.
    #[must_use]
    pub fn output_options(&self, config: &FileConfig) -> OutputOptions {
        OutputOptions {
            json: self.output.json || config.output.json.unwrap_or(false),
            verbose: self.output.verbose || config.output.verbose.unwrap_or(false),
            strict: self.output.strict || config.output.strict.unwrap_or(false),
        }
    }
}
