//! # money-fmt
//!
//! Convert between numbers and comma-grouped, two-decimal money strings from
//! the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Format numbers
//! money-fmt format 1234.5 -42.1          # 1,234.50 / -42.10
//!
//! # Parse money strings
//! money-fmt parse "1,234.50"             # 1234.5
//!
//! # One value per line from stdin, as JSON
//! cat amounts.txt | money-fmt format --json
//! ```
//!
//! Defaults for `--json`, `--verbose` and `--strict` can be stored in
//! `~/.config/money-fmt/config.toml`.

mod cli;

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::exit;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use money_fmt::{
    FileConfig, OutputOptions,
    convert::{Conversion, Mode, convert_all},
    money::is_canonical,
    output::JsonOutput,
};

/// Entry point for the money-fmt application.
///
/// Errors from [`inner_main`] are printed to stderr and turn into a non-zero
/// exit status.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from reading stdin, config subcommands, `--strict`
/// violations, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Commands::Config { command } = &args.command {
        return handle_config_command(command);
    }

    let Some((mode, values)) = args.conversion() else {
        return Ok(());
    };

    let file_config = load_config(args.json());
    let opts = args.output_options(&file_config);

    let inputs = if values.is_empty() {
        read_stdin_lines()?
    } else {
        values.to_vec()
    };

    let conversions = convert_all(mode, &inputs);

    if opts.warnings() {
        print_warnings(mode, &conversions);
    }

    if opts.strict {
        check_strict(&conversions)?;
    }

    print_results(mode, &conversions, opts)
}

// ── Conversion output ───────────────────────────────────────────────────

/// Read one input per line from stdin, dropping line terminators.
fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}

/// Print results one per line, or as a single JSON document.
fn print_results(mode: Mode, conversions: &[Conversion], opts: OutputOptions) -> Result<()> {
    if opts.json {
        let output = JsonOutput::from_conversions(mode, conversions);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for conversion in conversions {
            println!("{}", conversion.output);
        }
    }
    Ok(())
}

/// Warn on stderr about inputs whose result is probably not what was meant.
fn print_warnings(mode: Mode, conversions: &[Conversion]) {
    for conversion in conversions {
        let input = &conversion.input;

        let message = if conversion.not_a_number {
            format!("{input:?} is not a number")
        } else if mode == Mode::Format && conversion.output.is_empty() {
            format!("{input:?} has no value, printed an empty line")
        } else if mode == Mode::Parse && !input.is_empty() && !is_canonical(input) {
            format!("{input:?} is not in canonical money format")
        } else {
            continue;
        };

        eprintln!("{} {message}", "Warning:".yellow());
    }
}

/// Fail when any input had no numeric prefix.
fn check_strict(conversions: &[Conversion]) -> Result<()> {
    let invalid: Vec<&str> = conversions
        .iter()
        .filter(|c| c.not_a_number)
        .map(|c| c.input.as_str())
        .collect();

    if !invalid.is_empty() {
        bail!("Not a number: {}", invalid.join(", "));
    }
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r"# money-fmt configuration
# All values shown are their defaults. Uncomment and change as needed.

[output]
# Print a single JSON document instead of one line per input
# json = false

# Warn about empty, non-numeric or non-canonical inputs on stderr
# verbose = false

# Exit with an error if any input is not a number
# strict = false
";

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    let path = FileConfig::config_path()
        .ok_or_else(|| anyhow::anyhow!("No configuration directory is known for this platform"))?;

    match cmd {
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Show => {
            let config = read_config_if_present(&path)?;
            let origin = if config.is_some() {
                "loaded"
            } else {
                "absent, using defaults"
            };
            println!("# {} ({origin})", path.display());
            println!("{}", format_config(&config.unwrap_or_default()));
        }
        ConfigCommand::Init => {
            if write_template(&path)? {
                println!("Wrote default settings to {}", path.display());
            } else {
                println!("{} already exists, left untouched", path.display());
            }
        }
    }
    Ok(())
}

/// Read the config file at `path`, or `None` when there is no such file.
fn read_config_if_present(path: &Path) -> Result<Option<FileConfig>> {
    if path.exists() {
        FileConfig::load_from(path).map(Some)
    } else {
        Ok(None)
    }
}

/// Render the effective settings as TOML, marking keys the file leaves unset.
fn format_config(config: &FileConfig) -> String {
    let line = |key: &str, value: Option<bool>| {
        value.map_or_else(
            || format!("{key} = false  # default"),
            |v| format!("{key} = {v}"),
        )
    };

    [
        "[output]".to_string(),
        line("json", config.output.json),
        line("verbose", config.output.verbose),
        line("strict", config.output.strict),
    ]
    .join("\n")
}

/// Create `path` holding [`CONFIG_TEMPLATE`] unless it already exists.
///
/// Returns `false` when an existing file was left alone.
fn write_template(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
    }
    fs::write(path, CONFIG_TEMPLATE).with_context(|| format!("Cannot write {}", path.display()))?;

    Ok(true)
}

/// Settings from the config file; a broken file is reported and ignored.
fn load_config(json_mode: bool) -> FileConfig {
    FileConfig::load().unwrap_or_else(|e| {
        if !json_mode {
            eprintln!("{} {e}, using defaults", "Warning:".yellow());
        }
        FileConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use money_fmt::config::file::FileOutputConfig;
    use tempfile::TempDir;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.output.json.is_none());
        assert!(config.output.verbose.is_none());
        assert!(config.output.strict.is_none());
    }

    #[test]
    fn test_format_config_marks_defaults() {
        let text = format_config(&FileConfig::default());
        assert_eq!(
            text,
            "[output]\njson = false  # default\nverbose = false  # default\nstrict = false  # default"
        );

        let config = FileConfig {
            output: FileOutputConfig {
                json: Some(true),
                ..FileOutputConfig::default()
            },
        };
        let text = format_config(&config);
        assert!(text.contains("json = true\n"));
        assert!(text.contains("verbose = false  # default"));
    }

    #[test]
    fn test_format_config_is_valid_toml() {
        let config = FileConfig {
            output: FileOutputConfig {
                json: Some(true),
                verbose: None,
                strict: Some(false),
            },
        };
        let parsed: FileConfig = toml::from_str(&format_config(&config)).unwrap();

        assert_eq!(parsed.output.json, Some(true));
        assert_eq!(parsed.output.verbose, Some(false));
        assert_eq!(parsed.output.strict, Some(false));
    }

    #[test]
    fn test_write_template_creates_once() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let path = dir.path().join("money-fmt").join("config.toml");

        assert!(write_template(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);

        fs::write(&path, "[output]\njson = true\n").unwrap();
        assert!(!write_template(&path).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[output]\njson = true\n"
        );
    }

    #[test]
    fn test_read_config_if_present() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let path = dir.path().join("config.toml");

        assert!(read_config_if_present(&path).unwrap().is_none());

        fs::write(&path, "[output]\nverbose = true\n").unwrap();
        let config = read_config_if_present(&path).unwrap().unwrap();
        assert_eq!(config.output.verbose, Some(true));

        fs::write(&path, "[output]\nverbose = 3\n").unwrap();
        assert!(read_config_if_present(&path).is_err());
    }

    #[test]
    fn test_check_strict() {
        let ok = convert_all(Mode::Parse, &["1,234.50", ""]);
        assert!(check_strict(&ok).is_ok());

        let bad = convert_all(Mode::Format, &["12", "abc", "$3"]);
        let err = check_strict(&bad).unwrap_err().to_string();
        assert_eq!(err, "Not a number: abc, $3");
    }
}
