//! CLI module for the SAS checker
//!
//! ## Commands
//!
//! - `sascheck [FILE]...` - check files with default settings
//! - `check [PATH]...` - check files or directories (`-` reads standard input)
//! - `categories` - list the finding categories
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, CommandFactory, Parser, Subcommand};
use sascheck_syntax::ScanConfig;
use sascheck_syntax::config::DEFAULT_MAX_LINE_LENGTH;

use crate::render::OutputFormat;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    /// Every input was clean (or blank).
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one finding was reported.
    pub const ISSUES_FOUND: ExitCode = ExitCode(1);
    /// An input could not be read or scanned.
    pub const FAILURE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 2).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Heuristic structural checker for SAS programs
#[derive(Parser, Debug)]
#[command(name = "sascheck")]
#[command(version = VERSION)]
#[command(about = "Heuristic structural checker for SAS programs", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Files to check (default action when no subcommand given)
    #[command(flatten)]
    pub check: CheckArgs,
}

/// Options shared by the default action and `check`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Files or directories to check; `-` reads standard input
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Flag lines longer than this many characters
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    pub max_line_length: usize,
}

impl CheckArgs {
    /// Scanner configuration implied by the flags.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new().with_max_line_length(self.max_line_length)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check SAS files or directories (defaults to the current directory)
    Check(CheckArgs),

    /// List the finding categories
    Categories,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check(mut args)) => {
            if args.paths.is_empty() {
                args.paths.push(PathBuf::from("."));
            }
            commands::check_paths(&args)
        }
        Some(Command::Categories) => commands::list_categories(),
        None => {
            // Default: check the given files
            if cli.check.paths.is_empty() {
                // No command and no file - show help
                let help = Cli::command().render_help();
                return Err(CliError::failure(help.to_string()));
            }
            commands::check_paths(&cli.check)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
