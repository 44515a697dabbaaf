//! CLI module for chanmock
//!
//! ```text
//! chanmock <FILE> [--type NAME]... [--output PATH] [--chan-size N] [--blocking-return] [--alias NAME] [--module NAME]
//! ```
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

use clap::Parser;

use crate::config::{DEFAULT_CHAN_SIZE, GenerateConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic with miette's report handler.
    pub fn diagnostic<D>(diagnostic: D) -> Self
    where
        D: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(diagnostic)))
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

/// Generate channel-synchronized mocks for Rust traits
#[derive(Parser, Debug)]
#[command(name = "chanmock")]
#[command(version = VERSION)]
#[command(about = "Generate channel-synchronized mocks for Rust traits", long_about = None)]
pub struct Cli {
    /// Rust source file declaring the traits to mock
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Mock only these traits (and the traits they depend on); default is every `pub` trait
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub types: Vec<String>,

    /// Write the generated code here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Capacity of every generated channel (0 = rendezvous)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CHAN_SIZE)]
    pub chan_size: usize,

    /// Make methods without results wait on a `block_return` channel before returning
    #[arg(long)]
    pub blocking_return: bool,

    /// Qualify the mocked traits and their local types with this path
    #[arg(long, value_name = "NAME")]
    pub alias: Option<String>,

    /// Wrap the generated mocks in `pub mod NAME`
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,
}

impl Cli {
    /// Generation settings selected by the flags.
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            chan_size: self.chan_size,
            blocking_return: self.blocking_return,
            alias: self.alias.clone(),
            module: self.module.clone(),
        }
    }
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
            if exit_code.0 != 0 {
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
    let config = cli.config();
    commands::generate_file(&cli.file, &cli.types, cli.output.as_deref(), &config)
}

// ============================================================================
// Tests
// ============================================================================
