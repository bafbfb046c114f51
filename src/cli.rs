//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tagcalc using the `clap` crate.
//!
//! # Commands
//!
//! - **edit**: Interactive formula editor (default)
//! - **calc**: Calculate a formula given as tags
//! - **eval**: Evaluate a raw arithmetic expression
//! - **catalog**: Show the suggestions matching a query
//! - **config**: Show the configuration file location or contents
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tagcalc::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tagcalc", "calc", "COGS Headcount", "*", "2"]);
//! match cli.get_command() {
//!     Commands::Calc { tokens, json } => {
//!         assert_eq!(tokens, ["COGS Headcount", "*", "2"]);
//!         assert!(!json);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagcalc")]
#[command(about = "Build and evaluate formulas from named quantities")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive formula editor (default)
    #[command(visible_alias = "e")]
    Edit,

    /// Calculate a formula given as a sequence of tags
    ///
    /// Each token is an operand symbol, a catalog label (case-insensitive)
    /// or a decimal number.
    #[command(visible_alias = "c")]
    Calc {
        /// Tags in formula order, e.g. "COGS Headcount" "*" 2
        #[arg(value_name = "TOKENS", required = true, num_args = 1..)]
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Print the result as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Evaluate a raw arithmetic expression
    Eval {
        /// Infix expression, e.g. "2 + 3 * 4"
        #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
        expression: String,
    },

    /// List the suggestions for a query
    Catalog {
        /// Free text to filter by (all entries when omitted)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Also list the entries that do not match, after the matches
        #[arg(short = 'r', long = "ranked")]
        ranked: bool,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the path of the configuration file
    Path,
    /// Print the effective configuration as TOML
    Show,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Edit if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Edit)
    }
}

/// Write the completion script for `shell` to `buf`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
