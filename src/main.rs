//! Tagcalc CLI application entry point
//!
//! Runs the interactive formula editor or one of the scripting commands.
//!
//! # Usage
//!
//! ```bash
//! # Open the formula editor (default command)
//! tagcalc
//! tagcalc edit
//!
//! # Calculate a formula from catalog labels, operands and numbers
//! tagcalc calc "COGS Headcount" "*" 2
//! tagcalc c --json "Payment Processing Fees" SUM 250
//!
//! # Evaluate raw arithmetic
//! tagcalc eval "2 ^ 3 ^ 2"
//!
//! # See which suggestions a query matches
//! tagcalc catalog headcount --ranked
//! ```
//!
//! # Configuration
//!
//! The suggestion catalog and preferences are read from
//! `~/.config/tagcalc/config.toml` on Linux, created with the built-in
//! catalog on first run. `--config FILE` reads another file instead.
//!
//! # Logging
//!
//! Log output is filtered by `RUST_LOG` (default `warn`). The editor writes
//! its log to a file so the terminal screen stays intact.

use std::fs::{self, OpenOptions};
use std::io;
use std::process::ExitCode;
use std::time::Duration;
use tagcalc::{
    TagcalcError,
    cli::{self, Cli, Commands},
    commands,
    config::TagcalcConfig,
    ui::{OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, TagcalcError>;

/// Open the editor log file for appending, creating its directory
fn open_log_file(config: &TagcalcConfig) -> Option<fs::File> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Initialize `env_logger` for the given command
///
/// The editor owns the terminal, so its log goes to a file; when no file
/// can be opened, logging is switched off for the session.
fn init_logging(command: &Commands, config: &TagcalcConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if *command == Commands::Edit {
        match open_log_file(config) {
            Some(file) => builder.target(env_logger::Target::Pipe(Box::new(file))),
            None => builder.filter_level(log::LevelFilter::Off),
        };
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.init();
}

/// Load the configuration named on the command line, or the default one
fn load_config(cli: &Cli) -> Result<(TagcalcConfig, std::path::PathBuf)> {
    match &cli.config {
        Some(path) => Ok((TagcalcConfig::load_from(path)?, path.clone())),
        None => Ok((TagcalcConfig::load()?, TagcalcConfig::config_path()?)),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        cli::generate_completions(shell, &mut io::stdout());
        return Ok(());
    }

    let (config, config_path) = load_config(cli)?;
    init_logging(&command, &config);

    let output = StdoutWriter::new().quiet(cli.quiet || config.quiet);
    let catalog = config.build_catalog()?;
    log::debug!(
        "loaded {} catalog entries from {}",
        catalog.len(),
        config_path.display()
    );

    match &command {
        Commands::Edit => commands::edit::execute(
            catalog,
            Duration::from_secs(config.message_ttl_secs),
            &output,
        ),
        Commands::Calc { tokens, json } => {
            commands::calc::execute(&catalog, tokens, *json, &output).map(|_| ())
        }
        Commands::Eval { expression } => {
            commands::eval::execute(expression, &output).map(|_| ())
        }
        Commands::Catalog { query, ranked } => {
            commands::catalog::execute(&catalog, query.as_deref(), *ranked, &output)
        }
        Commands::Config { command } => {
            commands::config::execute(&config, &config_path, command, &output)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
