//! # Stash Shell
//!
//! Interactive front end for the backpack manager:
//! - Text command interface with quoting and `--options`
//! - Built-in commands for every backpack operation
//! - Array or linked-list store, loot or components variant
//! - Configuration from file, environment and flags
//!
//! ## Architecture
//!
//! ```text
//! User Input ──► Parser ──► Command ──► Executor ──► Backpack
//!                              │
//!                              ▼
//!                         Built-ins
//! ```
//!
//! ## Usage
//!
//! ```text
//! stash> add "Kit Médico" cura 2
//! stash> sort name
//! stash> bfind Kit Médico
//! stash> stats
//! ```

pub mod builtins;
pub mod command;
pub mod config;
pub mod executor;
pub mod output;
pub mod parser;
pub mod session;

pub use command::{Command, CommandError, CommandHandler, CommandResult};
pub use config::{ConfigError, ShellConfig};
pub use executor::Executor;
pub use output::{Output, OutputLevel, OutputLine};
pub use parser::{ParseError, Parser, Token};
pub use session::{Session, Store, StoreKind};

use std::io::{BufRead, Write};

use stash_inventory::InventoryError;
use thiserror::Error;

/// Shell errors
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot create backpack: {0}")]
    Inventory(#[from] InventoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the configuration from `args` and the environment, then run the shell
pub fn start<R: BufRead, W: Write>(args: &[String], input: R, out: W) -> Result<(), ShellError> {
    let config = ShellConfig::load(args)?;
    run(&config, input, out)
}

/// Run the read-eval-print loop until `quit` or end of input
pub fn run<R: BufRead, W: Write>(config: &ShellConfig, input: R, mut out: W) -> Result<(), ShellError> {
    let mut session = Session::from_config(config)?;
    let executor = Executor::new();

    writeln!(
        out,
        "{}",
        OutputLine::info(format!(
            "Backpack ({} variant, {} store, capacity {}) - type 'help' for commands",
            session.variant(),
            session.store().kind(),
            session.store().as_store().capacity()
        ))
        .format(config.color)
    )?;

    let mut lines = input.lines();
    while session.is_running() {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let rendered = match executor.execute_line(&line, &mut session) {
            Ok(Some(result)) => result.to_output().format(config.color),
            Ok(None) => continue,
            Err(e) => {
                log::debug!("Command failed: {}", e);
                OutputLine::error(e.to_string()).format(config.color)
            }
        };

        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }
    }

    log::info!("Session ended with {} items", session.store().as_store().len());
    Ok(())
}
