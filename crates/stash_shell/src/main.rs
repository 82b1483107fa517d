//! Backpack manager shell
//!
//! Run with: cargo run -p stash_shell -- [--linked] [--components] [--no-color]

use std::process::ExitCode;

use stash_shell::{start, ShellError};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match start(&args, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ShellError::Config(_)) => {
            log::error!("{}", e);
            eprintln!("stash: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("stash: {}", e);
            ExitCode::FAILURE
        }
    }
}
