#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! usagefmt — render aligned usage help text from parameter models.

mod cli;
mod commands;
mod types;

use clap::Parser;
use usagefmt::UsageError;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header);

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(exit_code(&err));
        }
    }
}

/// Map a command failure to a process exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<UsageError>()
        .map_or(1, UsageError::exit_code)
}
