/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod check;
pub mod render;

use anyhow::Result;

use crate::cli::OutputCtx;
use crate::cli::args::Command;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns any command failure (model load, validation, rendering).
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<()> {
    match command {
        Command::Render(args) => render::run(args),
        Command::Check(args) => check::run(args, ctx),
    }
}
