/// `check` command: validate a model file and summarize its contents.
use anyhow::Result;

use crate::cli::OutputCtx;
use crate::cli::args::CheckArgs;
use crate::cli::output::write_check_report;
use crate::types::CheckSummaryOutput;

use super::render::load_model;

/// Run `usagefmt check`.
///
/// # Errors
///
/// Returns an error when the model cannot be loaded or a descriptor has an
/// empty name list.
pub fn run(args: &CheckArgs, ctx: &OutputCtx) -> Result<()> {
    let model = load_model(&args.model)?;
    model.validate()?;

    let summary = CheckSummaryOutput {
        ok: true,
        program_name: model.program_name.clone(),
        options: model.options.len(),
        commands: model.commands.len(),
        has_main_parameter: model.main_parameter.is_some(),
    };
    write_check_report(&summary, &model, ctx);
    Ok(())
}
