/// `render` command: print the usage text for a model file.
use std::path::Path;

use anyhow::{Context, Result};
use usagefmt::{RenderOptions, UsageModel, formatter_for};

use crate::cli::args::RenderArgs;

/// Run `usagefmt render`.
///
/// # Errors
///
/// Returns an error when the model file cannot be read or parsed, or when
/// the model fails descriptor validation during rendering.
pub fn run(args: &RenderArgs) -> Result<()> {
    let model = load_model(&args.model)?;
    let opts = RenderOptions {
        column_size: args.columns,
    };
    let formatter = formatter_for(args.style.into());

    let mut rendered = String::new();
    formatter.usage(&mut rendered, &opts, &args.indent, &model)?;
    print!("{rendered}");
    Ok(())
}

/// Load and parse a usage model JSON file.
pub(crate) fn load_model(path: &Path) -> Result<UsageModel> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse model file {}", path.display()))
}
