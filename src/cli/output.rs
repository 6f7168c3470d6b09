/// Output formatting for check results: JSON or table. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use usagefmt::{UsageModel, ValueKind};

use super::args::OutputFormat;
use crate::types::{CheckSummaryOutput, ErrorOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to command handlers.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

/// Write a check report to stdout: summary JSON, or an option table.
pub fn write_check_report(summary: &CheckSummaryOutput, model: &UsageModel, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Compact => print_compact_json(summary),
        OutputFormat::Table | OutputFormat::Auto => write_options_table(model, ctx),
    }
}

fn write_options_table(model: &UsageModel, ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["NAMES", "REQUIRED", "KIND", "DEFAULT", "DESCRIPTION"]);
    }
    for pd in &model.options {
        table.add_row([
            pd.display_names(),
            if pd.required { "yes" } else { "no" }.to_owned(),
            kind_label(&pd.kind).to_owned(),
            pd.display_default().unwrap_or_default(),
            pd.description.clone(),
        ]);
    }
    println!("{table}");
}

fn kind_label(kind: &ValueKind) -> &'static str {
    match kind {
        ValueKind::Flag => "flag",
        ValueKind::Scalar => "scalar",
        ValueKind::Enum { .. } => "enum",
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
