/// Stacked options block layout: names line, details indented underneath.
use std::fmt;

use crate::model::{ParameterDescriptor, UsageError, ValueKind, validate_descriptors};

use super::formatter::{RenderOptions, UsageFormatter};
use super::wrap::{pad, wrap_description};

/// Lays out each option as a names line followed by its description and
/// annotation lines, all indented to one description column.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedUsageFormatter;

impl UsageFormatter for StackedUsageFormatter {
    fn append_options(
        &self,
        out: &mut dyn fmt::Write,
        opts: &RenderOptions,
        indent_count: usize,
        indent: &str,
        params: &[ParameterDescriptor],
    ) -> Result<(), UsageError> {
        validate_descriptors(params)?;
        if params.is_empty() {
            return Ok(());
        }
        writeln!(out, "{indent}  Options:")?;

        for pd in params {
            let marker = if pd.required { "* " } else { "  " };
            writeln!(out, "{indent}  {marker}{}", pd.display_names())?;

            let has_description = !pd.description.is_empty();
            if has_description {
                pad(out, indent_count)?;
                wrap_description(out, opts, indent_count, indent_count, &pd.description)?;
            }
            let mut has_content = has_description;

            if pd.dynamic {
                annotation_start(out, indent_count, has_content)?;
                write!(out, "Syntax: {}key{}value", pd.names[0], pd.assignment)?;
                has_content = true;
            }
            if let Some(def) = pd.display_default() {
                annotation_start(out, indent_count, has_content)?;
                write!(out, "Default: {def}")?;
                has_content = true;
            }
            if let ValueKind::Enum { labels } = &pd.kind {
                annotation_start(out, indent_count, has_content)?;
                write!(out, "Possible Values: [{}]", labels.join(", "))?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

/// Start an annotation line: newline plus indent when prior detail lines
/// exist, plain indent otherwise.
fn annotation_start(
    out: &mut dyn fmt::Write,
    indent_count: usize,
    has_content: bool,
) -> fmt::Result {
    if has_content {
        out.write_char('\n')?;
    }
    pad(out, indent_count)
}
