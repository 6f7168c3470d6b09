/// Aligned ("unix-style") options block layout.
use std::fmt;

use crate::model::{ParameterDescriptor, UsageError, ValueKind, validate_descriptors};

use super::formatter::{NAME_DESCRIPTION_GAP, RenderOptions, UsageFormatter};
use super::wrap::{pad, wrap_description};

/// Lays out every option on one line, with all descriptions starting at a
/// shared column offset regardless of individual flag-name length.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixUsageFormatter;

impl UsageFormatter for UnixUsageFormatter {
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

        let prefix_width = params
            .iter()
            .map(|pd| prefix(pd).chars().count())
            .max()
            .unwrap_or(0);

        for pd in params {
            let prefix = prefix(pd);
            write!(out, "{indent}  {prefix}")?;
            pad(out, prefix_width - prefix.chars().count() + 1)?;

            let first_cols = indent.chars().count() + prefix_width + NAME_DESCRIPTION_GAP;
            let wrap_cols = (indent_count + prefix_width).saturating_sub(NAME_DESCRIPTION_GAP);
            wrap_description(out, opts, wrap_cols, first_cols, &annotated_description(pd))?;
            out.write_char('\n')?;
        }
        Ok(())
    }
}

/// Name column text: required marker plus the joined names.
fn prefix(pd: &ParameterDescriptor) -> String {
    let marker = if pd.required { "* " } else { "  " };
    format!("{marker}{}", pd.display_names())
}

/// Base description followed by the syntax, default, and values
/// annotations, in that order, each separated by a single space.
fn annotated_description(pd: &ParameterDescriptor) -> String {
    let mut text = pd.description.clone();
    if pd.dynamic {
        append_segment(
            &mut text,
            &format!("(syntax: {}key{}value)", pd.names[0], pd.assignment),
        );
    }
    if let Some(def) = pd.display_default() {
        append_segment(&mut text, &format!("(default: {def})"));
    }
    if let ValueKind::Enum { labels } = &pd.kind {
        append_segment(&mut text, &format!("(values: [{}])", labels.join(", ")));
    }
    text
}

fn append_segment(text: &mut String, segment: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(segment);
}
