/// The usage formatter capability: interchangeable options-block layout
/// strategies over a shared usage-line and commands-block skeleton.
use std::fmt;

use crate::model::{CommandDescriptor, ParameterDescriptor, UsageError, UsageModel};

use super::stacked::StackedUsageFormatter;
use super::unix::UnixUsageFormatter;
use super::wrap::{pad, wrap_description};

/// Columns between the end of the name column and the description column.
/// Shared with the commands-block spacing below so the two stay in step.
pub(crate) const NAME_DESCRIPTION_GAP: usize = 3;

/// Extra indentation applied to wrapped description text, relative to the
/// caller's base indent.
pub(crate) const DESCRIPTION_INDENT: usize = 6;

/// Fixed layout budget for a render call.
///
/// The renderer never measures the terminal; callers pick the budget.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Column budget for wrapping.
    pub column_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_size: 79,
        }
    }
}

/// Which options-block layout to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageStyle {
    /// Aligned columns: every description starts at one shared offset.
    #[default]
    Unix,
    /// Names on one line, description and annotations stacked underneath.
    Stacked,
}

/// Return the formatter strategy for a style.
#[must_use]
pub fn formatter_for(style: UsageStyle) -> Box<dyn UsageFormatter> {
    match style {
        UsageStyle::Unix => Box::new(UnixUsageFormatter),
        UsageStyle::Stacked => Box::new(StackedUsageFormatter),
    }
}

/// A usage-text layout strategy.
///
/// Implementations differ only in how the options block is laid out; the
/// usage line and the commands block are shared provided methods.
pub trait UsageFormatter: Send + Sync {
    /// Append the "Options:" block for `params`.
    ///
    /// Emits nothing when `params` is empty (no header line). `indent` is
    /// prefixed verbatim to every emitted line; `indent_count` is the
    /// column count used for continuation-line geometry.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvalidDescriptor` before anything is written
    /// when a descriptor has no names; sink failures propagate as
    /// `UsageError::Fmt`.
    fn append_options(
        &self,
        out: &mut dyn fmt::Write,
        opts: &RenderOptions,
        indent_count: usize,
        indent: &str,
        params: &[ParameterDescriptor],
    ) -> Result<(), UsageError>;

    /// Append the `Usage:` line for `model`, wrapped to the column budget.
    ///
    /// # Errors
    ///
    /// Sink failures propagate as `UsageError::Fmt`.
    fn append_usage_line(
        &self,
        out: &mut dyn fmt::Write,
        opts: &RenderOptions,
        indent_count: usize,
        indent: &str,
        model: &UsageModel,
    ) -> Result<(), UsageError> {
        let mut line = format!("Usage: {}", model.program_name);
        if !model.options.is_empty() {
            line.push_str(" [options]");
        }
        if !model.commands.is_empty() {
            line.push_str(" [command] [command options]");
        }
        if let Some(main) = &model.main_parameter {
            line.push(' ');
            line.push_str(main);
        }
        out.write_str(indent)?;
        wrap_description(out, opts, indent_count, indent.chars().count(), &line)?;
        out.write_char('\n')?;
        Ok(())
    }

    /// Append the "Commands:" block: one wrapped entry per command.
    ///
    /// Emits nothing when `commands` is empty.
    ///
    /// # Errors
    ///
    /// Sink failures propagate as `UsageError::Fmt`.
    fn append_commands(
        &self,
        out: &mut dyn fmt::Write,
        opts: &RenderOptions,
        indent_count: usize,
        indent: &str,
        commands: &[CommandDescriptor],
    ) -> Result<(), UsageError> {
        if commands.is_empty() {
            return Ok(());
        }
        writeln!(out, "{indent}  Commands:")?;
        for cmd in commands {
            let display = cmd.display_name();
            write!(out, "{indent}    {display}")?;
            pad(out, DESCRIPTION_INDENT)?;
            let current = indent.chars().count() + 4 + display.chars().count() + DESCRIPTION_INDENT;
            wrap_description(
                out,
                opts,
                indent_count + DESCRIPTION_INDENT,
                current,
                &cmd.description,
            )?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Render the full usage text: usage line, options block, commands block.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvalidDescriptor` for a malformed option list;
    /// sink failures propagate as `UsageError::Fmt`.
    fn usage(
        &self,
        out: &mut dyn fmt::Write,
        opts: &RenderOptions,
        indent: &str,
        model: &UsageModel,
    ) -> Result<(), UsageError> {
        let indent_count = indent.chars().count() + DESCRIPTION_INDENT;
        self.append_usage_line(out, opts, indent_count, indent, model)?;
        self.append_options(out, opts, indent_count, indent, &model.options)?;
        self.append_commands(out, opts, indent_count, indent, &model.commands)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueKind;

    fn model(program: &str) -> UsageModel {
        UsageModel {
            program_name: program.to_owned(),
            options: vec![],
            main_parameter: None,
            commands: vec![],
        }
    }

    fn param(names: &[&str], description: &str) -> ParameterDescriptor {
        ParameterDescriptor {
            names: names.iter().map(|n| (*n).to_owned()).collect(),
            required: false,
            description: description.to_owned(),
            default_value: None,
            password: false,
            dynamic: false,
            assignment: "=".to_owned(),
            kind: ValueKind::Flag,
            help_flag: false,
        }
    }

    fn command(name: &str, aliases: &[&str], description: &str) -> CommandDescriptor {
        CommandDescriptor {
            name: name.to_owned(),
            aliases: aliases.iter().map(|a| (*a).to_owned()).collect(),
            description: description.to_owned(),
        }
    }

    fn usage_str(model: &UsageModel) -> String {
        let mut out = String::new();
        formatter_for(UsageStyle::Unix)
            .usage(&mut out, &RenderOptions::default(), "", model)
            .unwrap();
        out
    }

    #[test]
    fn test_usage_line_plain() {
        assert_eq!(usage_str(&model("tool")), "Usage: tool\n");
    }

    #[test]
    fn test_usage_line_mentions_options_and_commands() {
        let mut m = model("tool");
        m.options = vec![param(&["-v"], "Verbose")];
        m.commands = vec![command("sync", &[], "Synchronize")];
        let rendered = usage_str(&m);
        assert!(rendered.starts_with("Usage: tool [options] [command] [command options]\n"));
    }

    #[test]
    fn test_usage_line_appends_main_parameter() {
        let mut m = model("tool");
        m.main_parameter = Some("<files>".to_owned());
        assert_eq!(usage_str(&m), "Usage: tool <files>\n");
    }

    #[test]
    fn test_commands_block_alias_display() {
        let mut m = model("tool");
        m.commands = vec![command("fetch", &["f"], "Fetch things")];
        let rendered = usage_str(&m);
        assert!(rendered.contains("  Commands:\n    fetch(f)      Fetch things\n"));
    }

    #[test]
    fn test_command_description_wraps_to_budget() {
        let mut m = model("tool");
        m.commands = vec![command("go", &[], "alpha bravo charlie delta echo")];
        let mut out = String::new();
        formatter_for(UsageStyle::Unix)
            .usage(
                &mut out,
                &RenderOptions {
                    column_size: 24,
                },
                "",
                &m,
            )
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        let start = lines.iter().position(|l| *l == "  Commands:").unwrap();
        assert_eq!(lines[start + 1], "    go      alpha bravo");
        assert_eq!(lines[start + 2], "             charlie");
        assert_eq!(lines[start + 3], "             delta echo");
    }

    #[test]
    fn test_usage_composes_blocks_in_order() {
        let mut m = model("tool");
        m.options = vec![param(&["-v"], "Verbose")];
        m.commands = vec![command("sync", &[], "Synchronize")];
        let rendered = usage_str(&m);
        let usage = rendered.find("Usage: ").unwrap();
        let options = rendered.find("  Options:").unwrap();
        let commands = rendered.find("  Commands:").unwrap();
        assert!(usage < options && options < commands);
    }

    #[test]
    fn test_formatter_for_selects_layout() {
        let mut m = model("tool");
        m.options = vec![param(&["-v"], "Verbose")];

        let mut unix = String::new();
        formatter_for(UsageStyle::Unix)
            .usage(&mut unix, &RenderOptions::default(), "", &m)
            .unwrap();
        let mut stacked = String::new();
        formatter_for(UsageStyle::Stacked)
            .usage(&mut stacked, &RenderOptions::default(), "", &m)
            .unwrap();

        assert!(unix.contains("    -v Verbose\n"));
        assert!(stacked.contains("    -v\n      Verbose\n"));
    }

    #[test]
    fn test_indent_prefixes_every_block_line() {
        let mut m = model("tool");
        m.options = vec![param(&["-v"], "Verbose")];
        m.commands = vec![command("sync", &[], "Synchronize")];
        let mut out = String::new();
        formatter_for(UsageStyle::Unix)
            .usage(&mut out, &RenderOptions::default(), "    ", &m)
            .unwrap();
        for line in out.lines() {
            assert!(line.is_empty() || line.starts_with("    "));
        }
    }
}
