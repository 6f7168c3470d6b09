/// Description text wrapping to a fixed column budget.
use std::fmt;

use super::formatter::RenderOptions;

/// Append `count` literal spaces to the sink.
pub(crate) fn pad(out: &mut dyn fmt::Write, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char(' ')?;
    }
    Ok(())
}

/// Wrap `text` at whitespace boundaries within the column budget.
///
/// The first word continues the line already started at `current_cols`.
/// Later words are joined by single spaces while they fit; a word that
/// does not fit starts a continuation line indented `indent_cols + 1`
/// spaces. A word wider than the whole budget is emitted unbroken.
///
/// # Errors
///
/// Propagates sink write failures unchanged.
pub fn wrap_description(
    out: &mut dyn fmt::Write,
    opts: &RenderOptions,
    indent_cols: usize,
    current_cols: usize,
    text: &str,
) -> fmt::Result {
    if text.is_empty() {
        return Ok(());
    }
    let max = opts.column_size;
    let mut current = current_cols;
    for (i, word) in text.split(' ').enumerate() {
        let width = word.chars().count();
        if width > max || current + 1 + width <= max {
            if i > 0 {
                out.write_char(' ')?;
                current += 1;
            }
            out.write_str(word)?;
            current += width;
        } else {
            out.write_char('\n')?;
            pad(out, indent_cols + 1)?;
            out.write_str(word)?;
            current = indent_cols + 1 + width;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_str(indent_cols: usize, current_cols: usize, column_size: usize, text: &str) -> String {
        let mut out = String::new();
        let opts = RenderOptions {
            column_size,
        };
        wrap_description(&mut out, &opts, indent_cols, current_cols, text).unwrap();
        out
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrap_str(5, 0, 30, "one two three"), "one two three");
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        assert_eq!(wrap_str(3, 0, 10, "alpha bravo"), "alpha\n    bravo");
    }

    #[test]
    fn test_overlong_word_is_not_broken() {
        assert_eq!(
            wrap_str(3, 0, 10, "a extraordinarily b"),
            "a extraordinarily\n    b"
        );
    }

    #[test]
    fn test_continuation_indent_width() {
        let wrapped = wrap_str(7, 0, 12, "first secondword");
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "        secondword");
    }

    #[test]
    fn test_continues_line_from_given_column() {
        assert_eq!(wrap_str(3, 70, 79, "abcdefgh nine"), "abcdefgh\n    nine");
    }

    #[test]
    fn test_empty_text_writes_nothing() {
        assert_eq!(wrap_str(3, 0, 10, ""), "");
    }

    #[test]
    fn test_no_trailing_spaces_before_breaks() {
        let wrapped = wrap_str(0, 0, 10, "alpha bravo charlie");
        for line in wrapped.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
