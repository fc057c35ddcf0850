//! Greedy word wrapping by display width.

use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines no wider than `width` display columns.
///
/// Words are separated by single spaces; any run of whitespace in the input
/// counts as one separator. Continuation lines start with `indent`. A word
/// wider than `width` is never split: it gets a line of its own. An indent
/// that would push a fitting word past `width` is left off that line, so
/// every line fits except those holding a single over-long word.
///
/// Empty (or all-whitespace) input yields one empty line. A `width` of zero
/// disables wrapping.
pub fn wrap_text(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    if width == 0 {
        return vec![text.split_whitespace().collect::<Vec<_>>().join(" ")];
    }

    let indent_width = indent.width();
    let mut lines = Vec::new();
    let mut line = first.to_string();
    let mut line_width = first.width();

    for word in words {
        let word_width = word.width();

        if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }

        lines.push(std::mem::take(&mut line));
        line_width = 0;
        if indent_width + word_width <= width {
            line.push_str(indent);
            line_width = indent_width;
        }
        line.push_str(word);
        line_width += word_width;
    }

    lines.push(line);
    lines
}
