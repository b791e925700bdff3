//! Label text wrapping.
//!
//! Text width is estimated with a fixed average character width rather than
//! measured, so wrapping is deterministic and font independent.

/// Inner padding of a label on every side.
pub const LABEL_PADDING: f64 = 6.0;

/// Estimated advance of one character of label text.
pub const LABEL_CHAR_WIDTH: f64 = 6.0;

/// Distance between consecutive label baselines.
pub const LABEL_LINE_HEIGHT: f64 = 14.0;

/// Wraps `text` to fit a label of the given size.
///
/// Words are packed greedily; a word longer than a whole line is split.
/// Explicit newlines start a new line. Lines that do not fit the label
/// height are dropped.
///
/// # Examples
///
/// ```
/// # use folio::export::wrap_label_text;
/// let lines = wrap_label_text("ship orders nightly", 78.0, 60.0);
/// assert_eq!(lines, vec!["ship orders", "nightly"]);
/// ```
pub fn wrap_label_text(text: &str, width: f64, height: f64) -> Vec<String> {
    let chars_per_line = ((width - 2.0 * LABEL_PADDING) / LABEL_CHAR_WIDTH)
        .floor()
        .max(1.0) as usize;
    let max_lines = ((height - 2.0 * LABEL_PADDING) / LABEL_LINE_HEIGHT)
        .floor()
        .max(0.0) as usize;

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        wrap_paragraph(paragraph, chars_per_line, &mut lines);
        if lines.len() >= max_lines {
            break;
        }
    }
    lines.truncate(max_lines);
    lines
}

fn wrap_paragraph(paragraph: &str, limit: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + chars.len() <= limit {
            current.push(' ');
            current.extend(chars.iter());
            current_len += 1 + chars.len();
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }

        while chars.len() > limit {
            let rest = chars.split_off(limit);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        current_len = chars.len();
        current = chars.into_iter().collect();
    }

    lines.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_word_after_text_starts_new_lines() {
        // 40 wide fits 4 chars
        let lines = wrap_label_text("ab abcdefghij", 40.0, 200.0);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_label_text("New Label", 150.0, 40.0), vec!["New Label"]);
    }

    #[test]
    fn test_overflow_lines_dropped() {
        // 150 wide fits 23 chars, 40 high fits 2 lines
        let text = "the quick brown fox jumps over the lazy dog and keeps running";
        let lines = wrap_label_text(text, 150.0, 40.0);
        assert_eq!(lines, vec!["the quick brown fox", "jumps over the lazy dog"]);
    }

    #[test]
    fn test_long_word_is_split() {
        let lines = wrap_label_text("abcdefghijkl", 36.0, 100.0);
        assert_eq!(lines, vec!["abcd", "efgh", "ijkl"]);
    }

    #[test]
    fn test_newlines_break_lines() {
        let lines = wrap_label_text("one\n\ntwo", 150.0, 100.0);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_degenerate_label() {
        assert!(wrap_label_text("hidden", 10.0, 5.0).is_empty());
        assert_eq!(wrap_label_text("ab", 1.0, 50.0), vec!["a", "b"]);
    }
}
