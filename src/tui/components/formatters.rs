// Text and number formatters
//
// Shared formatting utilities for the TUI. Widths are terminal columns
// (unicode display width), never byte lengths.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a large number with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Format a number compactly with K/M suffixes
pub fn format_compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        n.to_string()
    }
}

/// Cut `text` to at most `width` columns, ending in `…` when shortened
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let target = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Word-wrap `text` into at most `max_lines` lines of `width` columns.
/// Overflow is marked with `…` on the last line. Words longer than a line
/// are hard-broken.
pub fn wrap_to_width(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    'words: for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                continue 'words;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                if lines.len() == max_lines {
                    overflow = true;
                    break 'words;
                }
                continue;
            }
            // Word alone is wider than a line: hard break it
            let (head, tail) = split_at_width(word, width);
            lines.push(head.to_string());
            if lines.len() == max_lines {
                overflow = true;
                break 'words;
            }
            word = tail;
        }
    }

    if !overflow && !current.is_empty() {
        lines.push(current);
    }

    if overflow {
        if let Some(last) = lines.last_mut() {
            let mut marked = truncate_to_width(last, width.saturating_sub(1));
            if !marked.ends_with('…') {
                marked.push('…');
            }
            *last = marked;
        }
    }

    lines
}

fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            // Always make progress, even for a glyph wider than the line
            let at = if i == 0 { c.len_utf8() } else { i };
            return word.split_at(at);
        }
        used += w;
    }
    (word, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_with_separators() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_compact_number(954_356), "954K");
        assert_eq!(format_compact_number(1_500_000), "1.5M");
    }

    #[test]
    fn truncation_counts_display_columns() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("headline", 5), "head…");
        // Wide glyphs take two columns each
        assert_eq!(truncate_to_width("日本語ニュース", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_to_width("markets rally as rates hold steady", 12, 5);
        assert_eq!(lines, vec!["markets", "rally as", "rates hold", "steady"]);
    }

    #[test]
    fn wrap_marks_overflow_on_last_line() {
        let lines = wrap_to_width("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with('…'), "{:?}", lines);
        assert!(lines[1].width() <= 9);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let lines = wrap_to_width("supercalifragilistic", 8, 3);
        assert_eq!(lines, vec!["supercal", "ifragili", "stic"]);
    }
}
