//! Display width measurement for cell content.
//!
//! Widths are terminal columns, not bytes or code points: CJK and emoji
//! count as 2, combining marks as 0. A cell that spans several lines is as
//! wide as its widest line, since it is drawn as a padded block.

use unicode_width::UnicodeWidthStr;

/// Returns the display width of `s`, taking the widest line for multi-line text.
///
/// # Example
///
/// ```rust
/// use csview_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本語"), 6);
/// assert_eq!(display_width("short\nmuch longer"), 11);
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }
    s.split('\n').map(line_width).max().unwrap_or(0)
}

/// Returns the display width of raw field bytes.
///
/// Same contract as [`display_width`], except a line that is not valid UTF-8
/// counts one column per byte. Never fails.
///
/// ```rust
/// use csview_render::display_width_bytes;
///
/// assert_eq!(display_width_bytes("日本".as_bytes()), 4);
/// assert_eq!(display_width_bytes(b"ab\xffcd"), 5);
/// ```
pub fn display_width_bytes(bytes: &[u8]) -> usize {
    bytes
        .split(|&b| b == b'\n')
        .map(|line| match std::str::from_utf8(line) {
            Ok(text) => line_width(text),
            Err(_) => line.strip_suffix(b"\r").unwrap_or(line).len(),
        })
        .max()
        .unwrap_or(0)
}

/// Splits cell content into the lines it occupies on screen.
///
/// Always yields at least one line so an empty cell still takes a row.
pub fn cell_lines(s: &str) -> Vec<&str> {
    s.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Cuts `s` to at most `max_width` display columns without splitting a character.
///
/// Prefixes are measured as whole strings, the same way [`display_width`]
/// measures a line, so modifiers such as VS16 and control characters count
/// exactly as they will when the cell is laid out. The result may be narrower
/// than `max_width` when the next character is wide and would straddle the
/// limit.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    if s.width() <= max_width {
        return s;
    }
    for (idx, c) in s.char_indices() {
        if s[..idx + c.len_utf8()].width() > max_width {
            return &s[..idx];
        }
    }
    s
}

fn line_width(line: &str) -> usize {
    line.strip_suffix('\r').unwrap_or(line).width()
}
