//! Bounded text rendering helpers.
//!
//! Log message bodies are bounded by [`MAX_LOG_MSG_LENGTH`](crate::limits::MAX_LOG_MSG_LENGTH);
//! overlong text is truncated, never rejected. These helpers keep truncation
//! on UTF-8 character boundaries so a bounded render is always valid text.

use std::fmt;

/// Returns the longest prefix of `text` that is at most `max_bytes` bytes
/// and ends on a character boundary.
pub fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Renders a format template plus arguments into a string of at most
/// `max_bytes` bytes.
///
/// This is the emission path's "printf-style templating": callers build the
/// arguments with `format_args!` and the result is truncated to the bound.
pub fn render_bounded(args: fmt::Arguments<'_>, max_bytes: usize) -> String {
    let mut rendered = args.to_string();
    if rendered.len() > max_bytes {
        let end = truncate_utf8(&rendered, max_bytes).len();
        rendered.truncate(end);
    }
    rendered
}
