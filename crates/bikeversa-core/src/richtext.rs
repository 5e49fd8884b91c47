//! Rich-text length helpers.
//!
//! Descriptions are stored as HTML-bearing strings produced by the
//! editor widget. The length ceiling counts *visible* characters, so
//! markup tags are stripped before measuring. When a value is over
//! the ceiling it is truncated to the ceiling in raw characters; this
//! can cut through a tag, which matches the site's historical
//! behaviour and keeps the clamp idempotent.

use crate::constants::DESCRIPTION_MAX_CHARS;

/// Remove `<...>` tag spans from `input`.
///
/// A `<` with no matching `>` (or with nothing between the brackets)
/// is kept verbatim, like the editor's own counter did.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '<' {
            if let Some(close) = input[i + 1..].find('>') {
                if close > 0 {
                    // Skip everything up to and including the '>'.
                    let end = i + 1 + close;
                    while let Some(&(j, _)) = chars.peek() {
                        if j > end {
                            break;
                        }
                        chars.next();
                    }
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// Number of visible characters in `input`, markup excluded.
pub fn visible_len(input: &str) -> usize {
    strip_tags(input).chars().count()
}

/// Clamp `input` to the description ceiling.
///
/// Values whose visible length is within [`DESCRIPTION_MAX_CHARS`]
/// pass through unchanged; anything longer is truncated to the
/// ceiling measured in raw characters.
pub fn clamp_description(input: &str) -> String {
    clamp(input, DESCRIPTION_MAX_CHARS)
}

/// Clamp `input` to `max` visible characters (raw-character truncate).
pub fn clamp(input: &str, max: usize) -> String {
    if visible_len(input) <= max {
        input.to_string()
    } else {
        input.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_tags("<p>hello <b>world</b></p>"), "hello world");
    }

    #[test]
    fn keeps_unclosed_and_empty_brackets() {
        assert_eq!(strip_tags("a < b"), "a < b");
        assert_eq!(strip_tags("a <> b"), "a <> b");
    }

    #[test]
    fn short_values_pass_through() {
        let v = "<p>short</p>";
        assert_eq!(clamp_description(v), v);
    }

    #[test]
    fn long_values_truncate_raw() {
        let v = format!("<p>{}</p>", "x".repeat(700));
        let clamped = clamp(&v, 620);
        assert_eq!(clamped.chars().count(), 620);
    }

    #[test]
    fn clamp_is_idempotent() {
        let v = format!("<b>{}</b>", "y".repeat(1000));
        let once = clamp(&v, 620);
        let twice = clamp(&once, 620);
        assert_eq!(once, twice);
    }

    #[test]
    fn visible_len_ignores_markup() {
        assert_eq!(visible_len("<b>abc</b>"), 3);
        assert_eq!(visible_len(""), 0);
    }
}
