//! Small string helpers shared by the normalizer and the text renderers.

use crate::util::constants::TRUNCATION_MARKER;

/// Cut `input` to at most `max_chars` characters, appending the ellipsis
/// marker when anything was removed.
///
/// Counts `char`s, never bytes, so multi-byte values are never split.
pub fn truncate_with_marker(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        None => input.to_owned(),
        Some((end, _)) => format!("{}{}", &input[..end], TRUNCATION_MARKER),
    }
}

/// Pad `input` with spaces to `width` characters.
pub fn pad_to(input: &str, width: usize) -> String {
    let len = input.chars().count();
    if len >= width {
        input.to_owned()
    } else {
        format!("{input}{}", " ".repeat(width - len))
    }
}
