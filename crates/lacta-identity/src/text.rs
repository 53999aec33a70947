//! # Text Normalization Helpers
//!
//! Whitespace and casing cleanup applied to free-text form fields before
//! they are stored or compared. Both helpers are total: any input string
//! produces an output string, with no failure path.

/// Trim the input and collapse every internal whitespace run into a
/// single ASCII space.
///
/// Unicode whitespace (tabs, newlines, non-breaking spaces) collapses
/// the same way as ordinary spaces.
pub fn sanitize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-case a name: lowercase each space-separated token, then
/// uppercase its first letter.
///
/// Blank input yields the empty string. Token count and punctuation are
/// preserved; casing is Unicode-aware, so multi-character case mappings
/// expand rather than truncate.
pub fn capitalize_name(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.split(' ')
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_token(token: &str) -> String {
    let lowered = token.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
