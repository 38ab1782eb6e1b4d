//! Name-casing helpers for the conversion engine

/// Convert a snake_case name to camelCase
///
/// Replaces each `_` immediately followed by an ASCII lowercase letter with
/// that letter uppercased. All other characters pass through, including
/// underscores next to digits or uppercase runs. Idempotent on names that
/// are already camelCase.
pub(crate) fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Lowercase only the first character of a name
///
/// The rest of the string is left untouched; an empty string stays empty.
pub(crate) fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
