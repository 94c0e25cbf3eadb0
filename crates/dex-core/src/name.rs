//! Display-name normalization.

/// Upper-case the first character of `name`, leaving the rest untouched.
///
/// Works on Unicode scalars, so a first character whose upper-case form
/// expands (`ß` → `SS`) is expanded in place. The empty string maps to itself.
#[must_use]
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
