//! Renderers that turn legacy definitions into generated source text.
//!
//! Each renderer is a pure function from a slice of the canonical
//! [`LegacyApp`](crate::legacy::LegacyApp) to a string fragment or file body;
//! the only fallible ones are those that interpolate a loaded template.

pub mod field;
pub mod index;
pub mod manifest;
pub mod step;

pub use field::{HELP_TEXT_MIN_LENGTH, pad_help_text, render_field, render_sample};
pub use index::render_index;
pub use manifest::render_package_json;
pub use step::render_step;

use itertools::Itertools;

/// Normalizes a step key's separators: whitespace and dashes become single
/// underscores. The result names the generated file and seeds every other
/// derived name.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .join("_")
}

/// Camel-cases a step key (`new_contact` → `newContact`).
pub(crate) fn camel_case(key: &str) -> String {
    let normalized = normalize_key(key);
    let mut words = normalized.split('_');
    let first = words.next().unwrap_or_default().to_lowercase();
    let rest: String = words.map(capitalize).collect();
    format!("{}{}", first, rest)
}

/// Title-cases a step key into a display noun (`new_contact` → `New Contact`).
pub(crate) fn display_noun(key: &str) -> String {
    normalize_key(key).split('_').map(capitalize).join(" ")
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
