use crate::legacy::{LegacyFieldDefinition, LegacyStepDefinition};
use crate::mapping::{lookup_sample_type, map_field_type};
use itertools::Itertools;

/// Minimum help-text length the target platform accepts.
pub const HELP_TEXT_MIN_LENGTH: usize = 10;

const BRACE_INDENT: &str = "      ";
const PROPERTY_INDENT: &str = "        ";

/// Ensures help text meets the platform minimum length.
///
/// Missing or non-string help text becomes the bare warning message; short
/// text gets the warning appended. The minimum is counted in characters,
/// not bytes, so non-ASCII help text is measured the way a reader would. The warning lands verbatim in the
/// generated source so the maintainer editing the output sees which fields
/// need attention, instead of shipping code that validates with empty help.
pub fn pad_help_text(text: Option<&serde_json::Value>) -> String {
    let warning = format!("(help text must be at least {} characters)", HELP_TEXT_MIN_LENGTH);
    match text.and_then(|value| value.as_str()) {
        None => warning,
        Some(text) if text.chars().count() < HELP_TEXT_MIN_LENGTH => {
            format!("{} {}", text, warning)
        }
        Some(text) => text.to_string(),
    }
}

/// Renders one field definition as an object-literal fragment.
///
/// The property order is fixed: `key`, `label`, `helpText`, `type`,
/// `required`, then `placeholder` when one is given. Malformed labels and
/// placeholders are quoted verbatim; keeping the generated source valid in
/// that case is the maintainer's job, not the converter's.
pub fn render_field(definition: &LegacyFieldDefinition, key: &str) -> String {
    let field_type = map_field_type(definition.field_type.as_deref());
    let help_text = pad_help_text(definition.help_text.as_ref());
    let required = definition.required.unwrap_or(false);

    let mut properties = vec![
        format!("key: '{}'", key),
        format!("label: '{}'", definition.label),
        format!("helpText: '{}'", help_text),
        format!("type: '{}'", field_type),
        format!("required: {}", required),
    ];
    if let Some(placeholder) = definition.placeholder.as_deref()
        && !placeholder.is_empty()
    {
        properties.push(format!("placeholder: '{}'", placeholder));
    }

    let body = properties
        .iter()
        .map(|property| format!("{}{}", PROPERTY_INDENT, property))
        .join(",\n");
    format!("{}{{\n{}\n{}}}", BRACE_INDENT, body, BRACE_INDENT)
}

/// Renders a step's sample result fields as a `sample: { ... }` literal.
///
/// Sample types go through the raw, case-sensitive table lookup (the legacy
/// converter never lower-cased them here); a miss renders an empty type
/// string rather than falling back to `'string'`.
pub fn render_sample(definition: &LegacyStepDefinition) -> String {
    let Some(sample_fields) = definition
        .sample_result_fields
        .as_ref()
        .filter(|fields| !fields.is_empty())
    else {
        return String::new();
    };

    let entries = sample_fields
        .iter()
        .map(|(key, spec)| {
            let sample_type = spec
                .field_type
                .as_deref()
                .and_then(lookup_sample_type)
                .unwrap_or("");
            format!(
                "{}{}: {{ type: '{}', label: '{}' }}",
                BRACE_INDENT, key, sample_type, spec.label
            )
        })
        .join(",\n");
    format!("    sample: {{\n{}\n    }}", entries)
}
