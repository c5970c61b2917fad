//! Common test utilities for building legacy app definitions.
use std::path::PathBuf;
use stepsmith::prelude::*;

/// The template root shipped with the crate.
#[allow(dead_code)]
pub fn templates_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Creates a field definition with sensible defaults for tests.
#[allow(dead_code)]
pub fn create_field(field_type: Option<&str>, label: &str) -> LegacyFieldDefinition {
    LegacyFieldDefinition {
        field_type: field_type.map(str::to_string),
        label: label.to_string(),
        help_text: Some(serde_json::json!("A sufficiently long help text.")),
        required: Some(true),
        placeholder: None,
    }
}

/// Creates a step with a single `name` field and no sample result fields.
#[allow(dead_code)]
pub fn create_simple_step() -> LegacyStepDefinition {
    let mut step = LegacyStepDefinition::default();
    step.fields
        .insert("name".to_string(), create_field(Some("unicode"), "Name"));
    step
}

/// Creates a step with two fields and sample result fields.
///
/// The sample map deliberately mixes a table hit (`integer`) with a
/// case-sensitive miss (`Unicode`).
#[allow(dead_code)]
pub fn create_step_with_sample() -> LegacyStepDefinition {
    let mut step = LegacyStepDefinition::default();
    step.fields
        .insert("email".to_string(), create_field(Some("unicode"), "Email"));
    step.fields.insert(
        "age".to_string(),
        LegacyFieldDefinition {
            field_type: Some("integer".to_string()),
            label: "Age".to_string(),
            help_text: None,
            required: None,
            placeholder: Some("e.g. 42".to_string()),
        },
    );

    let mut sample = indexmap::IndexMap::new();
    sample.insert(
        "id".to_string(),
        SampleFieldDefinition {
            field_type: Some("integer".to_string()),
            label: "ID".to_string(),
        },
    );
    sample.insert(
        "email".to_string(),
        SampleFieldDefinition {
            field_type: Some("Unicode".to_string()),
            label: "Email".to_string(),
        },
    );
    step.sample_result_fields = Some(sample);
    step
}

/// Creates an app with one trigger, one search, and one action.
#[allow(dead_code)]
pub fn create_simple_app() -> LegacyApp {
    let mut app = LegacyApp::default();
    app.general.title = "Contact Book".to_string();
    app.general.description = "Keeps track of contacts.".to_string();
    app.triggers
        .insert("new_contact".to_string(), create_step_with_sample());
    app.searches
        .insert("find_contact".to_string(), create_simple_step());
    app.actions
        .insert("create_contact".to_string(), create_simple_step());
    app
}
