//! Unit tests for the vocabulary mapping, help-text sanitizer, and the field
//! and sample fragment renderers.
mod common;
use common::*;
use stepsmith::mapping::lookup_sample_type;
use stepsmith::prelude::*;

#[test]
fn test_map_field_type_known_tokens() {
    assert_eq!(map_field_type(Some("unicode")), "string");
    assert_eq!(map_field_type(Some("textarea")), "text");
    assert_eq!(map_field_type(Some("integer")), "integer");
    assert_eq!(map_field_type(Some("float")), "number");
    assert_eq!(map_field_type(Some("boolean")), "boolean");
    assert_eq!(map_field_type(Some("datetime")), "datetime");
    assert_eq!(map_field_type(Some("file")), "file");
    assert_eq!(map_field_type(Some("password")), "password");
}

#[test]
fn test_map_field_type_is_case_insensitive() {
    assert_eq!(map_field_type(Some("UNICODE")), "string");
    assert_eq!(map_field_type(Some("Float")), "number");
}

#[test]
fn test_map_field_type_falls_back_to_string() {
    assert_eq!(map_field_type(None), "string");
    assert_eq!(map_field_type(Some("")), "string");
    assert_eq!(map_field_type(Some("widget")), "string");
}

#[test]
fn test_sample_type_lookup_is_case_sensitive() {
    // The sample renderer path never lower-cases; this divergence from
    // map_field_type is load-bearing legacy behavior.
    assert_eq!(lookup_sample_type("unicode"), Some("string"));
    assert_eq!(lookup_sample_type("Unicode"), None);
    assert_eq!(lookup_sample_type("widget"), None);
}

#[test]
fn test_pad_help_text_non_string() {
    let expected = "(help text must be at least 10 characters)";
    assert_eq!(pad_help_text(None), expected);
    assert_eq!(pad_help_text(Some(&serde_json::json!(42))), expected);
    assert_eq!(pad_help_text(Some(&serde_json::json!(null))), expected);
}

#[test]
fn test_pad_help_text_short_string() {
    assert_eq!(
        pad_help_text(Some(&serde_json::json!("hi"))),
        "hi (help text must be at least 10 characters)"
    );
    // Length is measured in characters: five accented letters are ten UTF-8
    // bytes but still short.
    assert_eq!(
        pad_help_text(Some(&serde_json::json!("ééééé"))),
        "ééééé (help text must be at least 10 characters)"
    );
}

#[test]
fn test_pad_help_text_long_enough() {
    assert_eq!(
        pad_help_text(Some(&serde_json::json!("this is long enough"))),
        "this is long enough"
    );
}

#[test]
fn test_coerce_required_truthiness() {
    assert!(!coerce_required(None));
    assert!(!coerce_required(Some(&serde_json::json!(null))));
    assert!(!coerce_required(Some(&serde_json::json!(false))));
    assert!(!coerce_required(Some(&serde_json::json!(0))));
    assert!(!coerce_required(Some(&serde_json::json!(""))));

    assert!(coerce_required(Some(&serde_json::json!(true))));
    assert!(coerce_required(Some(&serde_json::json!(1))));
    assert!(coerce_required(Some(&serde_json::json!("yes"))));
}

#[test]
fn test_render_field_defaults() {
    let definition = LegacyFieldDefinition {
        field_type: None,
        label: "Foo".to_string(),
        help_text: None,
        required: None,
        placeholder: None,
    };
    let fragment = render_field(&definition, "foo");

    assert!(fragment.contains("key: 'foo'"));
    assert!(fragment.contains("type: 'string'"));
    assert!(fragment.contains("required: false"));
    assert!(fragment.contains("helpText: '(help text must be at least 10 characters)'"));
    assert!(!fragment.contains("placeholder"));
}

#[test]
fn test_render_field_placeholder_is_last_property() {
    let definition = LegacyFieldDefinition {
        field_type: Some("integer".to_string()),
        label: "Bar".to_string(),
        help_text: Some(serde_json::json!("A number the API expects.")),
        required: Some(true),
        placeholder: Some("e.g. 123".to_string()),
    };
    let fragment = render_field(&definition, "bar");

    assert!(fragment.contains("placeholder: 'e.g. 123'"));
    let last_property = fragment
        .lines()
        .rev()
        .find(|line| line.contains(':'))
        .unwrap();
    assert!(last_property.contains("placeholder"));
}

#[test]
fn test_render_field_layout() {
    let fragment = render_field(&create_field(Some("unicode"), "Name"), "name");
    let lines: Vec<&str> = fragment.lines().collect();

    assert_eq!(lines.first(), Some(&"      {"));
    assert_eq!(lines.last(), Some(&"      }"));
    for property in &lines[1..lines.len() - 1] {
        assert!(property.starts_with("        "));
    }
    // All but the final property end with a comma.
    for property in &lines[1..lines.len() - 2] {
        assert!(property.ends_with(','));
    }
}

#[test]
fn test_render_sample_entries() {
    let step = create_step_with_sample();
    let sample = render_sample(&step);

    assert!(sample.starts_with("    sample: {"));
    assert!(sample.contains("id: { type: 'integer', label: 'ID' }"));
    // 'Unicode' misses the case-sensitive lookup and renders an empty type.
    assert!(sample.contains("email: { type: '', label: 'Email' }"));
}

#[test]
fn test_render_sample_empty() {
    assert_eq!(render_sample(&create_simple_step()), "");

    let mut step = create_simple_step();
    step.sample_result_fields = Some(indexmap::IndexMap::new());
    assert_eq!(render_sample(&step), "");
}

#[test]
fn test_error_display() {
    let err = ConvertError::TemplateRead {
        path: "templates/trigger.template.js".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.to_string().contains("trigger.template.js"));

    let conversion_err = DefinitionConversionError::ValidationError("bad export".to_string());
    assert!(conversion_err.to_string().contains("bad export"));
}
