use crate::mapping::StepCategory;
use indexmap::IndexMap;

/// The complete, canonical definition of a legacy app, ready for conversion.
/// This is the target structure for any custom data model conversion.
///
/// The three step-category maps use `IndexMap` because their insertion order
/// is observable in the generated index file and must be preserved.
#[derive(Debug, Clone, Default)]
pub struct LegacyApp {
    pub general: GeneralInfo,
    pub triggers: IndexMap<String, LegacyStepDefinition>,
    pub searches: IndexMap<String, LegacyStepDefinition>,
    pub actions: IndexMap<String, LegacyStepDefinition>,
}

impl LegacyApp {
    /// The step map for a category.
    pub fn steps(&self, category: StepCategory) -> &IndexMap<String, LegacyStepDefinition> {
        match category {
            StepCategory::Trigger => &self.triggers,
            StepCategory::Search => &self.searches,
            StepCategory::Write => &self.actions,
        }
    }
}

/// Top-level app metadata, copied into the generated package manifest.
#[derive(Debug, Clone, Default)]
pub struct GeneralInfo {
    pub title: String,
    pub description: String,
}

/// Defines a single trigger, search, or action step in the legacy app.
/// `fields` is an ordered mapping: field fragments appear in the generated
/// step file in the order the legacy definition listed them.
#[derive(Debug, Clone, Default)]
pub struct LegacyStepDefinition {
    pub fields: IndexMap<String, LegacyFieldDefinition>,
    pub sample_result_fields: Option<IndexMap<String, SampleFieldDefinition>>,
}

/// Defines one input field of a step.
///
/// Every member except `label` is optional: legacy definitions are not
/// validated up front, and a field with missing or malformed data must still
/// produce a renderable fragment. `help_text` stays a raw JSON value so that
/// non-string help text (seen in the wild) is representable and can be
/// coerced at render time.
#[derive(Debug, Clone, Default)]
pub struct LegacyFieldDefinition {
    pub field_type: Option<String>,
    pub label: String,
    pub help_text: Option<serde_json::Value>,
    pub required: Option<bool>,
    pub placeholder: Option<String>,
}

/// Coerces a raw legacy `required` value to a boolean, truthiness-style.
///
/// Legacy exports carry `required` as whatever the authoring tool emitted:
/// a boolean, `1`/`0`, a string, or nothing at all. Absent, `null`, `false`,
/// zero, and the empty string coerce to `false`; everything else is `true`.
/// Malformed field data never aborts a conversion, so there is no error
/// path here.
pub fn coerce_required(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(serde_json::Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

/// Defines one entry of a step's sample result shape.
#[derive(Debug, Clone, Default)]
pub struct SampleFieldDefinition {
    pub field_type: Option<String>,
    pub label: String,
}
