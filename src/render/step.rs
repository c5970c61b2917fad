use super::{camel_case, display_noun, normalize_key, render_field, render_sample};
use crate::legacy::LegacyStepDefinition;
use crate::mapping::StepCategory;
use crate::template::{TemplateContext, TemplateSet, interpolate};
use itertools::Itertools;

/// Renders the full file body for one step by interpolating the category's
/// template with the step's naming context and field fragments.
pub fn render_step(
    category: StepCategory,
    definition: &LegacyStepDefinition,
    key: &str,
    templates: &TemplateSet,
) -> String {
    let noun = display_noun(key);
    let fields = definition
        .fields
        .iter()
        .map(|(field_key, field)| render_field(field, field_key))
        .join(",\n");
    let sample = render_sample(definition);
    let sample = if sample.is_empty() {
        sample
    } else {
        format!("{},\n", sample)
    };

    let mut context = TemplateContext::default();
    context.insert("key", normalize_key(key));
    context.insert("camel", camel_case(key));
    context.insert("lowerNoun", noun.to_lowercase());
    context.insert("noun", noun);
    context.insert("fields", fields);
    context.insert("sample", sample);

    interpolate(templates.for_category(category), &context)
}
