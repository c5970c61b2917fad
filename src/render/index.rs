use super::{camel_case, capitalize, normalize_key};
use crate::legacy::{LegacyApp, LegacyStepDefinition};
use crate::mapping::StepCategory;
use crate::template::{TemplateContext, TemplateSet, interpolate};
use indexmap::IndexMap;

const MAPPING_INDENT: &str = "    ";

/// Renders the barrel file that aggregates every generated step module.
///
/// Each step contributes one `require` line and one `key: moduleRef,`
/// mapping line in its category section. Entries follow the insertion order
/// of the legacy category maps; that order is observable in the output and
/// is never re-sorted.
pub fn render_index(app: &LegacyApp, templates: &TemplateSet) -> String {
    let mut requires = Vec::new();
    let triggers = category_section(StepCategory::Trigger, app.steps(StepCategory::Trigger), &mut requires);
    let searches = category_section(StepCategory::Search, app.steps(StepCategory::Search), &mut requires);
    let writes = category_section(StepCategory::Write, app.steps(StepCategory::Write), &mut requires);

    let mut context = TemplateContext::default();
    context.insert("requires", requires.join("\n"));
    context.insert("triggers", triggers);
    context.insert("searches", searches);
    context.insert("writes", writes);

    interpolate(&templates.index, &context)
}

fn category_section(
    category: StepCategory,
    steps: &IndexMap<String, LegacyStepDefinition>,
    requires: &mut Vec<String>,
) -> String {
    let mut mappings = Vec::new();
    for key in steps.keys() {
        let variable = format!(
            "{}{}",
            camel_case(key),
            capitalize(category.platform_name())
        );
        requires.push(format!(
            "const {} = require('./{}/{}');",
            variable,
            category.output_dir(),
            normalize_key(key)
        ));
        mappings.push(format!("{}[{}.key]: {},", MAPPING_INDENT, variable, variable));
    }
    mappings.join("\n")
}
