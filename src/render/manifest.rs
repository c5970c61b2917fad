use crate::legacy::LegacyApp;
use crate::template::{TemplateContext, TemplateSet, interpolate};
use itertools::Itertools;

/// Renders the package manifest from the app's `general` metadata.
/// The package name is the dashed, lower-cased form of the app title; the
/// description is copied verbatim.
pub fn render_package_json(app: &LegacyApp, templates: &TemplateSet) -> String {
    let mut context = TemplateContext::default();
    context.insert("name", dashed_identifier(&app.general.title));
    context.insert("description", app.general.description.clone());

    interpolate(&templates.package, &context)
}

fn dashed_identifier(title: &str) -> String {
    title
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .join("-")
}
