//! Template loading and `{{name}}` interpolation.
//!
//! Templates are plain text files under a single root directory, one per
//! rendered artifact kind. Interpolation is flat token replacement against a
//! string-keyed context; there are no conditionals or loops, because every
//! structural decision is made by the renderers before interpolation.

use crate::error::ConvertError;
use crate::mapping::StepCategory;
use ahash::AHashMap;
use std::path::{Path, PathBuf};

/// A flat interpolation context: placeholder name → replacement text.
pub type TemplateContext = AHashMap<&'static str, String>;

/// Replaces every `{{name}}` token with its context value.
///
/// Tokens without a context entry are left in place so a rendering bug is
/// visible in the output rather than silently erased. Replacements run in
/// sorted key order: a context value that itself contains a `{{token}}`
/// (a label literally holding one, say) interpolates the same way on every
/// run instead of depending on hash order.
pub fn interpolate(template: &str, context: &TemplateContext) -> String {
    let mut entries: Vec<_> = context.iter().collect();
    entries.sort_by_key(|(key, _)| *key);

    let mut contents = template.to_string();
    for (key, value) in entries {
        contents = contents.replace(&format!("{{{{{}}}}}", key), value);
    }
    contents
}

/// The five fixed templates, loaded eagerly from a template root.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub trigger: String,
    pub search: String,
    pub write: String,
    pub index: String,
    pub package: String,
}

impl TemplateSet {
    /// Reads all five templates from `root`. Any unreadable file is fatal;
    /// there is no fallback template.
    pub async fn load(root: &Path) -> Result<Self, ConvertError> {
        Ok(Self {
            trigger: read_template(root.join("trigger.template.js")).await?,
            search: read_template(root.join("search.template.js")).await?,
            write: read_template(root.join("write.template.js")).await?,
            index: read_template(root.join("index.template.js")).await?,
            package: read_template(root.join("package.template.json")).await?,
        })
    }

    /// The step template for a category.
    pub fn for_category(&self, category: StepCategory) -> &str {
        match category {
            StepCategory::Trigger => &self.trigger,
            StepCategory::Search => &self.search,
            StepCategory::Write => &self.write,
        }
    }
}

async fn read_template(path: PathBuf) -> Result<String, ConvertError> {
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ConvertError::TemplateRead { path, source })
}
