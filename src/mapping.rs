//! Static vocabulary tables for the legacy → platform schema translation.

/// The fixed legacy field-type table. Lookup keys are the lower-cased legacy
/// tokens; values are the platform type names.
const FIELD_TYPES: [(&str, &str); 8] = [
    ("unicode", "string"),
    ("textarea", "text"),
    ("integer", "integer"),
    ("float", "number"),
    ("boolean", "boolean"),
    ("datetime", "datetime"),
    ("file", "file"),
    ("password", "password"),
];

/// Translates a legacy field-type token into its platform equivalent.
///
/// The token is lower-cased before lookup. An absent or unrecognized token
/// maps to `"string"` — unknown types are a valid, silent outcome, not an
/// error. No legacy definition may fail conversion over a field type.
pub fn map_field_type(token: Option<&str>) -> &'static str {
    let Some(token) = token else {
        return "string";
    };
    let token = token.to_lowercase();
    FIELD_TYPES
        .iter()
        .find(|(legacy, _)| *legacy == token)
        .map(|(_, platform)| *platform)
        .unwrap_or("string")
}

/// Raw, case-sensitive lookup used only by the sample renderer.
///
/// The legacy converter this reproduces resolved sample-field types straight
/// against the table without lower-casing, so `"Unicode"` misses where the
/// input-field path would hit. A miss yields `None` and renders as an empty
/// type string. Kept separate from [`map_field_type`] so the two observed
/// behaviors stay independent.
pub fn lookup_sample_type(token: &str) -> Option<&'static str> {
    FIELD_TYPES
        .iter()
        .find(|(legacy, _)| *legacy == token)
        .map(|(_, platform)| *platform)
}

/// The three legacy step categories. This set is closed: the converter never
/// iterates anything outside it, so there is no fallback translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepCategory {
    Trigger,
    Search,
    Write,
}

impl StepCategory {
    /// All categories, in the fixed order the generated index file uses.
    pub const ALL: [StepCategory; 3] = [
        StepCategory::Trigger,
        StepCategory::Search,
        StepCategory::Write,
    ];

    /// The legacy category name (`triggers` / `searches` / `actions`).
    pub fn legacy_name(self) -> &'static str {
        match self {
            StepCategory::Trigger => "triggers",
            StepCategory::Search => "searches",
            StepCategory::Write => "actions",
        }
    }

    /// The platform category name, also the template identifier.
    pub fn platform_name(self) -> &'static str {
        match self {
            StepCategory::Trigger => "trigger",
            StepCategory::Search => "search",
            StepCategory::Write => "write",
        }
    }

    /// The output directory the category's step files are written into.
    pub fn output_dir(self) -> &'static str {
        match self {
            StepCategory::Trigger => "triggers",
            StepCategory::Search => "searches",
            StepCategory::Write => "writes",
        }
    }
}

impl std::fmt::Display for StepCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.platform_name())
    }
}
