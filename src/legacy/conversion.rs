use super::definition::LegacyApp;
use crate::error::DefinitionConversionError;

/// A trait for custom data models that can be converted into a `LegacyApp`.
///
/// This is the primary extension point for making stepsmith format-agnostic.
/// Legacy definitions are stored in several on-disk dialects; by implementing
/// this trait on your own deserialization structs, you provide a translation
/// layer that lets the converter process your dialect without the core ever
/// learning about it.
///
/// # Example
///
/// ```rust,no_run
/// use stepsmith::prelude::*;
/// use stepsmith::error::DefinitionConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { key: String, label: String }
/// struct MyAppExport { title: String, steps: Vec<MyStep> }
///
/// // 2. Implement `IntoLegacyApp` for your top-level struct.
/// impl IntoLegacyApp for MyAppExport {
///     fn into_legacy_app(self) -> std::result::Result<LegacyApp, DefinitionConversionError> {
///         let mut app = LegacyApp::default();
///         app.general.title = self.title;
///         for step in self.steps {
///             // Your logic to convert `MyStep` into a `LegacyStepDefinition`
///             app.triggers.insert(step.key, LegacyStepDefinition::default());
///         }
///         Ok(app)
///     }
/// }
/// ```
pub trait IntoLegacyApp {
    /// Consumes the object and converts it into a canonical `LegacyApp`.
    fn into_legacy_app(self) -> Result<LegacyApp, DefinitionConversionError>;
}
