//! # Stepsmith - Legacy App Definition Converter
//!
//! **Stepsmith** is a one-shot batch code generator that converts a legacy
//! declarative app definition (triggers, searches, and actions with typed
//! input fields) into the newer platform's file-per-step convention: one
//! generated JavaScript module per step, an aggregating `index.js`, and a
//! `package.json` manifest.
//!
//! ## Core Workflow
//!
//! The converter is format-agnostic. It operates on a canonical in-memory
//! model of a legacy app. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your legacy definition format (e.g., from
//!     JSON) into your own Rust structs.
//! 2.  **Convert to the Canonical Model**: Implement the [`IntoLegacyApp`]
//!     trait for your structs to provide a translation layer into
//!     [`LegacyApp`].
//! 3.  **Convert**: Call [`convert_app`] with a template root and an output
//!     directory. Every step is rendered through its category template and
//!     written concurrently; the index and manifest are written alongside.
//!
//! Malformed field data never aborts a conversion: unknown field types fall
//! back to `"string"`, missing or short help text gets a visible warning
//! suffix, and a missing `required` flag defaults to `false`. The only fatal
//! failures are unreadable templates and file-system write errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stepsmith::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut app = LegacyApp::default();
//!     app.general.title = "Example App".to_string();
//!     app.general.description = "Example description".to_string();
//!
//!     let mut step = LegacyStepDefinition::default();
//!     step.fields.insert(
//!         "name".to_string(),
//!         LegacyFieldDefinition {
//!             field_type: Some("unicode".to_string()),
//!             label: "Name".to_string(),
//!             help_text: Some(serde_json::json!("The contact's full name.")),
//!             required: Some(true),
//!             placeholder: None,
//!         },
//!     );
//!     app.triggers.insert("new_contact".to_string(), step);
//!
//!     convert_app(&app, Path::new("templates"), Path::new("generated-app")).await?;
//!     Ok(())
//! }
//! ```
//!
//! [`IntoLegacyApp`]: crate::legacy::IntoLegacyApp
//! [`LegacyApp`]: crate::legacy::LegacyApp
//! [`convert_app`]: crate::convert::convert_app

pub mod convert;
pub mod error;
pub mod legacy;
pub mod mapping;
pub mod prelude;
pub mod render;
pub mod template;
