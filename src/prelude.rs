//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! stepsmith crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use stepsmith::prelude::*;
//!
//! # async fn run_example() -> Result<()> {
//! let app = LegacyApp::default();
//! convert_app(&app, Path::new("templates"), Path::new("out")).await?;
//! # Ok(())
//! # }
//! ```

// Core conversion
pub use crate::convert::convert_app;

// Canonical data model and the conversion seam
pub use crate::legacy::{
    GeneralInfo, IntoLegacyApp, LegacyApp, LegacyFieldDefinition, LegacyStepDefinition,
    SampleFieldDefinition, coerce_required,
};

// Vocabulary mapping
pub use crate::mapping::{StepCategory, map_field_type};

// Renderers
pub use crate::render::{
    pad_help_text, render_field, render_index, render_package_json, render_sample, render_step,
};

// Templates
pub use crate::template::TemplateSet;

// Error types
pub use crate::error::{ConvertError, DefinitionConversionError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
