use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering and writing the converted app.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read template '{path}': {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write generated file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when converting a custom user format into a `LegacyApp`.
#[derive(Error, Debug, Clone)]
pub enum DefinitionConversionError {
    #[error("Invalid legacy definition: {0}")]
    ValidationError(String),
}
