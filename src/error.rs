//! Error types for model scaffolding

use thiserror::Error;

/// Errors that can occur during scaffolding
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Structurally unusable input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Name is not a valid identifier in the target language
    #[error("Invalid identifier: '{name}' is not a valid {language} identifier")]
    InvalidIdentifier {
        /// The offending name
        name: String,
        /// Target language display name
        language: String,
    },

    /// Template not found
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template registration failed
    #[error("Template registration failed: {0}")]
    Registration(#[from] handlebars::TemplateError),

    /// Template rendering error
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Write failed
    #[error("Write failed: {0}")]
    WriteFailed(String),
}
