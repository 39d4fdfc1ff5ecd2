//! Name transformation services mapping logical names to file base names
//!
//! Transformers are pure: the same input under the same configuration always
//! yields the same base name, and no transformer appends a file extension or
//! path separators.

use crate::options::{FileNameCasing, LanguageOptions};

/// Maps the logical context name to a file base name
pub trait ContextNameTransformer {
    /// Transform the context name, extension excluded
    fn transform_context_file_name(&self, context_name: &str) -> String;
}

/// Maps an entity display name to a file base name
pub trait EntityNameTransformer {
    /// Transform the entity display name, extension excluded
    fn transform_entity_file_name(&self, display_name: &str) -> String;
}

impl<F> ContextNameTransformer for F
where
    F: Fn(&str) -> String,
{
    fn transform_context_file_name(&self, context_name: &str) -> String {
        self(context_name)
    }
}

impl<F> EntityNameTransformer for F
where
    F: Fn(&str) -> String,
{
    fn transform_entity_file_name(&self, display_name: &str) -> String {
        self(display_name)
    }
}

/// Transformer applying a fixed file-name casing
#[derive(Debug, Clone, Copy)]
pub struct CasedNameTransformer {
    casing: FileNameCasing,
}

impl CasedNameTransformer {
    /// Create a transformer with the given casing
    pub fn new(casing: FileNameCasing) -> Self {
        Self { casing }
    }

    /// Create a transformer with the language's default casing
    pub fn for_language(language: &LanguageOptions) -> Self {
        Self::new(language.default_casing)
    }
}

impl ContextNameTransformer for CasedNameTransformer {
    fn transform_context_file_name(&self, context_name: &str) -> String {
        self.casing.apply(context_name)
    }
}

impl EntityNameTransformer for CasedNameTransformer {
    fn transform_entity_file_name(&self, display_name: &str) -> String {
        self.casing.apply(display_name)
    }
}
