//! Template sources and the context and entity template families
//!
//! A template source supplies template text by directory and file name; the
//! family services register each family's partials into the shared engine and
//! render its top-level template.

pub mod context;
pub mod entity;
pub mod source;

// Re-export public API
pub use context::{ContextTemplates, HbsContextTemplates};
pub use entity::{EntityTemplates, HbsEntityTemplates};
pub use source::{
    EmbeddedTemplateSource, FileTemplateSource, InMemoryTemplateSource, TemplateSource,
};
