#![warn(missing_docs)]

//! Handlebars-driven source scaffolding for relational data models
//!
//! Takes an immutable model snapshot (entities, fields, relationships, and a
//! top-level context grouping them) and renders named source files through
//! `handlebars` templates: one file for the context and one per entity.
//! Helpers, partial templates, name transforms, and the per-phase generators
//! are all replaceable collaborators; the embedded defaults generate
//! self-contained Rust sources.

pub mod error;
pub mod model;
pub mod options;
pub mod identifier;
pub mod registry;
pub mod helpers;
pub mod transform;
pub mod templates;
pub mod context_generator;
pub mod entity_generator;
pub mod model_generator;
pub mod scaffolder;

// Re-export public API
pub use error::ScaffoldError;
pub use model::{
    EntitySnapshot, ModelSnapshot, NavigationSnapshot, PropertySnapshot, ScaffoldedFile,
    ScaffoldedModel,
};
pub use options::{
    FileNameCasing, GenerationOptions, GeneratorSelection, LanguageOptions, ScaffoldingOptions,
};
pub use identifier::{fold_namespace, is_valid_identifier, validate_identifier};
pub use registry::{HelperCallback, TemplateRegistry};
pub use helpers::{BlockHelperRegistry, HbsBlockHelpers, HbsHelpers, HelperRegistry};
pub use transform::{CasedNameTransformer, ContextNameTransformer, EntityNameTransformer};
pub use templates::{
    ContextTemplates, EmbeddedTemplateSource, EntityTemplates, FileTemplateSource,
    HbsContextTemplates, HbsEntityTemplates, InMemoryTemplateSource, TemplateSource,
};
pub use context_generator::{ContextGenerator, HbsContextGenerator, NullContextGenerator};
pub use entity_generator::{EntityGenerator, HbsEntityGenerator, NullEntityGenerator};
pub use model_generator::{GeneratorServices, ModelGenerator};
pub use scaffolder::Scaffolder;

// Engine types helper authors write against
pub use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason,
};
