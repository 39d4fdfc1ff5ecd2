//! Context template family
//!
//! The context family renders the model's grouping construct: one top-level
//! template plus the partials it includes. Partials are registered under
//! `context_`-prefixed names so they never collide with the entity family in
//! the engine's shared template namespace.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::ScaffoldError;
use crate::registry::TemplateRegistry;
use crate::templates::source::TemplateSource;

/// Name the top-level context template is registered under
pub const CONTEXT_TEMPLATE: &str = "context";

/// Context partials: template directory, file name, registered partial name
const CONTEXT_PARTIALS: &[(&str, &str, &str)] = &[
    ("context/partials", "imports.hbs", "context_imports"),
    ("context/partials", "ctor.hbs", "context_ctor"),
    ("context/partials", "on_configuring.hbs", "context_on_configuring"),
    ("context/partials", "sets.hbs", "context_sets"),
];

/// Registers and renders the context template family
pub trait ContextTemplates {
    /// Register the family's partials and top-level template into the engine
    fn register_partial_templates(&self, registry: &TemplateRegistry) -> Result<(), ScaffoldError>;

    /// Render the family's top-level template with the given data
    fn render(&self, registry: &TemplateRegistry, data: &Value) -> Result<String, ScaffoldError>;
}

/// Context template service backed by a template source
pub struct HbsContextTemplates {
    source: Arc<dyn TemplateSource + Send + Sync>,
}

impl HbsContextTemplates {
    /// Create a service reading template text from the given source
    pub fn new(source: Arc<dyn TemplateSource + Send + Sync>) -> Self {
        Self { source }
    }
}

impl ContextTemplates for HbsContextTemplates {
    fn register_partial_templates(&self, registry: &TemplateRegistry) -> Result<(), ScaffoldError> {
        debug!("Registering context partial templates");
        for (dir, file, partial_name) in CONTEXT_PARTIALS {
            let text = self.source.read(dir, file)?;
            registry.register_template(partial_name, &text)?;
        }
        let text = self.source.read("context", "context.hbs")?;
        registry.register_template(CONTEXT_TEMPLATE, &text)?;
        Ok(())
    }

    fn render(&self, registry: &TemplateRegistry, data: &Value) -> Result<String, ScaffoldError> {
        registry.render(CONTEXT_TEMPLATE, data)
    }
}
