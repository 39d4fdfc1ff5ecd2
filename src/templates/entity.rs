//! Entity template family
//!
//! The entity family renders one source file per entity: one top-level
//! template plus the partials it includes, registered under
//! `entity_`-prefixed names.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::ScaffoldError;
use crate::registry::TemplateRegistry;
use crate::templates::source::TemplateSource;

/// Name the top-level entity template is registered under
pub const ENTITY_TEMPLATE: &str = "entity";

/// Entity partials: template directory, file name, registered partial name
const ENTITY_PARTIALS: &[(&str, &str, &str)] = &[
    ("entity/partials", "imports.hbs", "entity_imports"),
    ("entity/partials", "ctor.hbs", "entity_ctor"),
    ("entity/partials", "properties.hbs", "entity_properties"),
];

/// Registers and renders the entity template family
pub trait EntityTemplates {
    /// Register the family's partials and top-level template into the engine
    fn register_partial_templates(&self, registry: &TemplateRegistry) -> Result<(), ScaffoldError>;

    /// Render the family's top-level template with the given data
    fn render(&self, registry: &TemplateRegistry, data: &Value) -> Result<String, ScaffoldError>;
}

/// Entity template service backed by a template source
pub struct HbsEntityTemplates {
    source: Arc<dyn TemplateSource + Send + Sync>,
}

impl HbsEntityTemplates {
    /// Create a service reading template text from the given source
    pub fn new(source: Arc<dyn TemplateSource + Send + Sync>) -> Self {
        Self { source }
    }
}

impl EntityTemplates for HbsEntityTemplates {
    fn register_partial_templates(&self, registry: &TemplateRegistry) -> Result<(), ScaffoldError> {
        debug!("Registering entity partial templates");
        for (dir, file, partial_name) in ENTITY_PARTIALS {
            let text = self.source.read(dir, file)?;
            registry.register_template(partial_name, &text)?;
        }
        let text = self.source.read("entity", "entity.hbs")?;
        registry.register_template(ENTITY_TEMPLATE, &text)?;
        Ok(())
    }

    fn render(&self, registry: &TemplateRegistry, data: &Value) -> Result<String, ScaffoldError> {
        registry.render(ENTITY_TEMPLATE, data)
    }
}
