//! Context generator
//!
//! Renders one source body for the model's grouping construct. The null
//! variant switches the whole context phase off.

use std::sync::Arc;

use heck::ToShoutySnakeCase;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ScaffoldError;
use crate::model::ModelSnapshot;
use crate::options::{GenerationOptions, ScaffoldingOptions};
use crate::registry::TemplateRegistry;
use crate::templates::ContextTemplates;

/// Renders the context source body for a model
pub trait ContextGenerator {
    /// Whether the context phase runs at all
    fn enabled(&self) -> bool {
        true
    }

    /// Render the context source body
    fn write_code(
        &self,
        registry: &TemplateRegistry,
        model: &ModelSnapshot,
        options: &GenerationOptions,
    ) -> Result<String, ScaffoldError>;
}

/// Context generator backed by the context template family
pub struct HbsContextGenerator {
    templates: Arc<dyn ContextTemplates + Send + Sync>,
    scaffolding: ScaffoldingOptions,
}

impl HbsContextGenerator {
    /// Create a generator rendering through the given template service
    pub fn new(
        templates: Arc<dyn ContextTemplates + Send + Sync>,
        scaffolding: ScaffoldingOptions,
    ) -> Self {
        Self {
            templates,
            scaffolding,
        }
    }

    /// Assemble the template data for the context template
    fn build_data(&self, model: &ModelSnapshot, options: &GenerationOptions) -> Value {
        let entity_sets: Vec<Value> = model
            .scaffold_entities(&self.scaffolding)
            .map(|entity| {
                json!({
                    "entity_name": entity.name,
                    "const_name": entity.name.to_shouty_snake_case(),
                    "table_name": entity.table_name(),
                    "qualified_table": entity.qualified_table(),
                })
            })
            .collect();

        json!({
            "context_name": options.context_name,
            "context_namespace": options.context_namespace,
            "model_namespace": options.model_namespace,
            "connection_string": options.connection_string,
            "use_annotations": options.use_annotations,
            "suppress_connection_string_warning": options.suppress_connection_string_warning,
            "suppress_on_configuring": options.suppress_on_configuring,
            "entity_sets": entity_sets,
        })
    }
}

impl ContextGenerator for HbsContextGenerator {
    fn write_code(
        &self,
        registry: &TemplateRegistry,
        model: &ModelSnapshot,
        options: &GenerationOptions,
    ) -> Result<String, ScaffoldError> {
        debug!("Rendering context: {}", options.context_name);
        let data = self.build_data(model, options);
        self.templates.render(registry, &data)
    }
}

/// Context generator that generates nothing
///
/// Answers `enabled() == false`, so the orchestrator skips the context phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContextGenerator;

impl ContextGenerator for NullContextGenerator {
    fn enabled(&self) -> bool {
        false
    }

    fn write_code(
        &self,
        _registry: &TemplateRegistry,
        _model: &ModelSnapshot,
        _options: &GenerationOptions,
    ) -> Result<String, ScaffoldError> {
        Ok(String::new())
    }
}
