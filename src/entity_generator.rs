//! Entity generator
//!
//! Renders one source body per entity. The null variant switches the entity
//! phase off.

use std::sync::Arc;

use heck::ToSnakeCase;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ScaffoldError;
use crate::model::EntitySnapshot;
use crate::registry::TemplateRegistry;
use crate::templates::EntityTemplates;

/// Renders one source body per entity
pub trait EntityGenerator {
    /// Whether the entity phase runs at all
    fn enabled(&self) -> bool {
        true
    }

    /// Render the source body for one entity
    fn write_code(
        &self,
        registry: &TemplateRegistry,
        entity: &EntitySnapshot,
        model_namespace: Option<&str>,
        use_annotations: bool,
    ) -> Result<String, ScaffoldError>;
}

/// Entity generator backed by the entity template family
pub struct HbsEntityGenerator {
    templates: Arc<dyn EntityTemplates + Send + Sync>,
}

impl HbsEntityGenerator {
    /// Create a generator rendering through the given template service
    pub fn new(templates: Arc<dyn EntityTemplates + Send + Sync>) -> Self {
        Self { templates }
    }

    /// Assemble the template data for one entity
    fn build_data(
        &self,
        entity: &EntitySnapshot,
        model_namespace: Option<&str>,
        use_annotations: bool,
    ) -> Value {
        let mut imports: Vec<String> = Vec::new();
        if use_annotations {
            imports.push("serde::{Deserialize, Serialize}".to_string());
        }

        let properties: Vec<Value> = entity
            .properties
            .iter()
            .map(|property| {
                let field_type = if property.is_nullable {
                    format!("Option<{}>", property.type_name)
                } else {
                    property.type_name.clone()
                };
                json!({
                    "property_name": property.name,
                    "field_name": property.name.to_snake_case(),
                    "field_type": field_type,
                    "is_key": property.is_key,
                    "is_nullable": property.is_nullable,
                    "max_length": property.max_length,
                })
            })
            .collect();

        let navigations: Vec<Value> = entity
            .navigations
            .iter()
            .map(|navigation| {
                let field_type = if navigation.is_collection {
                    format!("Vec<{}>", navigation.target)
                } else {
                    format!("Option<{}>", navigation.target)
                };
                json!({
                    "navigation_name": navigation.name,
                    "field_name": navigation.name.to_snake_case(),
                    "field_type": field_type,
                    "target": navigation.target,
                    "is_collection": navigation.is_collection,
                })
            })
            .collect();

        json!({
            "entity_name": entity.name,
            "schema": entity.schema,
            "table_name": entity.table_name(),
            "qualified_table": entity.qualified_table(),
            "model_namespace": model_namespace,
            "use_annotations": use_annotations,
            "imports": imports,
            "properties": properties,
            "navigations": navigations,
        })
    }
}

impl EntityGenerator for HbsEntityGenerator {
    fn write_code(
        &self,
        registry: &TemplateRegistry,
        entity: &EntitySnapshot,
        model_namespace: Option<&str>,
        use_annotations: bool,
    ) -> Result<String, ScaffoldError> {
        debug!("Rendering entity: {}", entity.name);
        let data = self.build_data(entity, model_namespace, use_annotations);
        self.templates.render(registry, &data)
    }
}

/// Entity generator that generates nothing
///
/// Answers `enabled() == false`, so the orchestrator skips the entity phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEntityGenerator;

impl EntityGenerator for NullEntityGenerator {
    fn enabled(&self) -> bool {
        false
    }

    fn write_code(
        &self,
        _registry: &TemplateRegistry,
        _entity: &EntitySnapshot,
        _model_namespace: Option<&str>,
        _use_annotations: bool,
    ) -> Result<String, ScaffoldError> {
        Ok(String::new())
    }
}
