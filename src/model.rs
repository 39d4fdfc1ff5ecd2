//! Data model snapshots consumed by generation and the scaffolded output types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::options::ScaffoldingOptions;

/// Immutable snapshot of a relational model
///
/// Entities are kept in insertion order; generated entity files come out in
/// the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    entities: Vec<EntitySnapshot>,
}

impl ModelSnapshot {
    /// Create an empty model snapshot
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Add an entity to the model
    pub fn with_entity(mut self, entity: EntitySnapshot) -> Self {
        self.entities.push(entity);
        self
    }

    /// All entities in insertion order
    pub fn entities(&self) -> &[EntitySnapshot] {
        &self.entities
    }

    /// Entities selected for scaffolding under the given options
    ///
    /// Filters out entities whose table name appears in the exclusion list,
    /// matched case-insensitively against both the bare and the
    /// schema-qualified table name. Order is preserved.
    pub fn scaffold_entities<'a>(
        &'a self,
        options: &'a ScaffoldingOptions,
    ) -> impl Iterator<Item = &'a EntitySnapshot> + 'a {
        self.entities
            .iter()
            .filter(move |entity| !entity.is_excluded(&options.excluded_tables))
    }
}

/// Immutable snapshot of one entity in the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Display name of the entity
    pub name: String,
    /// Schema the backing table lives in
    pub schema: Option<String>,
    /// Backing table name, defaults to the display name when absent
    pub table: Option<String>,
    /// Scalar fields of the entity
    pub properties: Vec<PropertySnapshot>,
    /// Relationships to other entities
    pub navigations: Vec<NavigationSnapshot>,
}

impl EntitySnapshot {
    /// Create an entity snapshot with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            table: None,
            properties: Vec::new(),
            navigations: Vec::new(),
        }
    }

    /// Set the schema tag
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Set the backing table name
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add a scalar field
    pub fn with_property(mut self, property: PropertySnapshot) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a relationship
    pub fn with_navigation(mut self, navigation: NavigationSnapshot) -> Self {
        self.navigations.push(navigation);
        self
    }

    /// Backing table name, falling back to the display name
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }

    /// Table name qualified with the schema when one is set
    pub fn qualified_table(&self) -> String {
        match self.schema.as_deref() {
            Some(schema) if !schema.is_empty() => format!("{}.{}", schema, self.table_name()),
            _ => self.table_name().to_string(),
        }
    }

    /// Whether this entity's table appears in the exclusion list
    pub fn is_excluded(&self, excluded_tables: &[String]) -> bool {
        let bare = self.table_name();
        let qualified = self.qualified_table();
        excluded_tables
            .iter()
            .any(|x| x.eq_ignore_ascii_case(bare) || x.eq_ignore_ascii_case(&qualified))
    }
}

/// A scalar field of an entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySnapshot {
    /// Field display name
    pub name: String,
    /// Target-language type of the field, before nullability wrapping
    pub type_name: String,
    /// Whether the field is part of the primary key
    pub is_key: bool,
    /// Whether the field admits missing values
    pub is_nullable: bool,
    /// Maximum length for text fields
    pub max_length: Option<u32>,
}

impl PropertySnapshot {
    /// Create a property snapshot with the given name and type
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_key: false,
            is_nullable: false,
            max_length: None,
        }
    }

    /// Mark the property as part of the primary key
    pub fn with_key(mut self, is_key: bool) -> Self {
        self.is_key = is_key;
        self
    }

    /// Set whether the property admits missing values
    pub fn with_nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = is_nullable;
        self
    }

    /// Set the maximum length
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// A relationship from one entity to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    /// Relationship display name
    pub name: String,
    /// Display name of the target entity
    pub target: String,
    /// Whether the relationship holds many targets
    pub is_collection: bool,
}

impl NavigationSnapshot {
    /// Create a navigation snapshot with the given name and target entity
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            is_collection: false,
        }
    }

    /// Set whether the relationship holds many targets
    pub fn with_collection(mut self, is_collection: bool) -> Self {
        self.is_collection = is_collection;
        self
    }
}

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldedFile {
    /// Relative path of the file
    pub path: PathBuf,
    /// Generated text body
    pub code: String,
}

impl ScaffoldedFile {
    /// Create a scaffolded file
    pub fn new(path: impl Into<PathBuf>, code: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
        }
    }
}

/// The complete output of one generation invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldedModel {
    /// The context file, absent when context generation is disabled
    pub context_file: Option<ScaffoldedFile>,
    /// One file per scaffolded entity, in model order
    pub additional_files: Vec<ScaffoldedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_snapshot_preserves_entity_order() {
        let model = ModelSnapshot::new()
            .with_entity(EntitySnapshot::new("Order"))
            .with_entity(EntitySnapshot::new("Customer"))
            .with_entity(EntitySnapshot::new("Product"));
        let names: Vec<_> = model.entities().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "Customer", "Product"]);
    }

    #[test]
    fn test_table_name_falls_back_to_display_name() {
        let entity = EntitySnapshot::new("Customer");
        assert_eq!(entity.table_name(), "Customer");
    }

    #[test]
    fn test_qualified_table_with_schema() {
        let entity = EntitySnapshot::new("Customer")
            .with_schema("dbo")
            .with_table("Customers");
        assert_eq!(entity.qualified_table(), "dbo.Customers");
    }

    #[test]
    fn test_qualified_table_without_schema() {
        let entity = EntitySnapshot::new("Customer").with_table("Customers");
        assert_eq!(entity.qualified_table(), "Customers");
    }

    #[test]
    fn test_scaffold_entities_excludes_bare_table_name() {
        let options = ScaffoldingOptions {
            excluded_tables: vec!["Orders".to_string()],
            ..Default::default()
        };
        let model = ModelSnapshot::new()
            .with_entity(EntitySnapshot::new("Order").with_table("Orders"))
            .with_entity(EntitySnapshot::new("Customer").with_table("Customers"));
        let names: Vec<_> = model
            .scaffold_entities(&options)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Customer"]);
    }

    #[test]
    fn test_scaffold_entities_excludes_qualified_table_name() {
        let options = ScaffoldingOptions {
            excluded_tables: vec!["dbo.Orders".to_string()],
            ..Default::default()
        };
        let model = ModelSnapshot::new().with_entity(
            EntitySnapshot::new("Order")
                .with_schema("dbo")
                .with_table("Orders"),
        );
        assert_eq!(model.scaffold_entities(&options).count(), 0);
    }

    #[test]
    fn test_scaffold_entities_matches_case_insensitively() {
        let options = ScaffoldingOptions {
            excluded_tables: vec!["ORDERS".to_string()],
            ..Default::default()
        };
        let model =
            ModelSnapshot::new().with_entity(EntitySnapshot::new("Order").with_table("Orders"));
        assert_eq!(model.scaffold_entities(&options).count(), 0);
    }

    #[test]
    fn test_scaffold_entities_keeps_unlisted_entities() {
        let options = ScaffoldingOptions::default();
        let model = ModelSnapshot::new()
            .with_entity(EntitySnapshot::new("Order"))
            .with_entity(EntitySnapshot::new("Customer"));
        assert_eq!(model.scaffold_entities(&options).count(), 2);
    }

    #[test]
    fn test_property_snapshot_builder() {
        let property = PropertySnapshot::new("Id", "i64")
            .with_key(true)
            .with_nullable(false)
            .with_max_length(64);
        assert!(property.is_key);
        assert!(!property.is_nullable);
        assert_eq!(property.max_length, Some(64));
    }

    #[test]
    fn test_navigation_snapshot_builder() {
        let navigation = NavigationSnapshot::new("Orders", "Order").with_collection(true);
        assert_eq!(navigation.target, "Order");
        assert!(navigation.is_collection);
    }
}
