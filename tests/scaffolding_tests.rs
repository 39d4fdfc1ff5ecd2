//! Integration tests for the complete scaffolding pipeline
//! Cover generation over the embedded templates, generator selection, path
//! composition, template overrides, upstream validation, and persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use hbs_scaffold::{
    Context, EntitySnapshot, FileTemplateSource, GenerationOptions, GeneratorSelection,
    GeneratorServices, Handlebars, HbsHelpers, Helper, HelperResult, InMemoryTemplateSource,
    LanguageOptions, ModelGenerator, ModelSnapshot, NavigationSnapshot, Output, PropertySnapshot,
    RenderContext, ScaffoldError, Scaffolder, ScaffoldingOptions,
};
use tempfile::TempDir;

fn northwind_model() -> ModelSnapshot {
    ModelSnapshot::new()
        .with_entity(
            EntitySnapshot::new("Customer")
                .with_schema("dbo")
                .with_table("Customers")
                .with_property(PropertySnapshot::new("Id", "i64").with_key(true))
                .with_property(
                    PropertySnapshot::new("CompanyName", "String")
                        .with_nullable(true)
                        .with_max_length(40),
                )
                .with_navigation(NavigationSnapshot::new("Orders", "Order").with_collection(true)),
        )
        .with_entity(
            EntitySnapshot::new("Order")
                .with_schema("dbo")
                .with_table("Orders")
                .with_property(PropertySnapshot::new("Id", "i64").with_key(true))
                .with_property(PropertySnapshot::new("OrderDate", "String"))
                .with_navigation(NavigationSnapshot::new("Customer", "Customer")),
        )
}

fn northwind_options() -> GenerationOptions {
    GenerationOptions {
        context_name: "NorthwindContext".to_string(),
        connection_string: "postgres://localhost/northwind".to_string(),
        ..Default::default()
    }
}

/// In-memory source carrying a full template tree with the given top-level bodies
fn in_memory_source(context_template: &str, entity_template: &str) -> InMemoryTemplateSource {
    InMemoryTemplateSource::new()
        .with_template("context", "context.hbs", context_template)
        .with_template("context/partials", "imports.hbs", "")
        .with_template("context/partials", "ctor.hbs", "")
        .with_template("context/partials", "on_configuring.hbs", "")
        .with_template("context/partials", "sets.hbs", "")
        .with_template("entity", "entity.hbs", entity_template)
        .with_template("entity/partials", "imports.hbs", "")
        .with_template("entity/partials", "ctor.hbs", "")
        .with_template("entity/partials", "properties.hbs", "")
}

// ============================================================================
// Generation over the embedded templates
// ============================================================================

#[test]
fn test_generates_context_and_one_file_per_entity() {
    let generator =
        ModelGenerator::hbs_defaults(LanguageOptions::rust(), ScaffoldingOptions::default());
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    let context_file = scaffolded
        .context_file
        .expect("context file should be generated");
    assert_eq!(context_file.path, PathBuf::from("northwind_context.rs"));
    assert!(context_file.code.contains("pub struct NorthwindContext"));
    assert!(context_file.code.contains("postgres://localhost/northwind"));
    assert!(context_file.code.contains("CUSTOMER_TABLE"));
    assert!(context_file.code.contains("ORDER_TABLE"));

    assert_eq!(scaffolded.additional_files.len(), 2);
    assert_eq!(
        scaffolded.additional_files[0].path,
        PathBuf::from("customer.rs")
    );
    assert_eq!(scaffolded.additional_files[1].path, PathBuf::from("order.rs"));
    assert!(scaffolded.additional_files[0]
        .code
        .contains("pub struct Customer"));
    assert!(scaffolded.additional_files[0]
        .code
        .contains("pub company_name: Option<String>,"));
    assert!(scaffolded.additional_files[0]
        .code
        .contains("pub orders: Vec<Order>,"));
    assert!(scaffolded.additional_files[1]
        .code
        .contains("pub struct Order"));
}

#[test]
fn test_annotations_flag_flows_to_entity_files() {
    let generator =
        ModelGenerator::hbs_defaults(LanguageOptions::rust(), ScaffoldingOptions::default());
    let options = GenerationOptions {
        use_annotations: true,
        ..northwind_options()
    };
    let scaffolded = generator
        .generate(&northwind_model(), &options)
        .expect("generation should succeed");

    let customer = &scaffolded.additional_files[0].code;
    assert!(customer.contains("use serde::{Deserialize, Serialize};"));
    assert!(customer.contains("#[serde(rename = \"CompanyName\")]"));
}

#[test]
fn test_annotations_flag_flows_to_context_template() {
    let source = in_memory_source(
        "{{#if use_annotations}}annotated{{else}}plain{{/if}}",
        "ent {{entity_name}}",
    );
    let services = GeneratorServices::hbs_with_source(
        Arc::new(source),
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    );
    let generator = ModelGenerator::new(services);
    let options = GenerationOptions {
        use_annotations: true,
        ..northwind_options()
    };
    let scaffolded = generator
        .generate(&northwind_model(), &options)
        .expect("generation should succeed");

    assert_eq!(
        scaffolded.context_file.expect("context file").code,
        "annotated"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let generator =
        ModelGenerator::hbs_defaults(LanguageOptions::rust(), ScaffoldingOptions::default());
    let first = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("first run should succeed");
    let second = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("second run should succeed");
    let fresh =
        ModelGenerator::hbs_defaults(LanguageOptions::rust(), ScaffoldingOptions::default())
            .generate(&northwind_model(), &northwind_options())
            .expect("fresh generator run should succeed");

    assert_eq!(first, second);
    assert_eq!(first, fresh);
}

// ============================================================================
// Generator selection
// ============================================================================

#[test]
fn test_context_only_selection() {
    let scaffolding = ScaffoldingOptions {
        selection: GeneratorSelection::ContextOnly,
        ..Default::default()
    };
    let generator = ModelGenerator::hbs_defaults(LanguageOptions::rust(), scaffolding);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert!(scaffolded.context_file.is_some());
    assert!(scaffolded.additional_files.is_empty());
}

#[test]
fn test_entities_only_selection() {
    let scaffolding = ScaffoldingOptions {
        selection: GeneratorSelection::EntitiesOnly,
        ..Default::default()
    };
    let generator = ModelGenerator::hbs_defaults(LanguageOptions::rust(), scaffolding);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert!(scaffolded.context_file.is_none());
    assert_eq!(scaffolded.additional_files.len(), 2);
}

// ============================================================================
// Path composition
// ============================================================================

#[test]
fn test_schema_folders_compose_entity_paths() {
    let scaffolding = ScaffoldingOptions {
        enable_schema_folders: true,
        ..Default::default()
    };
    let generator = ModelGenerator::hbs_defaults(LanguageOptions::rust(), scaffolding);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert_eq!(
        scaffolded.additional_files[0].path,
        PathBuf::from("dbo").join("customer.rs")
    );
    assert_eq!(
        scaffolded.additional_files[1].path,
        PathBuf::from("dbo").join("order.rs")
    );
}

#[test]
fn test_context_dir_roots_context_file() {
    let generator =
        ModelGenerator::hbs_defaults(LanguageOptions::rust(), ScaffoldingOptions::default());
    let options = GenerationOptions {
        context_dir: Some(PathBuf::from("src/db")),
        ..northwind_options()
    };
    let scaffolded = generator
        .generate(&northwind_model(), &options)
        .expect("generation should succeed");

    assert_eq!(
        scaffolded.context_file.expect("context file").path,
        PathBuf::from("src/db").join("northwind_context.rs")
    );
}

#[test]
fn test_typescript_language_preserves_file_names() {
    let generator =
        ModelGenerator::hbs_defaults(LanguageOptions::typescript(), ScaffoldingOptions::default());
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert_eq!(
        scaffolded.context_file.expect("context file").path,
        PathBuf::from("NorthwindContext.ts")
    );
    assert_eq!(
        scaffolded.additional_files[0].path,
        PathBuf::from("Customer.ts")
    );
}

#[test]
fn test_excluded_tables_are_skipped_everywhere() {
    let scaffolding = ScaffoldingOptions {
        excluded_tables: vec!["dbo.Orders".to_string()],
        ..Default::default()
    };
    let generator = ModelGenerator::hbs_defaults(LanguageOptions::rust(), scaffolding);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert_eq!(scaffolded.additional_files.len(), 1);
    assert_eq!(
        scaffolded.additional_files[0].path,
        PathBuf::from("customer.rs")
    );
    let context_code = scaffolded.context_file.expect("context file").code;
    assert!(context_code.contains("CUSTOMER_TABLE"));
    assert!(!context_code.contains("ORDER_TABLE"));
}

// ============================================================================
// Template overrides
// ============================================================================

#[test]
fn test_file_template_override_beats_embedded() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let entity_dir = temp_dir.path().join("entity");
    fs::create_dir_all(&entity_dir).expect("Failed to create entity dir");
    fs::write(
        entity_dir.join("entity.hbs"),
        "// {{entity_name}} override\n",
    )
    .expect("Failed to write override");

    let services = GeneratorServices::hbs_with_source(
        Arc::new(FileTemplateSource::new(temp_dir.path())),
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    );
    let generator = ModelGenerator::new(services);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert!(scaffolded.additional_files[0]
        .code
        .contains("// Customer override"));
    assert!(scaffolded
        .context_file
        .expect("context file")
        .code
        .contains("pub struct NorthwindContext"));
}

#[test]
fn test_in_memory_templates_replace_whole_families() {
    let source = in_memory_source("ctx {{context_name}}", "ent {{entity_name}}");
    let services = GeneratorServices::hbs_with_source(
        Arc::new(source),
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    );
    let generator = ModelGenerator::new(services);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert_eq!(
        scaffolded.context_file.expect("context file").code,
        "ctx NorthwindContext"
    );
    assert_eq!(scaffolded.additional_files[0].code, "ent Customer");
    assert_eq!(scaffolded.additional_files[1].code, "ent Order");
}

#[test]
fn test_broken_partial_aborts_generation() {
    let source = in_memory_source("ctx", "ent").with_template(
        "context/partials",
        "imports.hbs",
        "{{#if open}}never closed",
    );
    let services = GeneratorServices::hbs_with_source(
        Arc::new(source),
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    );
    let generator = ModelGenerator::new(services);
    let result = generator.generate(&northwind_model(), &northwind_options());
    assert!(matches!(result, Err(ScaffoldError::Registration(_))));
}

#[test]
fn test_missing_template_aborts_generation() {
    let source = InMemoryTemplateSource::new();
    let services = GeneratorServices::hbs_with_source(
        Arc::new(source),
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    );
    let generator = ModelGenerator::new(services);
    let result = generator.generate(&northwind_model(), &northwind_options());
    assert!(matches!(result, Err(ScaffoldError::TemplateNotFound(_))));
}

#[test]
fn test_user_helper_available_to_templates() {
    fn yell_helper(
        h: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).and_then(|p| p.value().as_str()).unwrap_or("");
        out.write(&value.to_uppercase())?;
        Ok(())
    }

    let source = in_memory_source("{{yell context_name}}", "ent {{entity_name}}");
    let mut services = GeneratorServices::hbs_with_source(
        Arc::new(source),
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    );
    services.helpers = Arc::new(HbsHelpers::new().with_helper("yell", Arc::new(yell_helper)));
    let generator = ModelGenerator::new(services);
    let scaffolded = generator
        .generate(&northwind_model(), &northwind_options())
        .expect("generation should succeed");

    assert_eq!(
        scaffolded.context_file.expect("context file").code,
        "NORTHWINDCONTEXT"
    );
}

// ============================================================================
// Upstream validation and persistence
// ============================================================================

#[test]
fn test_invalid_context_name_produces_zero_files() {
    let scaffolder = Scaffolder::new(ModelGenerator::hbs_defaults(
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    ));
    let options = GenerationOptions {
        context_name: "1BadName".to_string(),
        ..northwind_options()
    };
    let result = scaffolder.scaffold(&northwind_model(), &options);
    match result {
        Err(ScaffoldError::InvalidIdentifier { name, .. }) => assert_eq!(name, "1BadName"),
        other => panic!("expected InvalidIdentifier, got {:?}", other),
    }
}

#[test]
fn test_reserved_word_context_name_produces_zero_files() {
    let scaffolder = Scaffolder::new(ModelGenerator::hbs_defaults(
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    ));
    for reserved in ["try", "abstract"] {
        let options = GenerationOptions {
            context_name: reserved.to_string(),
            ..northwind_options()
        };
        let result = scaffolder.scaffold(&northwind_model(), &options);
        match result {
            Err(ScaffoldError::InvalidIdentifier { name, .. }) => assert_eq!(name, reserved),
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }
}

#[test]
fn test_scaffold_and_save_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let scaffolder = Scaffolder::new(ModelGenerator::hbs_defaults(
        LanguageOptions::rust(),
        ScaffoldingOptions::default(),
    ));
    let scaffolded = scaffolder
        .scaffold(&northwind_model(), &northwind_options())
        .expect("scaffold should succeed");
    let written = scaffolder
        .save(&scaffolded, temp_dir.path(), false)
        .expect("save should succeed");

    assert_eq!(written.len(), 3);
    for path in &written {
        assert!(path.is_file(), "{} should exist", path.display());
    }
    let context_code = fs::read_to_string(&written[0]).expect("Failed to read context file");
    assert!(context_code.contains("pub struct NorthwindContext"));
}

#[test]
fn test_save_with_schema_folders_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let scaffolding = ScaffoldingOptions {
        enable_schema_folders: true,
        ..Default::default()
    };
    let scaffolder = Scaffolder::new(ModelGenerator::hbs_defaults(
        LanguageOptions::rust(),
        scaffolding,
    ));
    let scaffolded = scaffolder
        .scaffold(&northwind_model(), &northwind_options())
        .expect("scaffold should succeed");
    scaffolder
        .save(&scaffolded, temp_dir.path(), false)
        .expect("save should succeed");

    assert!(temp_dir.path().join("dbo").join("customer.rs").is_file());
    assert!(temp_dir.path().join("dbo").join("order.rs").is_file());
}
