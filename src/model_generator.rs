//! Model generator orchestrating one scaffolding run
//!
//! One `generate` call registers helpers and templates into the shared
//! engine, renders the context file when context generation is enabled,
//! fans out over the scaffold-eligible entities when entity generation is
//! enabled, and assembles the rendered bodies with their output paths into a
//! single `ScaffoldedModel`. The generator never touches storage.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::context_generator::{ContextGenerator, HbsContextGenerator, NullContextGenerator};
use crate::entity_generator::{EntityGenerator, HbsEntityGenerator, NullEntityGenerator};
use crate::error::ScaffoldError;
use crate::helpers::{BlockHelperRegistry, HbsBlockHelpers, HbsHelpers, HelperRegistry};
use crate::identifier::fold_namespace;
use crate::model::{ModelSnapshot, ScaffoldedFile, ScaffoldedModel};
use crate::options::{GenerationOptions, LanguageOptions, ScaffoldingOptions};
use crate::registry::TemplateRegistry;
use crate::templates::{
    ContextTemplates, EmbeddedTemplateSource, EntityTemplates, HbsContextTemplates,
    HbsEntityTemplates, TemplateSource,
};
use crate::transform::{CasedNameTransformer, ContextNameTransformer, EntityNameTransformer};

/// Collaborators wired into a model generator
pub struct GeneratorServices {
    /// Shared template engine registry
    pub registry: TemplateRegistry,
    /// Inline helper registry
    pub helpers: Arc<dyn HelperRegistry + Send + Sync>,
    /// Block helper registry
    pub block_helpers: Arc<dyn BlockHelperRegistry + Send + Sync>,
    /// Context template family service
    pub context_templates: Arc<dyn ContextTemplates + Send + Sync>,
    /// Entity template family service
    pub entity_templates: Arc<dyn EntityTemplates + Send + Sync>,
    /// Context file name transformer
    pub context_transformer: Arc<dyn ContextNameTransformer + Send + Sync>,
    /// Entity file name transformer
    pub entity_transformer: Arc<dyn EntityNameTransformer + Send + Sync>,
    /// Context generator, null when the context phase is off
    pub context_generator: Arc<dyn ContextGenerator + Send + Sync>,
    /// Entity generator, null when the entity phase is off
    pub entity_generator: Arc<dyn EntityGenerator + Send + Sync>,
    /// Target language
    pub language: LanguageOptions,
    /// Scaffolding options
    pub scaffolding: ScaffoldingOptions,
}

impl GeneratorServices {
    /// Default wiring over the embedded templates
    pub fn hbs_defaults(language: LanguageOptions, scaffolding: ScaffoldingOptions) -> Self {
        Self::hbs_with_source(Arc::new(EmbeddedTemplateSource), language, scaffolding)
    }

    /// Default wiring over a caller-supplied template source
    ///
    /// The generator selection in `scaffolding` decides which phases get a
    /// real generator and which get the null variant.
    pub fn hbs_with_source(
        source: Arc<dyn TemplateSource + Send + Sync>,
        language: LanguageOptions,
        scaffolding: ScaffoldingOptions,
    ) -> Self {
        let context_templates: Arc<dyn ContextTemplates + Send + Sync> =
            Arc::new(HbsContextTemplates::new(source.clone()));
        let entity_templates: Arc<dyn EntityTemplates + Send + Sync> =
            Arc::new(HbsEntityTemplates::new(source));
        let transformer = CasedNameTransformer::for_language(&language);

        let context_generator: Arc<dyn ContextGenerator + Send + Sync> =
            if scaffolding.selection.includes_context() {
                Arc::new(HbsContextGenerator::new(
                    context_templates.clone(),
                    scaffolding.clone(),
                ))
            } else {
                Arc::new(NullContextGenerator)
            };
        let entity_generator: Arc<dyn EntityGenerator + Send + Sync> =
            if scaffolding.selection.includes_entities() {
                Arc::new(HbsEntityGenerator::new(entity_templates.clone()))
            } else {
                Arc::new(NullEntityGenerator)
            };

        Self {
            registry: TemplateRegistry::new(),
            helpers: Arc::new(HbsHelpers::new()),
            block_helpers: Arc::new(HbsBlockHelpers::new()),
            context_templates,
            entity_templates,
            context_transformer: Arc::new(transformer),
            entity_transformer: Arc::new(transformer),
            context_generator,
            entity_generator,
            language,
            scaffolding,
        }
    }
}

/// Orchestrates one scaffolding run over a model snapshot
pub struct ModelGenerator {
    services: GeneratorServices,
}

impl ModelGenerator {
    /// Create a generator over explicit collaborators
    pub fn new(services: GeneratorServices) -> Self {
        Self { services }
    }

    /// Create a generator with the default wiring over the embedded templates
    pub fn hbs_defaults(language: LanguageOptions, scaffolding: ScaffoldingOptions) -> Self {
        Self::new(GeneratorServices::hbs_defaults(language, scaffolding))
    }

    /// The collaborators this generator runs with
    pub fn services(&self) -> &GeneratorServices {
        &self.services
    }

    /// Generate the scaffolded model
    ///
    /// Registration runs exactly once per call, in a fixed order (inline
    /// helpers, block helpers, context partials, entity partials), before any
    /// rendering. Any registration or rendering failure aborts the whole
    /// invocation; no partial aggregate is returned.
    pub fn generate(
        &self,
        model: &ModelSnapshot,
        options: &GenerationOptions,
    ) -> Result<ScaffoldedModel, ScaffoldError> {
        let services = &self.services;

        services.helpers.register_helpers(&services.registry);
        services
            .block_helpers
            .register_block_helpers(&services.registry);
        services
            .context_templates
            .register_partial_templates(&services.registry)?;
        services
            .entity_templates
            .register_partial_templates(&services.registry)?;

        let mut scaffolded = ScaffoldedModel::default();

        if services.context_generator.enabled() {
            if options.context_name.is_empty() {
                return Err(ScaffoldError::InvalidArgument(
                    "context name must not be empty".to_string(),
                ));
            }
            debug!("Generating context file: {}", options.context_name);
            let code = services
                .context_generator
                .write_code(&services.registry, model, options)?;
            let base = services
                .context_transformer
                .transform_context_file_name(&options.context_name);
            let file_name = format!("{}{}", base, services.language.file_extension);
            let path = match &options.context_dir {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            };
            scaffolded.context_file = Some(ScaffoldedFile::new(path, code));
        }

        if services.entity_generator.enabled() {
            for entity in model.scaffold_entities(&services.scaffolding) {
                debug!("Generating entity file: {}", entity.name);
                let code = services.entity_generator.write_code(
                    &services.registry,
                    entity,
                    options.model_namespace.as_deref(),
                    options.use_annotations,
                )?;
                let base = services
                    .entity_transformer
                    .transform_entity_file_name(&entity.name);
                let file_name = format!("{}{}", base, services.language.file_extension);
                let path = match entity.schema.as_deref() {
                    Some(schema)
                        if services.scaffolding.enable_schema_folders && !schema.is_empty() =>
                    {
                        PathBuf::from(fold_namespace(schema)).join(file_name)
                    }
                    _ => PathBuf::from(file_name),
                };
                scaffolded
                    .additional_files
                    .push(ScaffoldedFile::new(path, code));
            }
        }

        Ok(scaffolded)
    }
}
