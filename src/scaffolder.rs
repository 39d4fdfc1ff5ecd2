//! Scaffolder coordinating validation, generation, and persistence
//!
//! The scaffolder validates the context name against the target language
//! before the generator runs, so an invalid name fails with zero files
//! produced. Persistence lives here too; the generator itself never touches
//! storage.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ScaffoldError;
use crate::identifier::validate_identifier;
use crate::model::{ModelSnapshot, ScaffoldedFile, ScaffoldedModel};
use crate::model_generator::ModelGenerator;
use crate::options::GenerationOptions;

/// Validates input, runs the model generator, and persists the result
pub struct Scaffolder {
    generator: ModelGenerator,
}

impl Scaffolder {
    /// Create a scaffolder over the given generator
    pub fn new(generator: ModelGenerator) -> Self {
        Self { generator }
    }

    /// Validate the context name, then generate
    ///
    /// The context name must be a valid identifier in the target language;
    /// a violation fails with `InvalidIdentifier` carrying the offending name
    /// before any file is produced.
    pub fn scaffold(
        &self,
        model: &ModelSnapshot,
        options: &GenerationOptions,
    ) -> Result<ScaffoldedModel, ScaffoldError> {
        validate_identifier(&options.context_name, &self.generator.services().language)?;
        self.generator.generate(model, options)
    }

    /// Write a scaffolded model under an output directory
    ///
    /// Creates parent directories as needed. Without `overwrite`, any
    /// existing target file fails the save before anything is written and
    /// the error lists every conflicting path. Returns the written paths,
    /// context file first, entity files in aggregate order.
    pub fn save(
        &self,
        scaffolded: &ScaffoldedModel,
        output_dir: &Path,
        overwrite: bool,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let files: Vec<&ScaffoldedFile> = scaffolded
            .context_file
            .iter()
            .chain(scaffolded.additional_files.iter())
            .collect();

        if !overwrite {
            let conflicts: Vec<String> = files
                .iter()
                .map(|file| output_dir.join(&file.path))
                .filter(|path| path.exists())
                .map(|path| path.display().to_string())
                .collect();
            if !conflicts.is_empty() {
                return Err(ScaffoldError::WriteFailed(format!(
                    "refusing to overwrite existing files: {}",
                    conflicts.join(", ")
                )));
            }
        }

        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let target = output_dir.join(&file.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            if target.exists() {
                warn!("Overwriting existing file: {}", target.display());
            }
            fs::write(&target, &file.code)?;
            debug!("Wrote {}", target.display());
            written.push(target);
        }
        Ok(written)
    }
}
