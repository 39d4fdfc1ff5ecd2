//! Template sources
//!
//! A source resolves `(directory, file name)` pairs to template text. The
//! embedded source carries the defaults compiled into the crate; the file
//! source reads overrides from a directory and falls back to the embedded
//! defaults; the in-memory source serves programmatic callers and tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ScaffoldError;

/// Supplies template text by directory and file name
pub trait TemplateSource {
    /// Read the text of a named template
    fn read(&self, dir: &str, name: &str) -> Result<String, ScaffoldError>;
}

/// The default templates compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateSource;

impl TemplateSource for EmbeddedTemplateSource {
    fn read(&self, dir: &str, name: &str) -> Result<String, ScaffoldError> {
        let text = match (dir, name) {
            ("context", "context.hbs") => include_str!("../../templates/context/context.hbs"),
            ("context/partials", "imports.hbs") => {
                include_str!("../../templates/context/partials/imports.hbs")
            }
            ("context/partials", "ctor.hbs") => {
                include_str!("../../templates/context/partials/ctor.hbs")
            }
            ("context/partials", "on_configuring.hbs") => {
                include_str!("../../templates/context/partials/on_configuring.hbs")
            }
            ("context/partials", "sets.hbs") => {
                include_str!("../../templates/context/partials/sets.hbs")
            }
            ("entity", "entity.hbs") => include_str!("../../templates/entity/entity.hbs"),
            ("entity/partials", "imports.hbs") => {
                include_str!("../../templates/entity/partials/imports.hbs")
            }
            ("entity/partials", "ctor.hbs") => {
                include_str!("../../templates/entity/partials/ctor.hbs")
            }
            ("entity/partials", "properties.hbs") => {
                include_str!("../../templates/entity/partials/properties.hbs")
            }
            _ => {
                return Err(ScaffoldError::TemplateNotFound(format!("{}/{}", dir, name)));
            }
        };
        Ok(text.to_string())
    }
}

/// Reads templates from a directory, falling back to the embedded defaults
///
/// Only files present under the directory override; every other name resolves
/// through `EmbeddedTemplateSource`, so an override directory can replace a
/// single partial without carrying the whole template tree.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    root: PathBuf,
}

impl FileTemplateSource {
    /// Create a source rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for FileTemplateSource {
    fn read(&self, dir: &str, name: &str) -> Result<String, ScaffoldError> {
        let path = self.root.join(dir).join(name);
        if path.is_file() {
            debug!("Loading template override: {}", path.display());
            return Ok(fs::read_to_string(&path)?);
        }
        EmbeddedTemplateSource.read(dir, name)
    }
}

/// Templates held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateSource {
    templates: HashMap<(String, String), String>,
}

impl InMemoryTemplateSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Add a template under a directory and file name
    pub fn with_template(
        mut self,
        dir: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.templates
            .insert((dir.into(), name.into()), text.into());
        self
    }
}

impl TemplateSource for InMemoryTemplateSource {
    fn read(&self, dir: &str, name: &str) -> Result<String, ScaffoldError> {
        self.templates
            .get(&(dir.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| ScaffoldError::TemplateNotFound(format!("{}/{}", dir, name)))
    }
}
