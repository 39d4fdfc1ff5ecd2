//! Helper registries for the template engine
//!
//! Inline helpers produce a value into the output stream; block helpers render
//! an attached template block. Both kinds are registered by name into the
//! shared engine before any rendering happens.

use std::sync::Arc;

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};
use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};

use crate::registry::{HelperCallback, TemplateRegistry};

/// Registers named inline helpers into the engine
pub trait HelperRegistry {
    /// Register every helper this registry carries
    fn register_helpers(&self, registry: &TemplateRegistry);
}

/// Registers named block helpers into the engine
pub trait BlockHelperRegistry {
    /// Register every block helper this registry carries
    fn register_block_helpers(&self, registry: &TemplateRegistry);
}

/// Inline helper registry with the stock helpers plus user additions
pub struct HbsHelpers {
    helpers: Vec<(String, HelperCallback)>,
}

impl HbsHelpers {
    /// Create a registry carrying the stock helpers
    ///
    /// Stock helpers: `spaces` (indentation), `pascal_case`, `camel_case`,
    /// `snake_case`, `kebab_case`.
    pub fn new() -> Self {
        let mut helpers: Vec<(String, HelperCallback)> = Vec::new();
        helpers.push(("spaces".to_string(), Arc::new(spaces_helper) as HelperCallback));
        helpers.push((
            "pascal_case".to_string(),
            Arc::new(pascal_case_helper) as HelperCallback,
        ));
        helpers.push((
            "camel_case".to_string(),
            Arc::new(camel_case_helper) as HelperCallback,
        ));
        helpers.push((
            "snake_case".to_string(),
            Arc::new(snake_case_helper) as HelperCallback,
        ));
        helpers.push((
            "kebab_case".to_string(),
            Arc::new(kebab_case_helper) as HelperCallback,
        ));
        Self { helpers }
    }

    /// Add a user helper, registered after the stock helpers
    ///
    /// A user helper under a stock name overwrites the stock behavior.
    pub fn with_helper(mut self, name: impl Into<String>, callback: HelperCallback) -> Self {
        self.helpers.push((name.into(), callback));
        self
    }
}

impl Default for HbsHelpers {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperRegistry for HbsHelpers {
    fn register_helpers(&self, registry: &TemplateRegistry) {
        for (name, callback) in &self.helpers {
            registry.register_helper(name, callback.clone());
        }
    }
}

/// Block helper registry, empty by default
pub struct HbsBlockHelpers {
    helpers: Vec<(String, HelperCallback)>,
}

impl HbsBlockHelpers {
    /// Create an empty block helper registry
    pub fn new() -> Self {
        Self {
            helpers: Vec::new(),
        }
    }

    /// Add a block helper
    pub fn with_block_helper(mut self, name: impl Into<String>, callback: HelperCallback) -> Self {
        self.helpers.push((name.into(), callback));
        self
    }
}

impl Default for HbsBlockHelpers {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockHelperRegistry for HbsBlockHelpers {
    fn register_block_helpers(&self, registry: &TemplateRegistry) {
        for (name, callback) in &self.helpers {
            registry.register_helper(name, callback.clone());
        }
    }
}

/// Write `n` spaces, for template-controlled indentation
fn spaces_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let count = h
        .param(0)
        .and_then(|p| p.value().as_u64())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("spaces", 0))?;
    out.write(&" ".repeat(count as usize))?;
    Ok(())
}

fn pascal_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("pascal_case", 0))?;
    out.write(&value.to_pascal_case())?;
    Ok(())
}

fn camel_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("camel_case", 0))?;
    out.write(&value.to_lower_camel_case())?;
    Ok(())
}

fn snake_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("snake_case", 0))?;
    out.write(&value.to_snake_case())?;
    Ok(())
}

fn kebab_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("kebab_case", 0))?;
    out.write(&value.to_kebab_case())?;
    Ok(())
}
