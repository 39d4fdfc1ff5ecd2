//! Shared template engine registry
//!
//! Wraps a single `handlebars` registry behind a lock so helper and template
//! registration from repeated or concurrent generation runs has defined
//! overwrite semantics. HTML escaping is disabled because the output is source
//! code, not markup.

use std::sync::Arc;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    ScopedJson,
};
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::ScaffoldError;

/// A shareable helper implementation
///
/// Plain functions with the `handlebars` helper signature coerce into this
/// through the engine's blanket `HelperDef` impl; block helpers implement
/// `HelperDef` directly. The `Arc` lets one helper be re-registered on every
/// generation run.
pub type HelperCallback = Arc<dyn HelperDef + Send + Sync>;

/// Adapter so one shared helper can be handed to the engine repeatedly
struct SharedHelper(HelperCallback);

impl HelperDef for SharedHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        self.0.call_inner(h, r, ctx, rc)
    }

    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        self.0.call(h, r, ctx, rc, out)
    }
}

/// Shared wrapper around the template engine
///
/// Cloning is cheap and clones share the same underlying registry.
#[derive(Clone)]
pub struct TemplateRegistry {
    inner: Arc<Mutex<Handlebars<'static>>>,
}

impl TemplateRegistry {
    /// Create a registry with escaping disabled
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self {
            inner: Arc::new(Mutex::new(handlebars)),
        }
    }

    /// Register a named helper, overwriting any previous registration
    pub fn register_helper(&self, name: &str, helper: HelperCallback) {
        self.inner
            .lock()
            .register_helper(name, Box::new(SharedHelper(helper)));
    }

    /// Register a named template or partial, overwriting any previous registration
    ///
    /// Partials share the template namespace, so a template registered here is
    /// addressable both by `render` and by `{{> name}}` inclusion.
    pub fn register_template(&self, name: &str, template: &str) -> Result<(), ScaffoldError> {
        self.inner.lock().register_template_string(name, template)?;
        Ok(())
    }

    /// Check whether a named template is registered
    pub fn has_template(&self, name: &str) -> bool {
        self.inner.lock().has_template(name)
    }

    /// Render a registered template with the given data
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, ScaffoldError> {
        let rendered = self.inner.lock().render(name, data)?;
        Ok(rendered)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
