//! Document shell rendering with the Handlebars template engine
//!
//! The shell wraps pre-rendered page content in a full HTML document: the
//! root element carries the request locale, the head carries the resolved
//! metadata (title, description, canonical and alternate links) plus an
//! inline theme bootstrap that picks dark/light before first paint, and the
//! body carries a loading indicator and, when an analytics identifier is
//! configured, the analytics script pair.

use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::i18n::{TranslationBundle, KEY_LOADING};
use crate::metadata::{AlternateLink, PageMetadata};
use crate::request::RequestContext;

/// Default shell template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/shell.hbs");

/// Template data for rendering one document
#[derive(Debug, Serialize)]
struct ShellTemplateData<'a> {
    locale: &'a str,
    title: &'a str,
    description: &'a str,
    canonical: &'a str,
    alternates: &'a [AlternateLink],
    loading_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytics_id: Option<&'a str>,
    content: &'a str,
}

/// Shell renderer with a registered Handlebars template
pub struct ShellRenderer {
    /// Handlebars template engine
    handlebars: Handlebars<'static>,

    /// Analytics identifier; scripts are injected only when present
    analytics_id: Option<String>,
}

impl ShellRenderer {
    /// Create a renderer with the default shell template
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("shell", DEFAULT_TEMPLATE)?;

        Ok(Self {
            handlebars,
            analytics_id: site.analytics_id.clone(),
        })
    }

    /// Create a renderer with a custom template file
    pub fn with_template(site: &SiteConfig, template_path: &Path) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_file("shell", template_path)?;

        Ok(Self {
            handlebars,
            analytics_id: site.analytics_id.clone(),
        })
    }

    /// Render the document shell around pre-rendered content
    ///
    /// `content` is treated as an opaque, already-rendered HTML fragment and
    /// embedded without escaping. Both canonical emissions (metadata and the
    /// head link element) come from the same resolved [`PageMetadata`], so
    /// they cannot drift apart.
    pub fn render(
        &self,
        ctx: &RequestContext,
        bundle: &TranslationBundle,
        metadata: &PageMetadata,
        content: &str,
    ) -> Result<String> {
        let data = ShellTemplateData {
            locale: ctx.locale().code(),
            title: &metadata.title,
            description: &metadata.description,
            canonical: &metadata.canonical,
            alternates: &metadata.alternates,
            loading_label: bundle.message(KEY_LOADING),
            analytics_id: self.analytics_id.as_deref(),
            content,
        };

        let html = self.handlebars.render("shell", &data)?;
        Ok(html)
    }
}
