//! Page metadata resolution
//!
//! Computes the metadata document attached to a response: title,
//! description, canonical URL, and one alternate-locale link per supported
//! locale. Resolution is a pure function over the request context, the
//! translation bundle, and site configuration; attaching the result to the
//! outgoing document is the shell renderer's job.

use serde::Serialize;

use crate::i18n::TranslationBundle;
use crate::locale::LocaleSet;
use crate::request::RequestContext;

/// Site-wide title template; `%s` is replaced by the page title
const TITLE_TEMPLATE: &str = "%s - ";

/// A hint associating a page with its equivalent in another locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    /// Locale code advertised in the `hreflang` attribute
    pub hreflang: String,

    /// Absolute URL of the equivalent page under that locale
    pub href: String,
}

/// The computed metadata for one response
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    /// Resolved page title
    pub title: String,

    /// Page description from the default translation entry
    pub description: String,

    /// Single authoritative URL declared for the page
    pub canonical: String,

    /// One entry per supported locale, in configured order
    pub alternates: Vec<AlternateLink>,
}

/// Resolves page metadata from request context and site configuration
#[derive(Debug, Clone)]
pub struct MetadataResolver {
    root_domain: String,
    supported: LocaleSet,
}

impl MetadataResolver {
    /// Create a resolver for a site
    pub fn new(root_domain: impl Into<String>, supported: LocaleSet) -> Self {
        Self {
            root_domain: root_domain.into(),
            supported,
        }
    }

    /// Resolve the full metadata document for a request
    ///
    /// A per-page title override is used verbatim; without one the default
    /// translated title is formatted through the site-wide template.
    pub fn resolve(
        &self,
        ctx: &RequestContext,
        bundle: &TranslationBundle,
        title_override: Option<&str>,
    ) -> PageMetadata {
        PageMetadata {
            title: self.resolve_title(bundle, title_override),
            description: bundle.default_description(),
            canonical: self.canonical_url(ctx.invoked_path()),
            alternates: self.alternate_links(ctx.invoked_path()),
        }
    }

    /// Canonical URL for an invoked path
    ///
    /// Always `https://{root_domain}{invoked_path}`; an empty path yields
    /// the bare site origin.
    pub fn canonical_url(&self, invoked_path: &str) -> String {
        format!("https://{}{}", self.root_domain, invoked_path)
    }

    fn resolve_title(&self, bundle: &TranslationBundle, title_override: Option<&str>) -> String {
        match title_override {
            Some(title) => title.to_string(),
            None => {
                let template = format!("{TITLE_TEMPLATE}{}", self.root_domain);
                template.replace("%s", &bundle.default_title())
            }
        }
    }

    fn alternate_links(&self, invoked_path: &str) -> Vec<AlternateLink> {
        let rest = strip_locale_prefix(invoked_path, &self.supported);

        self.supported
            .iter()
            .map(|code| AlternateLink {
                hreflang: code.to_string(),
                href: format!("https://{}/{code}{rest}", self.root_domain),
            })
            .collect()
    }
}

/// Strip a leading supported-locale segment from a path
///
/// `/en/pricing` becomes `/pricing`, `/en` becomes the empty path. Paths
/// whose first segment is not a supported locale pass through unchanged.
fn strip_locale_prefix<'a>(path: &'a str, supported: &LocaleSet) -> &'a str {
    let Some(rest) = path.strip_prefix('/') else {
        return path;
    };

    let first = rest.split('/').next().unwrap_or(rest);
    if first.is_empty() || !supported.contains(first) {
        return path;
    }

    &path[1 + first.len()..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn supported() -> LocaleSet {
        LocaleSet::new(&[
            String::from("en"),
            String::from("es"),
            String::from("ko"),
        ])
        .unwrap()
    }

    fn resolver() -> MetadataResolver {
        MetadataResolver::new("example.com", supported())
    }

    fn ctx(path: &str) -> RequestContext {
        let locale = Locale::parse("en", &supported()).unwrap();
        RequestContext::new(locale, path)
    }

    fn bundle() -> TranslationBundle {
        TranslationBundle::new(Locale::parse("en", &supported()).unwrap())
    }

    #[test]
    fn test_title_override_used_verbatim() {
        let meta = resolver().resolve(&ctx(""), &bundle(), Some("Pricing"));
        assert_eq!(meta.title, "Pricing");
    }

    #[test]
    fn test_default_title_is_templated() {
        let meta = resolver().resolve(&ctx(""), &bundle(), None);
        let expected = format!("{} - example.com", bundle().default_title());
        assert_eq!(meta.title, expected);
    }

    #[test]
    fn test_description_from_default_entry() {
        let meta = resolver().resolve(&ctx(""), &bundle(), None);
        assert_eq!(meta.description, bundle().default_description());
    }

    #[test]
    fn test_canonical_concatenates_domain_and_path() {
        assert_eq!(
            resolver().canonical_url("/en/pricing"),
            "https://example.com/en/pricing"
        );
    }

    #[test]
    fn test_canonical_with_empty_path_is_origin() {
        assert_eq!(resolver().canonical_url(""), "https://example.com");
    }

    #[test]
    fn test_alternates_cover_every_locale_once() {
        let meta = resolver().resolve(&ctx("/en/pricing"), &bundle(), None);

        let langs: Vec<_> = meta.alternates.iter().map(|a| a.hreflang.as_str()).collect();
        assert_eq!(langs, vec!["en", "es", "ko"]);

        assert_eq!(meta.alternates[0].href, "https://example.com/en/pricing");
        assert_eq!(meta.alternates[1].href, "https://example.com/es/pricing");
        assert_eq!(meta.alternates[2].href, "https://example.com/ko/pricing");
    }

    #[test]
    fn test_alternates_for_root_path() {
        let meta = resolver().resolve(&ctx(""), &bundle(), None);
        assert_eq!(meta.alternates[0].href, "https://example.com/en");
        assert_eq!(meta.alternates[2].href, "https://example.com/ko");
    }

    #[test]
    fn test_strip_locale_prefix() {
        let set = supported();
        assert_eq!(strip_locale_prefix("/en/pricing", &set), "/pricing");
        assert_eq!(strip_locale_prefix("/en", &set), "");
        assert_eq!(strip_locale_prefix("/fr/pricing", &set), "/fr/pricing");
        assert_eq!(strip_locale_prefix("/enx", &set), "/enx");
        assert_eq!(strip_locale_prefix("", &set), "");
        assert_eq!(strip_locale_prefix("no-slash", &set), "no-slash");
    }
}
