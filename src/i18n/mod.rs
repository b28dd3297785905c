//! Translation bundles over the embedded message catalogs
//!
//! Catalogs live in `locales/*.yml` and are embedded at compile time by the
//! `rust_i18n::i18n!` declaration at the crate root (see `lib.rs`), with
//! English as the fallback locale. A [`TranslationBundle`] is the
//! per-request view over those catalogs for one validated locale: metadata
//! resolution and shell rendering consume messages through it instead of
//! reaching for the catalogs directly.

use crate::locale::Locale;

/// Message key for the default page title
pub const KEY_DEFAULT_TITLE: &str = "meta.default.title";

/// Message key for the default page description
pub const KEY_DEFAULT_DESCRIPTION: &str = "meta.default.description";

/// Message key for the loading-indicator label
pub const KEY_LOADING: &str = "shell.loading";

/// Per-request translation bundle for one validated locale
#[derive(Debug, Clone)]
pub struct TranslationBundle {
    locale: Locale,
}

impl TranslationBundle {
    /// Create a bundle for a validated locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The locale this bundle resolves messages in
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resolve a message key in this bundle's locale
    ///
    /// Missing keys fall back to the English catalog; a key absent from
    /// every catalog resolves to the key itself, which keeps the failure
    /// visible in rendered output instead of masking it.
    pub fn message(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.locale.code()).into_owned()
    }

    /// Default page title for this locale
    pub fn default_title(&self) -> String {
        self.message(KEY_DEFAULT_TITLE)
    }

    /// Default page description for this locale
    pub fn default_description(&self) -> String {
        self.message(KEY_DEFAULT_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleSet;

    fn bundle(code: &str) -> TranslationBundle {
        let set = LocaleSet::new(&[
            String::from("en"),
            String::from("es"),
            String::from("ko"),
        ])
        .unwrap();
        TranslationBundle::new(Locale::parse(code, &set).unwrap())
    }

    #[test]
    fn test_default_title_resolves() {
        let title = bundle("en").default_title();
        assert!(!title.is_empty());
        assert_ne!(title, KEY_DEFAULT_TITLE);
    }

    #[test]
    fn test_catalogs_register_each_locale() {
        // Locales come from the catalog file stems; a malformed catalog
        // tree would register key fragments instead of locale codes.
        let available = rust_i18n::available_locales!();
        for code in ["en", "es", "ko"] {
            assert!(available.contains(&code), "missing catalog for {code}");
        }
    }

    #[test]
    fn test_messages_resolve_to_catalog_values() {
        assert_eq!(bundle("en").default_title(), "Vitrine");
        assert_eq!(
            bundle("en").default_description(),
            "A localized page shell with metadata resolution."
        );
        assert_eq!(bundle("es").message(KEY_LOADING), "Cargando");
    }

    #[test]
    fn test_locales_differ() {
        let en = bundle("en").default_description();
        let es = bundle("es").default_description();
        assert_ne!(en, es);
    }

    #[test]
    fn test_loading_label_resolves_for_all_locales() {
        for code in ["en", "es", "ko"] {
            let label = bundle(code).message(KEY_LOADING);
            assert!(!label.is_empty());
            assert_ne!(label, KEY_LOADING);
        }
    }

    #[test]
    fn test_bundle_keeps_locale() {
        assert_eq!(bundle("ko").locale().code(), "ko");
    }
}
