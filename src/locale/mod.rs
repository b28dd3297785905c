//! Locale validation against the configured supported-locale set
//!
//! A [`Locale`] can only be constructed through [`Locale::parse`], which
//! checks the candidate code against a [`LocaleSet`]. Holding a `Locale` is
//! therefore proof of membership; downstream code never re-validates.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// Ordered, duplicate-free set of supported locale codes
///
/// Built once from configuration and shared across requests. Iteration
/// order follows the configured order, which also drives the order of
/// alternate-locale links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    codes: Vec<String>,
}

impl LocaleSet {
    /// Build a locale set from configured codes
    ///
    /// Duplicates are dropped (first occurrence wins). An empty set is a
    /// configuration error.
    pub fn new(codes: &[String]) -> Result<Self> {
        let mut deduped: Vec<String> = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.trim();
            if code.is_empty() {
                return Err(Error::config("locale codes must not be empty"));
            }
            if !deduped.iter().any(|c| c == code) {
                deduped.push(code.to_string());
            }
        }

        if deduped.is_empty() {
            return Err(Error::config("locale set must not be empty"));
        }

        Ok(Self { codes: deduped })
    }

    /// Check whether a candidate code is in the set
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Iterate over the codes in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Number of supported locales
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the set is empty (never true for a constructed set)
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A locale code validated against the supported set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Locale {
    code: String,
}

impl Locale {
    /// Validate a candidate locale code against the supported set
    ///
    /// On rejection the caller must short-circuit to a not-found outcome;
    /// no content is rendered and no metadata is computed.
    pub fn parse(code: &str, supported: &LocaleSet) -> Result<Self> {
        if supported.contains(code) {
            Ok(Self {
                code: code.to_string(),
            })
        } else {
            Err(Error::unsupported_locale(code))
        }
    }

    /// The validated locale code
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> LocaleSet {
        LocaleSet::new(&[
            String::from("en"),
            String::from("es"),
            String::from("ko"),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_supported_locale() {
        let locale = Locale::parse("es", &set()).unwrap();
        assert_eq!(locale.code(), "es");
        assert_eq!(locale.to_string(), "es");
    }

    #[test]
    fn test_parse_unsupported_locale() {
        let err = Locale::parse("fr", &set()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // "EN" is not the configured code "en"; reject rather than guess
        assert!(Locale::parse("EN", &set()).is_err());
    }

    #[test]
    fn test_parse_empty_code() {
        assert!(Locale::parse("", &set()).is_err());
    }

    #[test]
    fn test_set_preserves_order_and_dedups() {
        let set = LocaleSet::new(&[
            String::from("ko"),
            String::from("en"),
            String::from("ko"),
        ])
        .unwrap();
        let codes: Vec<_> = set.iter().collect();
        assert_eq!(codes, vec!["ko", "en"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(LocaleSet::new(&[]).is_err());
    }

    #[test]
    fn test_blank_code_rejected() {
        assert!(LocaleSet::new(&[String::from("  ")]).is_err());
    }
}
