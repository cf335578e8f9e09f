//! Locale value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A language tag with an optional country, e.g. `de` or `de-DE`
///
/// The language is stored lower-case and the country upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Create a locale from its parts
    ///
    /// Characters other than ASCII letters and digits are dropped, so any
    /// non-empty locale parses back from its string form. A country left
    /// empty after that is treated as absent.
    #[must_use]
    pub fn new(language: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            language: alphanumeric(&language.into()).to_lowercase(),
            country: country
                .map(alphanumeric)
                .filter(|c| !c.is_empty())
                .map(|c| c.to_uppercase()),
        }
    }

    /// Language-only locale
    #[must_use]
    pub fn language_only(language: impl Into<String>) -> Self {
        Self::new(language, None)
    }

    /// The language tag (may be empty for country-only locales)
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The country code, if any
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// Common locales
impl Locale {
    /// German as spoken in Germany
    #[must_use]
    pub fn germany() -> Self {
        Self::new("de", Some("DE"))
    }

    /// English as spoken in the United Kingdom
    #[must_use]
    pub fn uk() -> Self {
        Self::new("en", Some("GB"))
    }

    /// English as spoken in the United States
    #[must_use]
    pub fn us() -> Self {
        Self::new("en", Some("US"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{country}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

fn alphanumeric(part: &str) -> String {
    part.chars().filter(char::is_ascii_alphanumeric).collect()
}

impl FromStr for Locale {
    type Err = DomainError;

    /// Parse `de`, `de-DE` or `de_DE`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidLocale(s.to_string()));
        }

        let mut parts = s.splitn(2, ['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();

        let valid = |part: &str| part.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid(language) || !country.is_none_or(valid) {
            return Err(DomainError::InvalidLocale(s.to_string()));
        }

        let locale = Self::new(language, country);
        if locale.language.is_empty() && locale.country.is_none() {
            return Err(DomainError::InvalidLocale(s.to_string()));
        }
        Ok(locale)
    }
}

impl TryFrom<String> for Locale {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
