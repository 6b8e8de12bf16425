//! URL modeling for the bytebank câmbio page.
//!
//! A [`CambioUrl`] is a validated, immutable URL split into its base and
//! query parts. The query string is parsed once at construction; every
//! parameter lookup reuses that result.

mod error;
mod pattern;
mod query;

use std::fmt;
use std::str::FromStr;

pub use error::{ParameterError, ValidationError};
pub use pattern::matches_cambio_prefix;
pub use query::QueryParams;

/// A validated bytebank câmbio URL.
///
/// Equality and hashing consider only the stored (trimmed) URL text.
#[derive(Debug, Clone)]
pub struct CambioUrl {
    text: String,
    params: QueryParams,
}

impl CambioUrl {
    /// Trims `raw` and validates it against the accepted câmbio prefix.
    ///
    /// Only the prefix is checked: whatever follows `/cambio`, including a
    /// missing or malformed query string, is accepted.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !matches_cambio_prefix(text) {
            return Err(ValidationError::PatternMismatch {
                url: text.to_string(),
            });
        }

        let params = QueryParams::parse(query_part(text));
        tracing::debug!(url = text, params = params.len(), "parsed câmbio url");

        Ok(Self {
            text: text.to_string(),
            params,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Everything before the first `?`, or the whole URL if there is none.
    pub fn base(&self) -> &str {
        match self.text.split_once('?') {
            Some((base, _)) => base,
            None => &self.text,
        }
    }

    /// Everything after the first `?`; empty if there is none.
    pub fn query_string(&self) -> &str {
        query_part(&self.text)
    }

    /// Value of the parameter named exactly `name`.
    pub fn parameter(&self, name: &str) -> Result<&str, ParameterError> {
        let value = self.params.get(name);
        tracing::debug!(name, found = value.is_some(), "parameter lookup");
        value.ok_or_else(|| ParameterError::NotFound {
            name: name.to_string(),
        })
    }

    /// Parsed `(key, value)` pairs in query order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter()
    }

    /// Length of the URL in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn query_part(text: &str) -> &str {
    text.split_once('?').map(|(_, query)| query).unwrap_or("")
}

impl FromStr for CambioUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq for CambioUrl {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for CambioUrl {}

impl std::hash::Hash for CambioUrl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for CambioUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nBase da URL: {}\nParâmetros da URL: {}",
            self.text,
            self.base(),
            self.query_string()
        )
    }
}
