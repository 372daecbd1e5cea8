//! Generation configuration: the operator-supplied answers that drive one
//! project generation.
//!
//! A [`GenerationConfig`] is a plain key → string mapping. It is built once
//! per run (defaults, then answers file, then command-line values), handed to
//! the validation gate and the renderer, and discarded afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Well-known configuration keys.
pub mod keys {
    pub const PACKAGE_NAME: &str = "package_name";
    pub const SHORT_DESCRIPTION: &str = "short_description";
    pub const AUTHOR_NAME: &str = "author_name";
    pub const AUTHOR_EMAIL: &str = "author_email";
    pub const LINE_LENGTH: &str = "line_length";
    pub const USE_PYLINT: &str = "use_pylint";
    pub const USE_MYPY: &str = "use_mypy";

    /// Every key the built-in blueprint understands, in prompt order.
    pub const ALL: [&str; 7] = [
        PACKAGE_NAME,
        SHORT_DESCRIPTION,
        AUTHOR_NAME,
        AUTHOR_EMAIL,
        LINE_LENGTH,
        USE_PYLINT,
        USE_MYPY,
    ];
}

/// Operator-supplied generation parameters.
///
/// `Default` yields the blueprint defaults; [`GenerationConfig::new`] yields
/// an empty mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationConfig {
    values: BTreeMap<String, String>,
}

impl GenerationConfig {
    /// Empty configuration with no keys set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a missing key is a [`DomainError::MissingKey`].
    pub fn require(&self, key: &str) -> Result<&str, DomainError> {
        self.get(key).ok_or_else(|| DomainError::MissingKey { key: key.into() })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overlay `other` on top of `self`; values in `other` win.
    pub fn merge(mut self, other: &GenerationConfig) -> Self {
        for (k, v) in &other.values {
            self.values.insert(k.clone(), v.clone());
        }
        self
    }

    /// Interpret a toggle key (`"y"`, `"yes"`, `"true"`, `"1"`, any case).
    ///
    /// Missing keys read as disabled.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "y" | "yes" | "true" | "1"
            )
        })
    }

    /// Package name, or `MissingKey`.
    pub fn package_name(&self) -> Result<&str, DomainError> {
        self.require(keys::PACKAGE_NAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
            .with(keys::PACKAGE_NAME, "pymx")
            .with(keys::SHORT_DESCRIPTION, "A short description of the project.")
            .with(keys::AUTHOR_NAME, "Your Name")
            .with(keys::AUTHOR_EMAIL, "you@example.com")
            .with(keys::LINE_LENGTH, "79")
            .with(keys::USE_PYLINT, "n")
            .with(keys::USE_MYPY, "n")
    }
}

impl<K, V> FromIterator<(K, V)> for GenerationConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cfg = Self::new();
        for (k, v) in iter {
            cfg.set(k, v);
        }
        cfg
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v:?}")).collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}
