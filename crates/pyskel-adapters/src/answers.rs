//! Answers files: pre-filled generation values in TOML.
//!
//! ```toml
//! package_name = "pymx"
//! line_length = 88
//! use_mypy = true
//! ```
//!
//! Strings are taken verbatim, integers are stringified and booleans become
//! `"y"`/`"n"`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pyskel_core::{
    domain::GenerationConfig,
    error::{PyskelError, PyskelResult},
};
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl AnswerValue {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Integer(n) => n.to_string(),
            Self::Flag(true) => "y".into(),
            Self::Flag(false) => "n".into(),
        }
    }
}

/// Parse answers from TOML source.
pub fn parse_answers(source: &str) -> PyskelResult<GenerationConfig> {
    let values: BTreeMap<String, AnswerValue> =
        toml::from_str(source).map_err(|e| PyskelError::Configuration {
            message: format!("invalid answers file: {e}"),
        })?;

    Ok(values
        .into_iter()
        .map(|(k, v)| (k, v.into_string()))
        .collect())
}

/// Read and parse an answers file.
#[instrument(fields(path = %path.display()))]
pub fn load_answers(path: &Path) -> PyskelResult<GenerationConfig> {
    let raw = fs::read_to_string(path).map_err(|e| PyskelError::Configuration {
        message: format!("cannot read answers file '{}': {e}", path.display()),
    })?;

    let config = parse_answers(&raw)?;
    debug!(keys = config.len(), "answers loaded");
    Ok(config)
}
