//! Pre-generation validation.
//!
//! Two independent checks guard every generation run:
//!
//! - the package name must be importable as a Python module
//!   (`^[_a-zA-Z][_a-zA-Z0-9]+$`), and
//! - the configured line length must be at least [`MIN_LINE_LENGTH`], the
//!   width the generated flake8/black configuration enforces.
//!
//! Each check is a [`ConfigCheck`]. A [`ValidationGate`] runs an ordered
//! list of them and stops at the first failure.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::{
    config::{GenerationConfig, keys},
    error::DomainError,
    entities::ProjectStructure,
};

/// Narrowest line length the generated lint configuration accepts.
pub const MIN_LINE_LENGTH: i64 = 79;

static MODULE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]+$").expect("module name pattern is valid")
});

/// Check that `name` is a legal Python module name of at least two characters.
pub fn validate_package_name(name: &str) -> Result<(), DomainError> {
    if MODULE_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(DomainError::InvalidName { name: name.into() })
    }
}

/// Parse `raw` as an integer and check it is not below [`MIN_LINE_LENGTH`].
///
/// Surrounding whitespace is ignored. Integers of any size are accepted.
pub fn validate_line_length(raw: &str) -> Result<(), DomainError> {
    canonical_line_length(raw).map(|_| ())
}

/// Validate `raw` like [`validate_line_length`] and return the accepted
/// value in canonical decimal form: no whitespace, no sign, no leading
/// zeros. Generated files must use this form, never the raw input.
pub fn canonical_line_length(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::NotAnInteger { raw: raw.into() });
    }

    let magnitude = match digits.trim_start_matches('0') {
        "" => "0",
        m => m,
    };
    let too_short = |value: String| DomainError::TooShort {
        value,
        minimum: MIN_LINE_LENGTH,
    };

    if negative && magnitude != "0" {
        return Err(too_short(format!("-{magnitude}")));
    }

    // All digits, so the only parse failure left is overflow, which is far
    // above the floor.
    match magnitude.parse::<i64>() {
        Ok(n) if n < MIN_LINE_LENGTH => Err(too_short(magnitude.to_string())),
        _ => Ok(magnitude.to_string()),
    }
}

// ============================================================================
// Composable checks
// ============================================================================

/// A single predicate over a [`GenerationConfig`].
pub trait ConfigCheck: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn check(&self, config: &GenerationConfig) -> Result<(), DomainError>;
}

/// `package_name` must be an importable module name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageNameCheck;

impl ConfigCheck for PackageNameCheck {
    fn name(&self) -> &'static str {
        "package_name"
    }

    fn check(&self, config: &GenerationConfig) -> Result<(), DomainError> {
        validate_package_name(config.require(keys::PACKAGE_NAME)?)
    }
}

/// `line_length` must be an integer ≥ [`MIN_LINE_LENGTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLengthCheck;

impl ConfigCheck for LineLengthCheck {
    fn name(&self) -> &'static str {
        "line_length"
    }

    fn check(&self, config: &GenerationConfig) -> Result<(), DomainError> {
        validate_line_length(config.require(keys::LINE_LENGTH)?)
    }
}

/// Package names that collide with a directory every generated project has.
pub const RESERVED_PACKAGE_NAMES: [&str; 1] = ["tests"];

/// `package_name` must not collide with the generated layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservedNameCheck;

impl ConfigCheck for ReservedNameCheck {
    fn name(&self) -> &'static str {
        "reserved_name"
    }

    fn check(&self, config: &GenerationConfig) -> Result<(), DomainError> {
        let name = config.require(keys::PACKAGE_NAME)?;
        if RESERVED_PACKAGE_NAMES.contains(&name) {
            return Err(DomainError::ReservedName { name: name.into() });
        }
        Ok(())
    }
}

/// Ordered, fail-fast collection of [`ConfigCheck`]s.
pub struct ValidationGate {
    checks: Vec<Box<dyn ConfigCheck>>,
}

impl ValidationGate {
    /// Gate with no checks; accepts everything.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// Package name first, then line length, then layout collisions.
    pub fn standard() -> Self {
        Self::empty()
            .with_check(PackageNameCheck)
            .with_check(LineLengthCheck)
            .with_check(ReservedNameCheck)
    }

    /// Package name checks only.
    pub fn name_only() -> Self {
        Self::empty()
            .with_check(PackageNameCheck)
            .with_check(ReservedNameCheck)
    }

    /// Append a check; it runs after every check already present.
    pub fn with_check(mut self, check: impl ConfigCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every check in order, returning the first failure.
    #[instrument(skip_all, fields(checks = self.checks.len()))]
    pub fn validate(&self, config: &GenerationConfig) -> Result<(), DomainError> {
        for check in &self.checks {
            check.check(config)?;
            debug!(check = check.name(), "check passed");
        }
        Ok(())
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationGate")
            .field("checks", &self.check_names())
            .finish()
    }
}

/// Centralized structural validation for rendered output.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
