//! Variable substitution for the project blueprint.

use std::collections::HashMap;

use chrono::Datelike;

use crate::domain::config::GenerationConfig;

/// Context for rendering blueprint files.
///
/// A **Value Object** holding the variables a blueprint may reference as
/// `{{NAME}}`. Every [`GenerationConfig`] key is exposed upper-cased
/// (`package_name` → `PACKAGE_NAME`), alongside `YEAR`.
///
/// ## Built-in Variables
///
/// | Variable       | Example    | Source           |
/// |----------------|------------|------------------|
/// | `PACKAGE_NAME` | "pymx"     | Generation config |
/// | `LINE_LENGTH`  | "79"       | Generation config |
/// | `YEAR`         | "2026"     | System clock     |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build a context from every key in `config`.
    pub fn from_config(config: &GenerationConfig) -> Self {
        let mut variables: HashMap<String, String> = config
            .iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), v.to_string()))
            .collect();

        variables
            .entry("YEAR".to_string())
            .or_insert_with(|| chrono::Local::now().year().to_string());

        Self { variables }
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// User-defined variables override built-ins.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace `{{VARIABLE}}` placeholders in one left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}`
    /// - `{{A}}{{A}}` → both replaced
    /// - substituted values are never scanned again
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let hit = after
                .find("}}")
                .and_then(|end| self.variables.get(&after[..end]).map(|v| (end, v)));

            match hit {
                Some((end, value)) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                // Step one brace so `{{{KEY}}}` still finds `{{KEY}}`.
                None => {
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_config_keys_upper_cased() {
        let ctx = RenderContext::from_config(&GenerationConfig::default());

        assert_eq!(ctx.get("PACKAGE_NAME"), Some("pymx"));
        assert_eq!(ctx.get("LINE_LENGTH"), Some("79"));
        assert!(ctx.get("YEAR").is_some());
    }

    #[test]
    fn renders_known_and_keeps_unknown() {
        let ctx = RenderContext::from_config(&GenerationConfig::default())
            .with_variable("YEAR", "2026");

        assert_eq!(
            ctx.render("{{PACKAGE_NAME}} ({{YEAR}}) {{NOPE}}"),
            "pymx (2026) {{NOPE}}"
        );
        assert_eq!(ctx.render("{{PACKAGE_NAME}}{{PACKAGE_NAME}}"), "pymxpymx");
    }

    #[test]
    fn values_are_not_rendered_twice() {
        let ctx = RenderContext::from_config(
            &GenerationConfig::default().with("short_description", "see {{PACKAGE_NAME}}"),
        );

        for _ in 0..50 {
            assert_eq!(
                ctx.render("{{SHORT_DESCRIPTION}}"),
                "see {{PACKAGE_NAME}}"
            );
        }
    }

    #[test]
    fn stray_braces_pass_through() {
        let ctx = RenderContext::from_config(&GenerationConfig::default());

        assert_eq!(ctx.render("{{{PACKAGE_NAME}}}"), "{pymx}");
        assert_eq!(ctx.render("{{ unterminated"), "{{ unterminated");
        assert_eq!(ctx.render("}} {{"), "}} {{");
    }
}
