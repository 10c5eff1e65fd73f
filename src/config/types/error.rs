//! Configuration error types.

use super::FieldPath;
use crate::config::section::SocialPlatform;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `quill.toml`.
///
/// All of them are fatal: the site cannot be rendered or edited without a
/// valid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed TOML")]
    Toml(#[from] toml::de::Error),

    /// Two `[[socials]]` entries name the same platform.
    #[error("duplicate social link `{platform}` (entries #{first} and #{second})")]
    DuplicateEntry {
        platform: SocialPlatform,
        first: usize,
        second: usize,
    },

    // Not #[from]: a source() would print every diagnostic twice.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl From<ConfigDiagnostics> for ConfigError {
    fn from(diag: ConfigDiagnostics) -> Self {
        Self::Diagnostics(diag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One problem found in the config, anchored at a field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    /// e.g. `socials[2].href`
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", "hint:".yellow())?;
        }
        Ok(())
    }
}

/// Accumulates problems across every section, so one run reports all of them.
///
/// Warnings are printed through the logger and never fail a load.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.items.push(ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> + '_ {
        self.items.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> + '_ {
        self.items.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn print_warnings(&self) {
        for warning in self.warnings() {
            crate::log!("warning"; "{}: {}", warning.field.as_str(), warning.message);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Number of errors (warnings excluded).
    pub fn len(&self) -> usize {
        self.errors().count()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors().any(|e| e.field.as_str() == path)
    }

    /// `Err(self)` when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        write!(f, "{}", format!("invalid config, {count} {noun}:").red().bold())?;
        for err in self.errors() {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("quill.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(io_err.to_string(), "cannot read `quill.toml`");

        let dup = ConfigError::DuplicateEntry {
            platform: SocialPlatform::Github,
            first: 1,
            second: 3,
        };
        assert_eq!(
            dup.to_string(),
            "duplicate social link `Github` (entries #1 and #3)"
        );
    }

    #[test]
    fn test_diagnostics_collects_all_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.title"), "must not be empty");
        diag.error_with_hint(
            FieldPath::new("site.website"),
            "invalid URL",
            "use format like https://example.com",
        );
        diag.warn(FieldPath::new("site.locale"), "duplicate tag");

        assert_eq!(diag.len(), 2);
        assert!(diag.has_error_at("site.website"));
        assert!(!diag.has_error_at("site.locale"));
        assert_eq!(diag.warnings().count(), 1);

        let display = ConfigError::from(diag).to_string();
        assert!(display.contains("2 problems"));
        assert!(display.contains("must not be empty"));
        assert!(display.contains("use format like https://example.com"));
        assert!(!display.contains("duplicate tag"));
    }

    #[test]
    fn test_warnings_alone_are_not_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("socials"), "no active social links");
        assert!(diag.is_empty());
        assert!(diag.into_result().is_ok());
    }
}
