//! Errors raised while loading `stickynav.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    // no #[from]: the diagnostics are the whole message
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// `field: message (hint)` on a single line.
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)?;
        match &self.hint {
            Some(hint) => write!(f, " {}", format_args!("({hint})").dimmed()),
            None => Ok(()),
        }
    }
}

/// Everything one validation pass found.
///
/// Errors fail the load; warnings are only printed.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    pub fn print_warnings(&self) {
        for (field, message) in self.warnings() {
            crate::log!("warning"; "{} {}", field, message);
        }
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// No errors; warnings do not count.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.len() == 1 { "error" } else { "errors" };
        write!(f, "invalid config, {} {noun}:", self.len().red().bold())?;
        for diag in self.errors() {
            write!(f, "\n  - {diag}")?;
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
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("stickynav.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(err.to_string(), "failed to read `stickynav.toml`");
    }

    #[test]
    fn test_into_result() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("site.url"), "not set");
        assert!(diag.is_empty());
        diag.error(FieldPath::new("nav.element"), "empty");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.warnings().len(), 1);
    }

    #[test]
    fn test_display_one_line_per_error() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("nav.element"), "empty");
        diag.error_with_hint(FieldPath::new("blog.prefix"), "bad", "drop the slash");
        let text = diag.to_string();

        assert_eq!(text.lines().count(), 3);
        assert!(text.contains(" errors:"));
        assert!(text.lines().nth(1).unwrap().contains("`nav.element`"));
        let prefix = text.lines().nth(2).unwrap();
        assert!(prefix.contains("`blog.prefix`"));
        assert!(prefix.contains("(drop the slash)"));
    }

    #[test]
    fn test_single_error_is_singular() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("nav.element"), "empty");
        assert!(diag.to_string().contains(" error:"));
    }
}
