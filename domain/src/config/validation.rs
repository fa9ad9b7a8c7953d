//! Structured configuration issues.
//!
//! Loaders report problems as [`ConfigIssue`] values instead of failing on
//! the first one, so the shell can show every issue at once and decide
//! which are fatal.
//!
//! # Examples
//!
//! ```
//! use arena_domain::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issue = ConfigIssue::error(
//!     ConfigIssueCode::ZeroValue { field: "debate.rounds".to_string() },
//!     "debate.rounds: must be at least 1",
//! );
//! assert!(issue.is_fatal());
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model field was set to an empty string.
    EmptyModelName { field: String },
    /// A count that must be positive was zero.
    ZeroValue { field: String },
    /// Both responders use the same model; the debate still runs.
    SameResponderModels,
    /// A provider setting is present but unusable (e.g. blank base URL).
    InvalidProviderSetting { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let warning = ConfigIssue::warning(ConfigIssueCode::SameResponderModels, "same model");
        assert_eq!(warning.severity, Severity::Warning);
        assert!(!warning.is_fatal());

        let error = ConfigIssue::error(
            ConfigIssueCode::EmptyModelName {
                field: "judge".to_string(),
            },
            "models.judge: model name cannot be empty",
        );
        assert!(error.is_fatal());
        assert_eq!(error.message, "models.judge: model name cannot be empty");
    }
}
