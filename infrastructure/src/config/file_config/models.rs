//! Role-based model configuration from TOML (`[models]` section)

use arena_domain::Model;
use arena_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Which model plays which part
///
/// # Example
///
/// ```toml
/// [models]
/// responder_a = "llama-3.1-8b-instant"
/// responder_b = "meta-llama/llama-4-scout-17b-16e-instruct"
/// moderator = "llama-3.1-8b-instant"       # Refines the topic, assigns roles
/// judge = "gemma2-9b-it"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub responder_a: Option<String>,
    pub responder_b: Option<String>,
    pub moderator: Option<String>,
    pub judge: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    pub fn parse_responder_a(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("responder_a", self.responder_a.as_ref())
    }

    pub fn parse_responder_b(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("responder_b", self.responder_b.as_ref())
    }

    pub fn parse_moderator(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("moderator", self.moderator.as_ref())
    }

    pub fn parse_judge(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("judge", self.judge.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_config_defaults() {
        let config = FileModelsConfig::default();
        assert!(config.responder_a.is_none());
        assert!(config.responder_b.is_none());
        assert!(config.moderator.is_none());
        assert!(config.judge.is_none());
    }

    #[test]
    fn test_models_config_deserialize() {
        let toml_str = r#"
[models]
responder_a = "llama-3.1-8b-instant"
judge = "mixtral-8x7b-32768"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.parse_responder_a().0, Some(Model::Llama31Instant));
        assert_eq!(
            config.models.parse_judge().0,
            Some(Model::Custom("mixtral-8x7b-32768".to_string()))
        );
        assert!(config.models.parse_responder_b().0.is_none());
    }

    #[test]
    fn test_empty_model_name_is_an_issue() {
        let config = FileModelsConfig {
            moderator: Some("  ".to_string()),
            ..Default::default()
        };
        let (model, issues) = config.parse_moderator();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_fatal());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyModelName {
                field: "moderator".to_string()
            }
        );
    }
}
