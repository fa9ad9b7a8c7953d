//! Provider configuration from TOML (`[provider]` section)

use arena_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completions endpoint (Groq by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL without the `/v1/chat/completions` suffix.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 120,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: explicit value first, then the named env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidProviderSetting {
                    field: "provider.base_url".to_string(),
                },
                "provider.base_url: cannot be empty",
            ));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidProviderSetting {
                    field: "provider.timeout_secs".to_string(),
                },
                "provider.timeout_secs: 0 disables the request timeout",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let config = FileProviderConfig::default();
        assert_eq!(config.base_url, "https://api.groq.com/openai");
        assert_eq!(config.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.timeout_secs, 120);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("gsk_test".to_string()),
            api_key_env: "ARENA_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("gsk_test".to_string()));
    }

    #[test]
    fn test_missing_api_key() {
        let config = FileProviderConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "ARENA_TEST_DEFINITELY_UNSET_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_provider_deserialize() {
        let toml_str = r#"
[provider]
base_url = "http://localhost:8080"
temperature = 0.7
max_tokens = 512
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.temperature, Some(0.7));
        assert_eq!(config.provider.max_tokens, Some(512));
        assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
    }
}
