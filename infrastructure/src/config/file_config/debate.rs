//! Debate loop configuration from TOML (`[debate]` section)

use arena_application::DebateParams;
use arena_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw debate configuration from TOML
///
/// ```toml
/// [debate]
/// rounds = 3
/// context_window = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub rounds: usize,
    /// Prior turns replayed to each responder call
    pub context_window: usize,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        let params = DebateParams::default();
        Self {
            rounds: params.rounds,
            context_window: params.context_window,
        }
    }
}

impl FileDebateConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.rounds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "debate.rounds".to_string(),
                },
                "debate.rounds: must be at least 1",
            ));
        }
        if self.context_window == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "debate.context_window".to_string(),
                },
                "debate.context_window: responders need at least the latest turn",
            ));
        }
        issues
    }
}
