//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod logging;
mod models;
mod output;
mod provider;

pub use debate::FileDebateConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use arena_application::{ArenaModels, DebateParams};
use arena_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Round count and context window
    pub debate: FileDebateConfig,
    /// Chat-completions endpoint and credentials
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors: blank model names, zero rounds, zero context window, blank
    /// base URL. Warnings: both responders on the same model, zero timeout.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_responder_a().1);
        issues.extend(self.models.parse_responder_b().1);
        issues.extend(self.models.parse_moderator().1);
        issues.extend(self.models.parse_judge().1);

        issues.extend(self.debate.validate());
        issues.extend(self.provider.validate());

        let models = self.arena_models();
        if models.responder_a == models.responder_b {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SameResponderModels,
                format!(
                    "models: both responders use {}; the debate will argue with itself",
                    models.responder_a
                ),
            ));
        }

        issues
    }

    /// Resolve model roles, falling back to the built-in defaults.
    pub fn arena_models(&self) -> ArenaModels {
        let defaults = ArenaModels::default();
        ArenaModels {
            responder_a: self.models.parse_responder_a().0.unwrap_or(defaults.responder_a),
            responder_b: self.models.parse_responder_b().0.unwrap_or(defaults.responder_b),
            moderator: self.models.parse_moderator().0.unwrap_or(defaults.moderator),
            judge: self.models.parse_judge().0.unwrap_or(defaults.judge),
        }
    }

    pub fn debate_params(&self) -> DebateParams {
        DebateParams::default()
            .with_rounds(self.debate.rounds)
            .with_context_window(self.debate.context_window)
    }
}
