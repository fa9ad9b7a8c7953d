//! Debate parameters: turn engine control.

use arena_domain::{DEFAULT_CONTEXT_WINDOW, Model, RoleAssignment, Speaker};
use serde::{Deserialize, Serialize};

/// Default number of rounds when none is given.
pub const DEFAULT_ROUNDS: usize = 3;

/// One debater: the backend model and the stance it must argue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponderConfig {
    pub model: Model,
    pub role: String,
}

impl ResponderConfig {
    pub fn new(model: Model, role: impl Into<String>) -> Self {
        Self {
            model,
            role: role.into(),
        }
    }
}

/// Loop control for [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateParams {
    /// Rounds to run; each round is one A turn then one B turn.
    pub rounds: usize,
    /// Prior turns replayed to each responder call.
    pub context_window: usize,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            context_window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

impl DebateParams {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_context_window(mut self, turns: usize) -> Self {
        self.context_window = turns;
        self
    }
}

/// Which model plays which part in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaModels {
    pub responder_a: Model,
    pub responder_b: Model,
    /// Refines the topic and assigns roles
    pub moderator: Model,
    pub judge: Model,
}

impl Default for ArenaModels {
    fn default() -> Self {
        Self {
            responder_a: Model::default_responder_a(),
            responder_b: Model::default_responder_b(),
            moderator: Model::default_moderator(),
            judge: Model::default_judge(),
        }
    }
}

impl ArenaModels {
    /// Pair each responder model with its assigned stance.
    pub fn responders(&self, roles: &RoleAssignment) -> (ResponderConfig, ResponderConfig) {
        (
            ResponderConfig::new(self.responder_a.clone(), roles.role_a.clone()),
            ResponderConfig::new(self.responder_b.clone(), roles.role_b.clone()),
        )
    }

    /// Model backing a speaker, if that speaker calls a model at all.
    pub fn model_for(&self, speaker: Speaker) -> Option<&Model> {
        match speaker {
            Speaker::ResponderA => Some(&self.responder_a),
            Speaker::ResponderB => Some(&self.responder_b),
            Speaker::Judge => Some(&self.judge),
            Speaker::User => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DebateParams::default();
        assert_eq!(params.rounds, 3);
        assert_eq!(params.context_window, 4);

        let models = ArenaModels::default();
        assert_eq!(models.responder_a, Model::Llama31Instant);
        assert_eq!(models.responder_b, Model::Llama4Scout);
        assert_eq!(models.judge, Model::Gemma2);
        assert_eq!(models.model_for(Speaker::User), None);
    }

    #[test]
    fn test_builder_methods() {
        let params = DebateParams::default().with_rounds(1).with_context_window(2);
        assert_eq!(params.rounds, 1);
        assert_eq!(params.context_window, 2);
    }

    #[test]
    fn test_responders_pairs_roles_with_models() {
        let roles = RoleAssignment {
            refined_goal: "goal".to_string(),
            role_a: "pro".to_string(),
            role_b: "con".to_string(),
        };
        let (a, b) = ArenaModels::default().responders(&roles);
        assert_eq!(a, ResponderConfig::new(Model::Llama31Instant, "pro"));
        assert_eq!(b, ResponderConfig::new(Model::Llama4Scout, "con"));
    }
}
