//! Speaker and Turn value objects

use serde::{Deserialize, Serialize};

/// Who produced a turn (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The person who supplied the topic
    User,
    /// First debater, always speaks first in a round
    ResponderA,
    /// Second debater, always answers responder A
    ResponderB,
    /// Evaluates a finished debate; never stored in a transcript
    Judge,
}

impl Speaker {
    /// Identity label a responder is told in its system instruction
    /// (`llm_1` / `llm_2`); also the keys of the role-assignment JSON.
    pub fn identity(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::ResponderA => "llm_1",
            Speaker::ResponderB => "llm_2",
            Speaker::Judge => "judge",
        }
    }

    /// Line label used when the transcript is flattened for the judge.
    pub fn transcript_label(&self) -> &'static str {
        match self {
            Speaker::User => "TOPIC",
            Speaker::ResponderA => "LLM1",
            Speaker::ResponderB => "LLM2",
            Speaker::Judge => "JUDGE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::ResponderA => "LLM 1",
            Speaker::ResponderB => "LLM 2",
            Speaker::Judge => "Judge",
        }
    }

    pub fn is_responder(&self) -> bool {
        matches!(self, Speaker::ResponderA | Speaker::ResponderB)
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One utterance in a debate (Value Object)
///
/// Immutable once created: the transcript hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responder_labels() {
        assert_eq!(Speaker::ResponderA.identity(), "llm_1");
        assert_eq!(Speaker::ResponderB.identity(), "llm_2");
        assert_eq!(Speaker::ResponderA.transcript_label(), "LLM1");
        assert_eq!(Speaker::User.transcript_label(), "TOPIC");
    }

    #[test]
    fn test_only_llms_are_responders() {
        assert!(Speaker::ResponderA.is_responder());
        assert!(Speaker::ResponderB.is_responder());
        assert!(!Speaker::User.is_responder());
        assert!(!Speaker::Judge.is_responder());
    }

    #[test]
    fn test_speaker_serde() {
        let json = serde_json::to_string(&Speaker::ResponderB).unwrap();
        assert_eq!(json, "\"responder_b\"");
    }
}
