//! Transcript entity: the append-only record of one debate session.

use super::turn::{Speaker, Turn};
use crate::session::entities::Message;
use serde::Serialize;
use thiserror::Error;

/// Number of prior turns a responder sees by default.
pub const DEFAULT_CONTEXT_WINDOW: usize = 4;

/// Errors raised when a transcript invariant would be broken
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Debate topic cannot be empty")]
    EmptyTopic,

    #[error("Out-of-order turn: expected {expected}, got {actual}")]
    OutOfOrder { expected: Speaker, actual: Speaker },
}

/// Ordered, append-only log of turns (Entity)
///
/// Turn 0 is always the user's topic; after that turns strictly alternate
/// responder A, responder B, responder A, ... Nothing can be removed or
/// edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Start a transcript with the user's topic as turn 0.
    pub fn new(topic: impl Into<String>) -> Result<Self, TranscriptError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(TranscriptError::EmptyTopic);
        }
        Ok(Self {
            turns: vec![Turn::new(Speaker::User, topic)],
        })
    }

    /// The original topic text.
    pub fn topic(&self) -> &str {
        self.turns[0].text()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Total turns including the topic.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// The most recently appended turn (the topic if no one has spoken yet).
    pub fn last(&self) -> &Turn {
        // turn 0 always exists
        &self.turns[self.turns.len() - 1]
    }

    /// Who is allowed to speak next.
    pub fn next_speaker(&self) -> Speaker {
        match self.last().speaker() {
            Speaker::ResponderA => Speaker::ResponderB,
            _ => Speaker::ResponderA,
        }
    }

    /// Append a responder turn, enforcing A/B alternation.
    pub fn append(
        &mut self,
        speaker: Speaker,
        text: impl Into<String>,
    ) -> Result<&Turn, TranscriptError> {
        let expected = self.next_speaker();
        if speaker != expected {
            return Err(TranscriptError::OutOfOrder {
                expected,
                actual: speaker,
            });
        }
        self.turns.push(Turn::new(speaker, text));
        Ok(self.last())
    }

    pub fn responder_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.speaker().is_responder())
    }

    pub fn has_responder_turns(&self) -> bool {
        self.turns.len() > 1
    }

    /// Rounds in which both responders have spoken.
    pub fn rounds_completed(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| t.speaker() == Speaker::ResponderB)
            .count()
    }

    /// The last `limit` turns as chat messages.
    ///
    /// The user's topic maps to [`Role::User`](crate::session::entities::Role);
    /// every responder turn maps to `Assistant` regardless of who wrote it,
    /// so neither responder is biased towards its own lines.
    pub fn context_window(&self, limit: usize) -> Vec<Message> {
        let start = self.turns.len().saturating_sub(limit);
        self.turns[start..]
            .iter()
            .map(|turn| match turn.speaker() {
                Speaker::User => Message::user(turn.text()),
                _ => Message::assistant(turn.text()),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    fn debate_with(turns: usize) -> Transcript {
        let mut transcript = Transcript::new("Is tea better than coffee?").unwrap();
        for i in 0..turns {
            let speaker = transcript.next_speaker();
            transcript.append(speaker, format!("turn {}", i + 1)).unwrap();
        }
        transcript
    }

    #[test]
    fn test_new_starts_with_topic() {
        let transcript = Transcript::new("Cats vs dogs").unwrap();
        assert_eq!(transcript.turn_count(), 1);
        assert_eq!(transcript.topic(), "Cats vs dogs");
        assert_eq!(transcript.last().speaker(), Speaker::User);
        assert!(!transcript.has_responder_turns());
        assert_eq!(transcript.next_speaker(), Speaker::ResponderA);
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert_eq!(Transcript::new("  \n"), Err(TranscriptError::EmptyTopic));
    }

    #[test]
    fn test_alternation_enforced() {
        let mut transcript = Transcript::new("topic").unwrap();
        assert_eq!(
            transcript.append(Speaker::ResponderB, "too early"),
            Err(TranscriptError::OutOfOrder {
                expected: Speaker::ResponderA,
                actual: Speaker::ResponderB,
            })
        );
        transcript.append(Speaker::ResponderA, "a").unwrap();
        assert!(transcript.append(Speaker::ResponderA, "again").is_err());
        assert!(transcript.append(Speaker::User, "interrupt").is_err());
        assert!(transcript.append(Speaker::Judge, "verdict").is_err());
        transcript.append(Speaker::ResponderB, "b").unwrap();
        assert_eq!(transcript.turn_count(), 3);
        assert_eq!(transcript.rounds_completed(), 1);
    }

    #[test]
    fn test_failed_append_leaves_transcript_untouched() {
        let mut transcript = debate_with(1);
        let before = transcript.clone();
        let _ = transcript.append(Speaker::ResponderA, "nope");
        assert_eq!(transcript, before);
    }

    #[test]
    fn test_context_window_short_transcript() {
        let transcript = debate_with(1);
        let window = transcript.context_window(DEFAULT_CONTEXT_WINDOW);
        assert_eq!(
            window,
            vec![
                Message::user("Is tea better than coffee?"),
                Message::assistant("turn 1"),
            ]
        );
    }

    #[test]
    fn test_context_window_is_bounded_to_latest_turns() {
        let transcript = debate_with(6);
        let window = transcript.context_window(DEFAULT_CONTEXT_WINDOW);
        assert_eq!(window.len(), 4);
        let texts: Vec<_> = window.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(texts, vec!["turn 3", "turn 4", "turn 5", "turn 6"]);
        assert!(window.iter().all(|m| m.role == Role::Assistant));
    }

    #[test]
    fn test_context_window_zero_limit() {
        assert!(debate_with(2).context_window(0).is_empty());
    }

    #[test]
    fn test_responder_turns_skip_topic() {
        let transcript = debate_with(3);
        let speakers: Vec<_> = transcript.responder_turns().map(|t| t.speaker()).collect();
        assert_eq!(
            speakers,
            vec![Speaker::ResponderA, Speaker::ResponderB, Speaker::ResponderA]
        );
        assert_eq!(transcript.rounds_completed(), 1);
    }

    #[test]
    fn test_serialize_shape() {
        let transcript = debate_with(1);
        let value = serde_json::to_value(&transcript).unwrap();
        assert_eq!(value["turns"][0]["speaker"], "user");
        assert_eq!(value["turns"][1]["speaker"], "responder_a");
        assert_eq!(value["turns"][1]["text"], "turn 1");
    }
}
