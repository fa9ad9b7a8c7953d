//! Summary counts for a debate transcript

use super::transcript::Transcript;
use super::turn::Speaker;
use serde::Serialize;

/// Per-responder counts shown after a debate (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DebateStats {
    pub responder_a_turns: usize,
    pub responder_b_turns: usize,
    pub total_exchanges: usize,
    pub rounds: usize,
}

impl DebateStats {
    pub fn from_transcript(transcript: &Transcript) -> Self {
        let count = |speaker: Speaker| {
            transcript
                .iter()
                .filter(|turn| turn.speaker() == speaker)
                .count()
        };
        let responder_a_turns = count(Speaker::ResponderA);
        let responder_b_turns = count(Speaker::ResponderB);

        Self {
            responder_a_turns,
            responder_b_turns,
            total_exchanges: responder_a_turns + responder_b_turns,
            rounds: transcript.rounds_completed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_partial_debate() {
        let mut transcript = Transcript::new("topic").unwrap();
        transcript.append(Speaker::ResponderA, "a1").unwrap();
        transcript.append(Speaker::ResponderB, "b1").unwrap();
        transcript.append(Speaker::ResponderA, "a2").unwrap();

        let stats = DebateStats::from_transcript(&transcript);
        assert_eq!(stats.responder_a_turns, 2);
        assert_eq!(stats.responder_b_turns, 1);
        assert_eq!(stats.total_exchanges, 3);
        assert_eq!(stats.rounds, 1);
    }

    #[test]
    fn test_stats_for_fresh_transcript() {
        let transcript = Transcript::new("topic").unwrap();
        assert_eq!(DebateStats::from_transcript(&transcript), DebateStats::default());
    }
}
