//! Judge verdict

use super::turn::Speaker;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// The judge's answer, kept verbatim (Value Object)
///
/// The judge is *asked* for `WINNER: LLM1/LLM2 REASON: ...` but nothing
/// enforces it. [`Verdict::parsed`] is a best-effort reading on top of the
/// raw text, never a replacement for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub judge: Model,
    pub raw: String,
}

/// Winner and justification read out of a verdict that followed the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVerdict {
    pub winner: Speaker,
    pub reason: String,
}

impl Verdict {
    pub fn new(judge: Model, raw: impl Into<String>) -> Self {
        Self {
            judge,
            raw: raw.into(),
        }
    }

    /// Try to read `WINNER: <id> REASON: <text>` out of the raw answer.
    ///
    /// Matching is case-insensitive and tolerant of markdown emphasis and
    /// spacing (`**LLM 2**`). Returns `None` when no recognisable winner
    /// is named; the raw text is then the only answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_domain::{Model, Speaker, Verdict};
    ///
    /// let verdict = Verdict::new(Model::Gemma2, "WINNER: LLM2 REASON: Better evidence.");
    /// let parsed = verdict.parsed().unwrap();
    /// assert_eq!(parsed.winner, Speaker::ResponderB);
    /// assert_eq!(parsed.reason, "Better evidence.");
    ///
    /// assert!(Verdict::new(Model::Gemma2, "Both were great!").parsed().is_none());
    /// ```
    pub fn parsed(&self) -> Option<ParsedVerdict> {
        // ASCII uppercasing keeps byte offsets aligned with `raw`
        let upper = self.raw.to_ascii_uppercase();

        let winner_start = upper.find("WINNER:")? + "WINNER:".len();
        let reason_pos = upper[winner_start..]
            .find("REASON:")
            .map(|p| winner_start + p);

        let winner_end = reason_pos.unwrap_or(upper.len());
        let winner = Self::winner_from_token(&upper[winner_start..winner_end])?;

        let reason = reason_pos
            .map(|p| {
                self.raw[p + "REASON:".len()..]
                    .trim_start_matches(|c: char| c == '*' || c.is_whitespace())
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default();

        Some(ParsedVerdict { winner, reason })
    }

    fn winner_from_token(token: &str) -> Option<Speaker> {
        let first_line = token.trim().lines().next().unwrap_or("");
        let normalized: String = first_line
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "LLM1" | "RESPONDERA" => Some(Speaker::ResponderA),
            "LLM2" | "RESPONDERB" => Some(Speaker::ResponderB),
            _ => None,
        }
    }
}
