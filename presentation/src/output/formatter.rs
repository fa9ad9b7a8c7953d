//! The report every output format renders

use arena_application::ArenaModels;
use arena_domain::{DebateStats, ParsedVerdict, RoleAssignment, Transcript, Verdict};
use serde::Serialize;

/// Everything a finished (or judged-less) debate produced
#[derive(Debug, Serialize)]
pub struct DebateReport<'a> {
    pub topic: &'a str,
    pub roles: &'a RoleAssignment,
    pub models: &'a ArenaModels,
    pub transcript: &'a Transcript,
    pub stats: DebateStats,
    pub verdict: Option<&'a Verdict>,
    /// Best-effort reading of `verdict`; `None` means show the raw text
    pub parsed_verdict: Option<ParsedVerdict>,
}

impl<'a> DebateReport<'a> {
    pub fn new(
        roles: &'a RoleAssignment,
        models: &'a ArenaModels,
        transcript: &'a Transcript,
        verdict: Option<&'a Verdict>,
    ) -> Self {
        Self {
            topic: transcript.topic(),
            roles,
            models,
            transcript,
            stats: DebateStats::from_transcript(transcript),
            verdict,
            parsed_verdict: verdict.and_then(Verdict::parsed),
        }
    }
}
