//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate runs.

use arena_domain::{RoleAssignment, Speaker, Transcript, Turn, Verdict};

/// Callback for progress updates during a debate session
///
/// Implementations live in the presentation layer. The turn engine calls
/// [`on_turn_complete`](Self::on_turn_complete) after every single append,
/// so a shell can render each turn as soon as it exists.
pub trait DebateProgressNotifier: Send + Sync {
    /// Called right before the moderator is asked for roles
    fn on_assignment_start(&self) {}

    /// Called once the moderator's role assignment has been accepted
    fn on_roles_assigned(&self, _roles: &RoleAssignment) {}

    /// Called before responder A speaks in a round (1-based)
    fn on_round_start(&self, _round: usize, _total_rounds: usize) {}

    /// Called right before a responder's backend call is issued
    fn on_turn_start(&self, _round: usize, _speaker: Speaker) {}

    /// Called right after a responder's turn was appended
    fn on_turn_complete(&self, _round: usize, _turn: &Turn) {}

    /// Called when every round has been run
    fn on_debate_complete(&self, _transcript: &Transcript) {}

    /// Called before the judge is asked
    fn on_judge_start(&self) {}

    /// Called with the judge's answer
    fn on_judge_complete(&self, _verdict: &Verdict) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {}
