//! Debate domain.
//!
//! - [`turn::Speaker`] / [`turn::Turn`]: who said what
//! - [`transcript::Transcript`]: append-only, alternation-checked turn log
//! - [`roles::RoleAssignment`]: refined proposition and per-responder stances
//! - [`verdict::Verdict`]: the judge's raw answer, optionally parsed
//! - [`stats::DebateStats`]: turn counts for display

pub mod roles;
pub mod stats;
pub mod transcript;
pub mod turn;
pub mod verdict;
