//! Domain layer for debate-arena
//!
//! This crate contains the core debate concepts and the pure logic that
//! operates on them. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: the append-only record of one debate; turn 0 is the
//!   user's topic, then responder A and responder B strictly alternate.
//! - **Context window**: the last few turns replayed to a responder, with
//!   every responder turn relabelled as an assistant message.
//! - **Role assignment**: the moderator's refined proposition and the two
//!   opposing stances, extracted from prose-wrapped JSON.
//! - **Verdict**: the judge's raw answer, with an optional best-effort parse.

pub mod config;
pub mod core;
pub mod debate;
pub mod extraction;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    model::Model,
    string::{one_line_preview, truncate},
};
pub use debate::{
    roles::{MissingFieldError, RoleAssignment},
    stats::DebateStats,
    transcript::{DEFAULT_CONTEXT_WINDOW, Transcript, TranscriptError},
    turn::{Speaker, Turn},
    verdict::{ParsedVerdict, Verdict},
};
pub use extraction::{ExtractionError, JsonObject, extract_json};
pub use prompt::DebatePromptTemplate;
pub use session::entities::{Message, Role};
