//! Prompt domain
//!
//! Fixed instructions for the moderator, the two responders and the judge.

mod template;

pub use template::DebatePromptTemplate;
