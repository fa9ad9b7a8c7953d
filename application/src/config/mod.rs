//! Application-level configuration.
//!
//! - [`ResponderConfig`]: model and stance for one debater
//! - [`DebateParams`]: round count and context-window size
//! - [`ArenaModels`]: which model plays which part

pub mod debate_params;

pub use debate_params::{ArenaModels, DebateParams, ResponderConfig};
