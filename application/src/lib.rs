//! Application layer for debate-arena
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ArenaModels, DebateParams, ResponderConfig};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{DebateProgressNotifier, NoProgress},
};
pub use use_cases::assign_roles::{AssignRolesUseCase, AssignmentError};
pub use use_cases::judge_debate::{JudgeDebateUseCase, JudgeError};
pub use use_cases::run_debate::{RunDebateError, RunDebateInput, RunDebateUseCase};
