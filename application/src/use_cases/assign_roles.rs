//! Assign Roles use case
//!
//! Asks the moderator model to sharpen the user's topic into a debatable
//! proposition and to write one stance per responder.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use arena_domain::{
    DebatePromptTemplate, ExtractionError, MissingFieldError, Model, RoleAssignment,
    extract_json, truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while assigning roles
#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Moderator returned no content")]
    EmptyResponse,

    #[error("Could not read role assignment: {0}")]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for turning a raw topic into a [`RoleAssignment`]
///
/// Exactly one backend request per call, no retry: a failure surfaces
/// immediately and the caller decides whether to try again.
pub struct AssignRolesUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> AssignRolesUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(
        &self,
        topic: &str,
        moderator: &Model,
    ) -> Result<RoleAssignment, AssignmentError> {
        self.execute_with_progress(topic, moderator, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        topic: &str,
        moderator: &Model,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<RoleAssignment, AssignmentError> {
        info!("Assigning debate roles with {}", moderator);
        progress.on_assignment_start();

        let request = CompletionRequest::new(
            moderator.clone(),
            DebatePromptTemplate::role_assignment_system(),
            DebatePromptTemplate::role_assignment_prompt(topic),
        );

        let raw = self.gateway.complete(&request).await?;
        debug!("Raw moderator response:\n{}", raw);

        if raw.trim().is_empty() {
            return Err(AssignmentError::EmptyResponse);
        }

        let object = extract_json(&raw).inspect_err(|e| {
            if let ExtractionError::MalformedJson { candidate, .. } = e {
                warn!(
                    "Moderator JSON did not parse; extracted: {}",
                    truncate(candidate, 500)
                );
            }
        })?;

        let assignment = RoleAssignment::from_object(&object, topic)?;

        self.logger.log(ConversationEvent::new(
            "roles_assigned",
            serde_json::json!({
                "model": moderator.to_string(),
                "topic": topic,
                "refined_goal": assignment.refined_goal,
                "role_a": assignment.role_a,
                "role_b": assignment.role_b,
            }),
        ));
        progress.on_roles_assigned(&assignment);

        Ok(assignment)
    }
}
