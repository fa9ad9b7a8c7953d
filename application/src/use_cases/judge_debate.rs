//! Judge Debate use case
//!
//! Hands the finished transcript to a third model and returns its answer.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use arena_domain::{DebatePromptTemplate, Model, Transcript, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while judging
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Nothing to judge: the transcript has no responder turns")]
    EmptyTranscript,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for producing a [`Verdict`] on a completed debate
pub struct JudgeDebateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> JudgeDebateUseCase<G> {
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

    /// Ask the judge model once; its text is returned unmodified.
    pub async fn execute(
        &self,
        transcript: &Transcript,
        judge: &Model,
    ) -> Result<Verdict, JudgeError> {
        self.execute_with_progress(transcript, judge, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        transcript: &Transcript,
        judge: &Model,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Verdict, JudgeError> {
        if !transcript.has_responder_turns() {
            return Err(JudgeError::EmptyTranscript);
        }
        progress.on_judge_start();

        info!(
            "Judging {} responder turns with {}",
            transcript.turn_count() - 1,
            judge
        );

        let request = CompletionRequest::new(
            judge.clone(),
            DebatePromptTemplate::judge_system(),
            DebatePromptTemplate::judge_prompt(transcript),
        );

        let raw = self.gateway.complete(&request).await?;
        debug!("Raw verdict:\n{}", raw);

        let verdict = Verdict::new(judge.clone(), raw);
        let parsed = verdict.parsed();

        self.logger.log(ConversationEvent::new(
            "verdict",
            serde_json::json!({
                "model": judge.to_string(),
                "raw": verdict.raw,
                "winner": parsed.as_ref().map(|p| p.winner.identity()),
                "reason": parsed.as_ref().map(|p| p.reason.as_str()),
            }),
        ));
        progress.on_judge_complete(&verdict);

        Ok(verdict)
    }
}
