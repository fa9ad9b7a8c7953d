//! Run Debate use case
//!
//! The turn engine: alternates the two responders for a fixed number of
//! rounds, growing a [`Transcript`] one turn at a time.

use crate::config::{DebateParams, ResponderConfig};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use arena_domain::{DebatePromptTemplate, Speaker, Transcript, TranscriptError, Turn};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a debate run
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Number of rounds must be at least 1")]
    InvalidRounds,

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// A responder call failed; `partial` holds every turn appended before it.
    #[error("{speaker} failed in round {round}: {source}")]
    TurnFailed {
        round: usize,
        speaker: Speaker,
        partial: Transcript,
        #[source]
        source: GatewayError,
    },
}

impl RunDebateError {
    /// The transcript as far as it got, if the failure happened mid-debate.
    pub fn partial_transcript(&self) -> Option<&Transcript> {
        match self {
            RunDebateError::TurnFailed { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    pub topic: String,
    pub responder_a: ResponderConfig,
    pub responder_b: ResponderConfig,
    pub params: DebateParams,
}

impl RunDebateInput {
    pub fn new(
        topic: impl Into<String>,
        responder_a: ResponderConfig,
        responder_b: ResponderConfig,
    ) -> Self {
        Self {
            topic: topic.into(),
            responder_a,
            responder_b,
            params: DebateParams::default(),
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for running the alternating debate loop
///
/// Calls are strictly sequential: B's request is built only after A's
/// turn has been appended, so B always answers A's latest words.
pub struct RunDebateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunDebateUseCase<G> {
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

    /// Run the debate without progress reporting
    pub async fn execute(&self, input: RunDebateInput) -> Result<Transcript, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Run the debate with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDebateInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Transcript, RunDebateError> {
        let rounds = input.params.rounds;
        if rounds == 0 {
            return Err(RunDebateError::InvalidRounds);
        }

        info!(
            "Starting debate: {} rounds, {} vs {}",
            rounds, input.responder_a.model, input.responder_b.model
        );

        let mut transcript = Transcript::new(input.topic)?;

        for round in 1..=rounds {
            progress.on_round_start(round, rounds);
            self.run_round_with_progress(
                &mut transcript,
                &input.responder_a,
                &input.responder_b,
                input.params.context_window,
                progress,
            )
            .await?;
        }

        info!(
            "Debate finished after {} rounds ({} turns)",
            transcript.rounds_completed(),
            transcript.turn_count()
        );
        progress.on_debate_complete(&transcript);

        Ok(transcript)
    }

    /// One round on an existing transcript: A answers the latest turn,
    /// then B answers A. Returns the two appended turns.
    ///
    /// The transcript must end on the topic or on a B turn.
    pub async fn run_round(
        &self,
        transcript: &mut Transcript,
        responder_a: &ResponderConfig,
        responder_b: &ResponderConfig,
        context_window: usize,
    ) -> Result<(Turn, Turn), RunDebateError> {
        self.run_round_with_progress(
            transcript,
            responder_a,
            responder_b,
            context_window,
            &NoProgress,
        )
        .await
    }

    pub async fn run_round_with_progress(
        &self,
        transcript: &mut Transcript,
        responder_a: &ResponderConfig,
        responder_b: &ResponderConfig,
        context_window: usize,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<(Turn, Turn), RunDebateError> {
        let expected = transcript.next_speaker();
        if expected != Speaker::ResponderA {
            return Err(TranscriptError::OutOfOrder {
                expected,
                actual: Speaker::ResponderA,
            }
            .into());
        }
        let round = transcript.rounds_completed() + 1;

        let turn_a = self
            .take_turn(
                transcript,
                round,
                Speaker::ResponderA,
                responder_a,
                context_window,
                progress,
            )
            .await?;
        let turn_b = self
            .take_turn(
                transcript,
                round,
                Speaker::ResponderB,
                responder_b,
                context_window,
                progress,
            )
            .await?;
        Ok((turn_a, turn_b))
    }

    async fn take_turn(
        &self,
        transcript: &mut Transcript,
        round: usize,
        speaker: Speaker,
        responder: &ResponderConfig,
        context_window: usize,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Turn, RunDebateError> {
        progress.on_turn_start(round, speaker);
        let text = self
            .speak(transcript, speaker, responder, context_window)
            .await
            .map_err(|source| {
                warn!("{} failed in round {}: {}", speaker, round, source);
                RunDebateError::TurnFailed {
                    round,
                    speaker,
                    partial: transcript.clone(),
                    source,
                }
            })?;

        let turn = transcript.append(speaker, text)?.clone();
        self.log_turn(round, &turn);
        progress.on_turn_complete(round, &turn);
        Ok(turn)
    }

    /// Ask one responder to answer the latest turn.
    ///
    /// The context is captured before anything is appended, so it never
    /// contains the response being produced.
    async fn speak(
        &self,
        transcript: &Transcript,
        speaker: Speaker,
        responder: &ResponderConfig,
        context_window: usize,
    ) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(
            responder.model.clone(),
            DebatePromptTemplate::responder_system(speaker, &responder.role),
            transcript.last().text(),
        )
        .with_context(transcript.context_window(context_window));

        debug!(
            "{} ({}) answering with {} context messages",
            speaker,
            responder.model,
            request.context.len()
        );

        let text = self.gateway.complete(&request).await?;
        if text.trim().is_empty() {
            warn!("{} returned an empty response", speaker);
        }
        Ok(text)
    }

    fn log_turn(&self, round: usize, turn: &Turn) {
        self.logger.log(ConversationEvent::new(
            "turn",
            serde_json::json!({
                "round": round,
                "speaker": turn.speaker().identity(),
                "text": turn.text(),
            }),
        ));
    }
}
