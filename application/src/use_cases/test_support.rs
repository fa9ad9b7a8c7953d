//! Scripted collaborators shared by the use-case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::DebateProgressNotifier;
use arena_domain::{Speaker, Turn};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed script of responses and records every request it sees.
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::new(vec![Err(GatewayError::RequestFailed(message.to_string()))])
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingLogger {
    pub(crate) fn events(&self) -> Vec<(&'static str, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

/// Records progress callbacks as short strings, e.g. `"start 1 LLM 1"`.
#[derive(Default)]
pub(crate) struct RecordingProgress {
    calls: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DebateProgressNotifier for RecordingProgress {
    fn on_assignment_start(&self) {
        self.push("assigning".to_string());
    }

    fn on_roles_assigned(&self, _roles: &arena_domain::RoleAssignment) {
        self.push("assigned".to_string());
    }

    fn on_judge_start(&self) {
        self.push("judging".to_string());
    }

    fn on_judge_complete(&self, verdict: &arena_domain::Verdict) {
        self.push(format!("verdict {}", verdict.raw));
    }

    fn on_round_start(&self, round: usize, total_rounds: usize) {
        self.push(format!("round {round}/{total_rounds}"));
    }

    fn on_turn_start(&self, round: usize, speaker: Speaker) {
        self.push(format!("start {round} {speaker}"));
    }

    fn on_turn_complete(&self, round: usize, turn: &Turn) {
        self.push(format!("done {round} {}", turn.speaker()));
    }

    fn on_debate_complete(&self, transcript: &arena_domain::Transcript) {
        self.push(format!("complete {}", transcript.turn_count()));
    }
}
