use crate::interview::{InterruptPayload, InterviewResult, InterviewState, Stage, Step};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::oneshot;

/// Messages accepted by an interview actor
#[derive(Debug)]
pub enum InterviewMessage {
    Start {
        response: oneshot::Sender<InterviewResult<Step>>,
    },
    Resume {
        value: Value,
        response: oneshot::Sender<InterviewResult<Step>>,
    },
    GetSnapshot(oneshot::Sender<InterviewSnapshot>),
    Stop,
}

/// Point-in-time view of one interview, as held by its actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSnapshot {
    pub interview_id: String,
    pub stage: Stage,
    pub pending: Option<InterruptPayload>,
    pub state: InterviewState,
}

/// Where the supervisor sends a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Travel,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub intent: Intent,
    pub reasoning: String,
}
