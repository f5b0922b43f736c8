//! Interview Actor
//!
//! Hosts one `TravelInterview` on its own task. The handle is the only way in:
//! every call is a message on the actor's channel with a oneshot reply, so each
//! interview's state is owned by exactly one task.

use crate::actors::messages::{InterviewMessage, InterviewSnapshot};
use crate::config::Settings;
use crate::interview::{InterviewError, InterviewResult, Step, TravelInterview};
use serde_json::Value;
use tokio::sync::mpsc::{channel, Receiver, Sender};
use tokio::sync::oneshot;

#[derive(Clone)]
pub struct InterviewActorHandle {
    interview_id: String,
    sender: Sender<InterviewMessage>,
}

impl InterviewActorHandle {
    pub fn new(interview_id: impl Into<String>, settings: &Settings) -> Self {
        let interview_id = interview_id.into();
        let interview = TravelInterview::new(settings.interview.clone());
        Self::spawn(interview_id, interview, settings.system.channel_buffer_size)
    }

    /// Host an interview that was already partly answered, e.g. one restored from a snapshot
    pub fn from_interview(
        interview_id: impl Into<String>,
        interview: TravelInterview,
        settings: &Settings,
    ) -> Self {
        Self::spawn(interview_id.into(), interview, settings.system.channel_buffer_size)
    }

    fn spawn(interview_id: String, interview: TravelInterview, buffer_size: usize) -> Self {
        let (sender, receiver) = channel(buffer_size.max(1));
        tokio::spawn(interview_actor(receiver, interview_id.clone(), interview));
        Self {
            interview_id,
            sender,
        }
    }

    pub fn interview_id(&self) -> &str {
        &self.interview_id
    }

    pub async fn start(&self) -> InterviewResult<Step> {
        let (response, rx) = oneshot::channel();
        self.send_message(InterviewMessage::Start { response }).await?;
        rx.await.map_err(|e| self.unavailable(e))?
    }

    pub async fn resume(&self, value: Value) -> InterviewResult<Step> {
        let (response, rx) = oneshot::channel();
        self.send_message(InterviewMessage::Resume { value, response })
            .await?;
        rx.await.map_err(|e| self.unavailable(e))?
    }

    pub async fn snapshot(&self) -> InterviewResult<InterviewSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.send_message(InterviewMessage::GetSnapshot(tx)).await?;
        rx.await.map_err(|e| self.unavailable(e))
    }

    pub async fn stop(&self) -> InterviewResult<()> {
        self.send_message(InterviewMessage::Stop).await
    }

    async fn send_message(&self, message: InterviewMessage) -> InterviewResult<()> {
        self.sender
            .send(message)
            .await
            .map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> InterviewError {
        InterviewError::ActorUnavailable(format!("{}: {}", self.interview_id, e))
    }
}

async fn interview_actor(
    mut receiver: Receiver<InterviewMessage>,
    interview_id: String,
    mut interview: TravelInterview,
) {
    tracing::info!("[InterviewActor {}] Started", interview_id);

    while let Some(message) = receiver.recv().await {
        match message {
            InterviewMessage::Start { response } => {
                let _ = response.send(interview.start());
            }
            InterviewMessage::Resume { value, response } => {
                let result = interview.resume(value);
                if let Err(e) = &result {
                    tracing::warn!("[InterviewActor {}] Resume rejected: {}", interview_id, e);
                }
                let _ = response.send(result);
            }
            InterviewMessage::GetSnapshot(response) => {
                let _ = response.send(InterviewSnapshot {
                    interview_id: interview_id.clone(),
                    stage: interview.stage(),
                    pending: interview.pending(),
                    state: interview.state().clone(),
                });
            }
            InterviewMessage::Stop => {
                tracing::info!("[InterviewActor {}] Received stop signal", interview_id);
                break;
            }
        }
    }

    tracing::debug!("[InterviewActor {}] Shut down", interview_id);
}
