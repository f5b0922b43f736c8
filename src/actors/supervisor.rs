//! Supervisor - Routes user input to the travel interview
//!
//! - Classifies each new request as travel-related or not
//! - Travel requests start an interview actor ("delegation")
//! - While an interview is running, every user input is its next answer
//! - Anything else gets the configured direct reply
//!
//! Information Hiding:
//! - Hides the classification strategy behind `IntentClassifier`
//! - Hides interview actor lifecycle from callers

use crate::actors::interview_actor::InterviewActorHandle;
use crate::actors::messages::{Intent, InterviewSnapshot, RoutingDecision};
use crate::config::Settings;
use crate::interview::state::text_from_value;
use crate::interview::{InterruptPayload, InterviewError, Step};
use crate::synth::TripOutcome;
use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;

/// Decides whether a message belongs to the travel interview
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, message: &str) -> Result<RoutingDecision>;
}

/// Case-insensitive whole-word match against a keyword list
pub struct KeywordClassifier {
    pattern: Option<Regex>,
}

impl KeywordClassifier {
    pub fn new(keywords: &[String]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, message: &str) -> Result<RoutingDecision> {
        let matched = self
            .pattern
            .as_ref()
            .and_then(|pattern| pattern.find(message));

        Ok(match matched {
            Some(m) => RoutingDecision {
                intent: Intent::Travel,
                reasoning: format!("matched travel keyword '{}'", m.as_str()),
            },
            None => RoutingDecision {
                intent: Intent::Other,
                reasoning: "no travel keywords found".to_string(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorReply {
    /// Answered without delegating
    Direct(String),
    /// The travel interview is waiting on this question
    Prompt(InterruptPayload),
    /// The interview finished; its outcome is shared with the user
    TripReady(TripOutcome),
}

pub struct Supervisor {
    settings: Settings,
    classifier: Arc<dyn IntentClassifier>,
    active: Option<InterviewActorHandle>,
    interviews_started: usize,
}

impl Supervisor {
    /// Supervisor with the keyword classifier built from `settings.supervisor`
    pub fn new(settings: Settings) -> Result<Self> {
        let classifier = KeywordClassifier::new(&settings.supervisor.travel_keywords)
            .context("Invalid travel keyword list")?;
        Ok(Self::with_classifier(settings, Arc::new(classifier)))
    }

    pub fn with_classifier(settings: Settings, classifier: Arc<dyn IntentClassifier>) -> Self {
        Self {
            settings,
            classifier,
            active: None,
            interviews_started: 0,
        }
    }

    pub fn in_interview(&self) -> bool {
        self.active.is_some()
    }

    pub async fn route(&self, message: &str) -> Result<RoutingDecision> {
        self.classifier.classify(message).await
    }

    pub async fn active_snapshot(&self) -> Result<Option<InterviewSnapshot>> {
        match &self.active {
            Some(handle) => Ok(Some(handle.snapshot().await?)),
            None => Ok(None),
        }
    }

    /// Handle one user turn
    pub async fn handle_user_input(&mut self, input: Value) -> Result<SupervisorReply> {
        if let Some(handle) = self.active.clone() {
            match handle.resume(input.clone()).await {
                Ok(step) => return self.reply_for(&handle, step).await,
                Err(InterviewError::ActorUnavailable(reason)) => {
                    // the interview is gone; treat this turn as a new request
                    tracing::warn!(
                        "[Supervisor] Dropping interview {}: {}",
                        handle.interview_id(),
                        reason
                    );
                    self.active = None;
                }
                Err(e) => {
                    self.active = None;
                    return Err(e.into());
                }
            }
        }

        let message = text_from_value(input);
        let decision = self.route(&message).await?;

        tracing::info!(
            "[Supervisor] Routing as {:?} - Reason: {}",
            decision.intent,
            decision.reasoning
        );

        match decision.intent {
            Intent::Travel => {
                self.interviews_started += 1;
                let interview_id = format!("travel-{}", self.interviews_started);
                let handle = InterviewActorHandle::new(interview_id, &self.settings);

                let step = handle.start().await?;
                self.active = Some(handle.clone());
                self.reply_for(&handle, step).await
            }
            Intent::Other => Ok(SupervisorReply::Direct(
                self.settings.supervisor.direct_reply.clone(),
            )),
        }
    }

    async fn reply_for(
        &mut self,
        handle: &InterviewActorHandle,
        step: Step,
    ) -> Result<SupervisorReply> {
        match step {
            Step::Suspended(prompt) => Ok(SupervisorReply::Prompt(prompt)),
            Step::Finished(outcome) => {
                tracing::info!(
                    "[Supervisor] Interview {} finished, sharing trip to '{}'",
                    handle.interview_id(),
                    outcome.trips.destination
                );
                self.active = None;
                if let Err(e) = handle.stop().await {
                    tracing::warn!(
                        "[Supervisor] Failed to stop interview {}: {}",
                        handle.interview_id(),
                        e
                    );
                }
                Ok(SupervisorReply::TripReady(outcome))
            }
        }
    }
}
