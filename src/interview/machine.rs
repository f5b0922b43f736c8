//! Travel Interview - Suspend/Resume State Machine
//!
//! Runs the four stages in order:
//! `ask_destination` -> `ask_dates` -> `ask_activities` -> `find_trips`
//!
//! Information Hiding:
//! - Which field is pending is tracked internally; callers only see `Step`
//! - Shaping resumed values into field types happens on the way in
//! - The whole machine is serde-serializable, so a suspended interview can be
//!   inspected or moved between hosts

use crate::config::InterviewConfig;
use crate::interview::error::{InterviewError, InterviewResult};
use crate::interview::state::{Field, InterruptPayload, InterviewState, Stage};
use crate::synth::TripOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the interview hands back to its caller after each transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum Step {
    /// Waiting for the caller to resume with an answer to this prompt
    Suspended(InterruptPayload),
    Finished(TripOutcome),
}

impl Step {
    pub fn is_finished(&self) -> bool {
        matches!(self, Step::Finished(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelInterview {
    state: InterviewState,
    prompts: InterviewConfig,
    awaiting: Option<Field>,
    outcome: Option<TripOutcome>,
}

impl TravelInterview {
    pub fn new(prompts: InterviewConfig) -> Self {
        Self {
            state: InterviewState::new(),
            prompts,
            awaiting: None,
            outcome: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    /// Prompt the interview is currently suspended on, if any
    pub fn pending(&self) -> Option<InterruptPayload> {
        self.awaiting
            .map(|field| InterruptPayload::for_field(field, &self.prompts))
    }

    pub fn outcome(&self) -> Option<&TripOutcome> {
        self.outcome.as_ref()
    }

    /// Run until the first suspension. Calling it again re-emits the pending prompt.
    pub fn start(&mut self) -> InterviewResult<Step> {
        if let Some(prompt) = self.pending() {
            return Ok(Step::Suspended(prompt));
        }
        self.advance()
    }

    /// Write `value` into the pending field and run until the next suspension or the end
    pub fn resume(&mut self, value: Value) -> InterviewResult<Step> {
        let field = match self.awaiting {
            Some(field) => field,
            None if self.stage() == Stage::Done => return Err(InterviewError::AlreadyComplete),
            None => return Err(InterviewError::NotAwaitingInput(self.stage())),
        };

        self.state.record(field, value)?;
        self.awaiting = None;

        tracing::debug!("[TravelInterview] Resumed with '{}'", field);
        self.advance()
    }

    fn advance(&mut self) -> InterviewResult<Step> {
        let prompt = match self.stage() {
            Stage::AwaitingDestination => ask_destination(&self.state, &self.prompts)?,
            Stage::AwaitingDates => ask_dates(&self.state, &self.prompts)?,
            Stage::AwaitingActivities => ask_activities(&self.state, &self.prompts)?,
            Stage::Synthesizing => {
                let outcome = find_trips(&mut self.state, &self.prompts)?;
                self.outcome = Some(outcome.clone());
                tracing::info!(
                    "[TravelInterview] Interview complete for '{}'",
                    outcome.trips.destination
                );
                return Ok(Step::Finished(outcome));
            }
            Stage::Done => {
                return match &self.outcome {
                    Some(outcome) => Ok(Step::Finished(outcome.clone())),
                    None => Err(InterviewError::AlreadyComplete),
                };
            }
        };

        self.suspend(prompt)
    }

    fn suspend(&mut self, prompt: InterruptPayload) -> InterviewResult<Step> {
        tracing::debug!("[TravelInterview] Suspended awaiting '{}'", prompt.kind);
        self.awaiting = Some(prompt.kind);
        Ok(Step::Suspended(prompt))
    }
}

pub fn ask_destination(
    state: &InterviewState,
    prompts: &InterviewConfig,
) -> InterviewResult<InterruptPayload> {
    state.require_before(Stage::AwaitingDestination)?;
    Ok(InterruptPayload::for_field(Field::Destination, prompts))
}

pub fn ask_dates(
    state: &InterviewState,
    prompts: &InterviewConfig,
) -> InterviewResult<InterruptPayload> {
    state.require_before(Stage::AwaitingDates)?;
    Ok(InterruptPayload::for_field(Field::Dates, prompts))
}

pub fn ask_activities(
    state: &InterviewState,
    prompts: &InterviewConfig,
) -> InterviewResult<InterruptPayload> {
    state.require_before(Stage::AwaitingActivities)?;
    Ok(InterruptPayload::for_field(Field::Activities, prompts))
}

/// Terminal stage: synthesize the trip and set `trips` (once) on the state
pub fn find_trips(
    state: &mut InterviewState,
    prompts: &InterviewConfig,
) -> InterviewResult<TripOutcome> {
    let complete = state.to_complete()?;
    let outcome = complete.synthesize(&prompts.companion_message);
    state.set_trips(outcome.trips.clone());
    Ok(outcome)
}
