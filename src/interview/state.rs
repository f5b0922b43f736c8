use crate::config::InterviewConfig;
use crate::interview::error::{InterviewError, InterviewResult};
use crate::interview::typestate::Complete;
use crate::synth::{DateInput, TripRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Field collected at one suspension point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Destination,
    Dates,
    Activities,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Destination => "destination",
            Field::Dates => "dates",
            Field::Activities => "activities",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    AwaitingDestination,
    AwaitingDates,
    AwaitingActivities,
    Synthesizing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitingDestination => "AwaitingDestination",
            Stage::AwaitingDates => "AwaitingDates",
            Stage::AwaitingActivities => "AwaitingActivities",
            Stage::Synthesizing => "Synthesizing",
            Stage::Done => "Done",
        };
        f.write_str(name)
    }
}

/// Prompt emitted when the interview suspends: `{type, data}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptPayload {
    #[serde(rename = "type")]
    pub kind: Field,
    pub data: String,
}

impl InterruptPayload {
    pub fn for_field(field: Field, prompts: &InterviewConfig) -> Self {
        let data = match field {
            Field::Destination => &prompts.destination_prompt,
            Field::Dates => &prompts.dates_prompt,
            Field::Activities => &prompts.activities_prompt,
        };
        Self {
            kind: field,
            data: data.clone(),
        }
    }
}

/// Record threaded through the stages; each field is written once, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewState {
    destination: Option<String>,
    dates: Option<DateInput>,
    activities: Option<Vec<String>>,
    trips: Option<TripRecord>,
}

impl InterviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match (
            &self.destination,
            &self.dates,
            &self.activities,
            &self.trips,
        ) {
            (_, _, _, Some(_)) => Stage::Done,
            (None, _, _, _) => Stage::AwaitingDestination,
            (Some(_), None, _, _) => Stage::AwaitingDates,
            (Some(_), Some(_), None, _) => Stage::AwaitingActivities,
            (Some(_), Some(_), Some(_), None) => Stage::Synthesizing,
        }
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn dates(&self) -> Option<&DateInput> {
        self.dates.as_ref()
    }

    pub fn activities(&self) -> Option<&[String]> {
        self.activities.as_deref()
    }

    pub fn trips(&self) -> Option<&TripRecord> {
        self.trips.as_ref()
    }

    /// Check that every field `stage` depends on has been written
    pub fn require_before(&self, stage: Stage) -> InterviewResult<()> {
        let needed: &[Field] = match stage {
            Stage::AwaitingDestination => &[],
            Stage::AwaitingDates => &[Field::Destination],
            Stage::AwaitingActivities => &[Field::Destination, Field::Dates],
            Stage::Synthesizing | Stage::Done => {
                &[Field::Destination, Field::Dates, Field::Activities]
            }
        };

        match needed.iter().find(|field| !self.has(**field)) {
            Some(missing) => Err(InterviewError::OutOfOrderAccess {
                stage,
                missing: *missing,
            }),
            None => Ok(()),
        }
    }

    fn has(&self, field: Field) -> bool {
        match field {
            Field::Destination => self.destination.is_some(),
            Field::Dates => self.dates.is_some(),
            Field::Activities => self.activities.is_some(),
        }
    }

    /// Write a resumed value into `field`; the value is shaped but not validated
    pub(crate) fn record(&mut self, field: Field, value: Value) -> InterviewResult<()> {
        if self.trips.is_some() {
            return Err(InterviewError::AlreadyComplete);
        }

        let stage = match field {
            Field::Destination => Stage::AwaitingDestination,
            Field::Dates => Stage::AwaitingDates,
            Field::Activities => Stage::AwaitingActivities,
        };
        self.require_before(stage)?;
        if self.stage() != stage {
            return Err(InterviewError::NotAwaitingInput(self.stage()));
        }

        match field {
            Field::Destination => self.destination = Some(text_from_value(value)),
            Field::Dates => self.dates = Some(DateInput::from_value(value)),
            Field::Activities => self.activities = Some(activities_from_value(value)),
        }
        Ok(())
    }

    /// Typestate view of a fully answered interview
    pub fn to_complete(&self) -> InterviewResult<Complete> {
        self.require_before(Stage::Synthesizing)?;

        match (&self.destination, &self.dates, &self.activities) {
            (Some(destination), Some(dates), Some(activities)) => Ok(Complete::new(
                destination.clone(),
                dates.clone(),
                activities.clone(),
            )),
            _ => Err(InterviewError::OutOfOrderAccess {
                stage: Stage::Synthesizing,
                missing: Field::Activities,
            }),
        }
    }

    /// Set the output record; later calls keep the first record
    pub(crate) fn set_trips(&mut self, trips: TripRecord) -> &TripRecord {
        self.trips.get_or_insert(trips)
    }
}

impl From<Complete> for InterviewState {
    fn from(complete: Complete) -> Self {
        let (destination, dates, activities) = complete.into_parts();
        Self {
            destination: Some(destination),
            dates: Some(dates),
            activities: Some(activities),
            trips: None,
        }
    }
}

/// Free text from any resumed value; non-strings become their JSON text
pub fn text_from_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Activities from an array, a comma-separated string, or any other single value
pub fn activities_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().map(text_from_value).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_state_awaits_destination() {
        let state = InterviewState::new();
        assert_eq!(state.stage(), Stage::AwaitingDestination);
        assert!(state.trips().is_none());
    }

    #[test]
    fn test_record_in_order_advances_stage() {
        let mut state = InterviewState::new();
        state.record(Field::Destination, json!("Lisbon")).unwrap();
        assert_eq!(state.stage(), Stage::AwaitingDates);

        state.record(Field::Dates, json!("next weekend")).unwrap();
        assert_eq!(state.stage(), Stage::AwaitingActivities);

        state.record(Field::Activities, json!(["hiking"])).unwrap();
        assert_eq!(state.stage(), Stage::Synthesizing);
        assert!(state.trips().is_none());
    }

    #[test]
    fn test_record_out_of_order_is_rejected() {
        let mut state = InterviewState::new();
        let err = state.record(Field::Activities, json!(["hiking"])).unwrap_err();
        assert_eq!(
            err,
            InterviewError::OutOfOrderAccess {
                stage: Stage::AwaitingActivities,
                missing: Field::Destination,
            }
        );
    }

    #[test]
    fn test_fields_are_written_once() {
        let mut state = InterviewState::new();
        state.record(Field::Destination, json!("Lisbon")).unwrap();

        let err = state.record(Field::Destination, json!("Porto")).unwrap_err();
        assert_eq!(err, InterviewError::NotAwaitingInput(Stage::AwaitingDates));
        assert_eq!(state.destination(), Some("Lisbon"));
    }

    #[test]
    fn test_to_complete_reports_first_missing_field() {
        let mut state = InterviewState::new();
        state.record(Field::Destination, json!("Lisbon")).unwrap();

        let err = state.to_complete().unwrap_err();
        assert_eq!(
            err,
            InterviewError::OutOfOrderAccess {
                stage: Stage::Synthesizing,
                missing: Field::Dates,
            }
        );
    }

    #[test]
    fn test_activities_from_value_shapes() {
        assert_eq!(
            activities_from_value(json!(["hiking", "food tours"])),
            vec!["hiking", "food tours"]
        );
        assert_eq!(
            activities_from_value(json!("hiking, food tours, ")),
            vec!["hiking", "food tours"]
        );
        assert_eq!(activities_from_value(json!(3)), vec!["3"]);
        assert_eq!(activities_from_value(json!([1, "surf"])), vec!["1", "surf"]);
    }

    #[test]
    fn test_text_from_value_keeps_strings_verbatim() {
        assert_eq!(text_from_value(json!("  Lisbon ")), "  Lisbon ");
        assert_eq!(text_from_value(json!({"city": "Lisbon"})), r#"{"city":"Lisbon"}"#);
    }

    #[test]
    fn test_interrupt_payload_wire_shape() {
        let payload = InterruptPayload::for_field(Field::Dates, &InterviewConfig::default());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"type": "dates", "data": "When do you want to go?"})
        );
    }
}
