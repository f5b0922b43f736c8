use crate::synth::dates::{normalize_dates, DateInput, NormalizedDateRange};
use serde::{Deserialize, Serialize};

/// Final structured output handed to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub destination: String,
    pub dates: NormalizedDateRange,
    pub activities: Vec<String>,
}

/// Terminal payload: `{trips, message: [summary, companion]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripOutcome {
    pub trips: TripRecord,
    pub message: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
}

/// Chat-style envelope for hosts that append the outcome to a message list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

impl TripOutcome {
    pub fn summary(&self) -> &str {
        self.message.first().map(String::as_str).unwrap_or_default()
    }

    pub fn to_assistant_message(&self) -> AssistantMessage {
        AssistantMessage {
            role: "assistant".to_string(),
            content: self
                .message
                .iter()
                .map(|text| ContentPart::Text { text: text.clone() })
                .collect(),
        }
    }
}

/// Build the trip record and the two-part reply from completed interview fields
pub fn synthesize(
    destination: &str,
    dates: &DateInput,
    activities: &[String],
    companion_message: &str,
) -> TripOutcome {
    let resolution = normalize_dates(dates);
    if let Some(ambiguity) = &resolution.ambiguity {
        tracing::warn!("[TripSynth] {}", ambiguity);
    }

    let trips = TripRecord {
        destination: destination.to_string(),
        dates: resolution.range,
        activities: activities.to_vec(),
    };

    tracing::debug!(
        "[TripSynth] Built trip to '{}' with {} activities",
        trips.destination,
        trips.activities.len()
    );

    TripOutcome {
        message: vec![trip_summary(&trips), companion_message.to_string()],
        trips,
    }
}

pub fn trip_summary(trips: &TripRecord) -> String {
    format!(
        "Here are some trips to {} around {} to {} with activities like {}. ",
        trips.destination,
        trips.dates.start_date,
        trips.dates.end_date,
        trips.activities.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COMPANION: &str = "Save this card!";

    fn lisbon() -> TripOutcome {
        let dates = DateInput::from_value(json!({
            "dates": {"startDate": "2024-01-01", "endDate": "2024-01-10"}
        }));
        let activities = vec!["hiking".to_string(), "food tours".to_string()];
        synthesize("Lisbon", &dates, &activities, COMPANION)
    }

    #[test]
    fn test_summary_mentions_fields_in_order() {
        let outcome = lisbon();
        let summary = outcome.summary();

        let positions: Vec<usize> = ["Lisbon", "2024-01-01", "2024-01-10", "hiking, food tours"]
            .iter()
            .map(|needle| summary.find(needle).expect("missing summary part"))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_message_has_summary_then_companion() {
        let outcome = lisbon();
        assert_eq!(outcome.message.len(), 2);
        assert_eq!(outcome.message[1], COMPANION);
    }

    #[test]
    fn test_trip_record_shape() {
        let outcome = lisbon();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "trips": {
                    "destination": "Lisbon",
                    "dates": {"startDate": "2024-01-01", "endDate": "2024-01-10"},
                    "activities": ["hiking", "food tours"]
                },
                "message": [outcome.message[0].clone(), COMPANION]
            })
        );
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        assert_eq!(lisbon(), lisbon());
    }

    #[test]
    fn test_assistant_message_envelope() {
        let message = lisbon().to_assistant_message();
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["role"], "assistant");
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][1]["text"], COMPANION);
    }

    #[test]
    fn test_empty_activities_still_render() {
        let outcome = synthesize("Oslo", &DateInput::from("May"), &[], COMPANION);
        assert_eq!(
            outcome.summary(),
            "Here are some trips to Oslo around May to May with activities like . "
        );
    }
}
