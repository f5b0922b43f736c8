//! Typestate Interview Builder
//!
//! Each answer consumes the previous stage's type and returns the next one, so an
//! interview cannot be synthesized (or asked for dates) before its earlier answers exist.
//!
//! ```
//! use tripwise::interview::EmptyInterview;
//!
//! let outcome = EmptyInterview::new()
//!     .with_destination("Lisbon")
//!     .with_dates("next weekend")
//!     .with_activities(vec!["hiking".to_string()])
//!     .synthesize("Share it!");
//!
//! assert_eq!(outcome.trips.dates.start_date, "next weekend");
//! ```

use crate::synth::{self, DateInput, TripOutcome};

#[derive(Debug, Clone, Default)]
pub struct EmptyInterview;

#[derive(Debug, Clone)]
pub struct WithDestination {
    destination: String,
}

#[derive(Debug, Clone)]
pub struct WithDates {
    destination: String,
    dates: DateInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Complete {
    destination: String,
    dates: DateInput,
    activities: Vec<String>,
}

impl EmptyInterview {
    pub fn new() -> Self {
        Self
    }

    pub fn with_destination(self, destination: impl Into<String>) -> WithDestination {
        WithDestination {
            destination: destination.into(),
        }
    }
}

impl WithDestination {
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn with_dates(self, dates: impl Into<DateInput>) -> WithDates {
        WithDates {
            destination: self.destination,
            dates: dates.into(),
        }
    }
}

impl WithDates {
    pub fn dates(&self) -> &DateInput {
        &self.dates
    }

    pub fn with_activities(self, activities: Vec<String>) -> Complete {
        Complete {
            destination: self.destination,
            dates: self.dates,
            activities,
        }
    }
}

impl Complete {
    pub(crate) fn new(destination: String, dates: DateInput, activities: Vec<String>) -> Self {
        Self {
            destination,
            dates,
            activities,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    /// Normalize the dates and build the trip; takes `&self` so it can be repeated
    pub fn synthesize(&self, companion_message: &str) -> TripOutcome {
        synth::synthesize(
            &self.destination,
            &self.dates,
            &self.activities,
            companion_message,
        )
    }

    pub(crate) fn into_parts(self) -> (String, DateInput, Vec<String>) {
        (self.destination, self.dates, self.activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::state::{InterviewState, Stage};
    use serde_json::json;

    #[test]
    fn test_builder_reaches_synthesis() {
        let with_destination = EmptyInterview::new().with_destination("Kyoto");
        assert_eq!(with_destination.destination(), "Kyoto");

        let with_dates = with_destination
            .with_dates(json!({"dates": {"startDate": "2024-04-01", "endDate": "2024-04-07"}}));
        assert!(matches!(with_dates.dates(), DateInput::Nested(_)));

        let complete = with_dates.with_activities(vec!["temples".to_string(), "tea".to_string()]);
        assert_eq!(complete.destination(), "Kyoto");
        assert_eq!(complete.activities(), ["temples", "tea"]);

        let outcome = complete.synthesize("Share it!");
        assert_eq!(outcome.trips.destination, "Kyoto");
        assert_eq!(outcome.trips.dates.end_date, "2024-04-07");
        assert_eq!(outcome.trips.activities, vec!["temples", "tea"]);
    }

    #[test]
    fn test_repeated_synthesis_is_identical() {
        let complete = EmptyInterview::new()
            .with_destination("Kyoto")
            .with_dates("{'startDate': '2024-04-01', 'endDate': '2024-04-07'}")
            .with_activities(vec!["temples".to_string()]);

        assert_eq!(complete.synthesize("x"), complete.synthesize("x"));
    }

    #[test]
    fn test_complete_converts_to_runtime_state() {
        let complete = EmptyInterview::new()
            .with_destination("Kyoto")
            .with_dates("spring")
            .with_activities(vec![]);

        let state = InterviewState::from(complete.clone());
        assert_eq!(state.stage(), Stage::Synthesizing);
        assert_eq!(state.to_complete().unwrap(), complete);
    }
}
