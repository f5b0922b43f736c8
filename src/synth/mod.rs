//! Trip Synthesizer
//!
//! Turns the three collected answers into a trip record and the reply shown to the user.

pub mod dates;
pub mod trip;

pub use dates::{normalize_dates, DateInput, DateParseAmbiguous, DateResolution, NormalizedDateRange};
pub use trip::{synthesize, trip_summary, AssistantMessage, ContentPart, TripOutcome, TripRecord};
