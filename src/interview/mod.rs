//! Travel Interview
//!
//! Collects destination, dates and activities through suspend/resume prompts,
//! then hands the answers to the trip synthesizer.

pub mod error;
pub mod machine;
pub mod state;
pub mod typestate;

pub use error::{InterviewError, InterviewResult};
pub use machine::{ask_activities, ask_dates, ask_destination, find_trips, Step, TravelInterview};
pub use state::{Field, InterruptPayload, InterviewState, Stage};
pub use typestate::{Complete, EmptyInterview, WithDates, WithDestination};
