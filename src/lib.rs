//! Tripwise - supervisor-routed travel interview
//!
//! A supervisor decides whether a request is about travel and, if so, hands it to
//! a four-stage interview (destination, dates, activities, trip synthesis) that
//! suspends at each question and resumes with the caller's answer.
//!
//! Settings are passed explicitly to whatever hosts an interview; there is no
//! process-wide instance.

pub mod actors;
pub mod cli;
pub mod config;
pub mod interview;
pub mod synth;
pub mod utils;

pub use actors::{InterviewActorHandle, Supervisor, SupervisorReply};
pub use config::Settings;
pub use interview::{EmptyInterview, InterruptPayload, InterviewError, Step, TravelInterview};
pub use synth::{normalize_dates, DateInput, NormalizedDateRange, TripOutcome, TripRecord};
