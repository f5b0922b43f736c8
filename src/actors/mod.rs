pub mod interview_actor;
pub mod messages;
pub mod supervisor;

pub use interview_actor::InterviewActorHandle;
pub use supervisor::{IntentClassifier, KeywordClassifier, Supervisor, SupervisorReply};
