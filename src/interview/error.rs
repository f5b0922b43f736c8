use crate::interview::state::{Field, Stage};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    /// A stage ran before an earlier stage supplied its field
    #[error("stage {stage} requires '{missing}', which has not been supplied yet")]
    OutOfOrderAccess { stage: Stage, missing: Field },

    #[error("interview is already complete")]
    AlreadyComplete,

    #[error("interview is not waiting for input (current stage: {0})")]
    NotAwaitingInput(Stage),

    #[error("interview actor unavailable: {0}")]
    ActorUnavailable(String),
}

pub type InterviewResult<T> = Result<T, InterviewError>;
