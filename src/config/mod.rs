mod settings;

pub use settings::{InterviewConfig, LoggingConfig, Settings, SupervisorConfig, SystemConfig};
