use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub interview: InterviewConfig,
    pub supervisor: SupervisorConfig,
    pub system: SystemConfig,
    pub logging: LoggingConfig,
}

/// Text the travel interview shows at each suspension point and at the end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    pub destination_prompt: String,
    pub dates_prompt: String,
    pub activities_prompt: String,
    pub companion_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisorConfig {
    /// Words that mark a message as travel-related (matched case-insensitively on word boundaries)
    pub travel_keywords: Vec<String>,
    /// Reply used for messages that are not delegated to the travel interview
    pub direct_reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub channel_buffer_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            destination_prompt: "Where do you want to go?".to_string(),
            dates_prompt: "When do you want to go?".to_string(),
            activities_prompt: "What activities are you interested in?".to_string(),
            companion_message:
                "Here's a trip card you can save and share with your friends and family!"
                    .to_string(),
        }
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        let travel_keywords = [
            "travel",
            "trip",
            "trips",
            "vacation",
            "holiday",
            "flight",
            "flights",
            "hotel",
            "hotels",
            "destination",
            "tourism",
            "itinerary",
            "visit",
            "getaway",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect();

        Self {
            travel_keywords,
            direct_reply: "I can help you plan trips. Tell me where you'd like to travel and I'll take it from there."
                .to_string(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: 32,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load `config/{CONFIG_ENV}` (optional) overlaid with `APP__*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        Self::load(format!("config/{}", config_env))
    }

    /// Load from an explicit file stem or path; the file may be absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let name = path.as_ref().to_string_lossy().into_owned();

        let config = Config::builder()
            .add_source(File::with_name(&name).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
