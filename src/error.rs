use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read configuration file")]
    Io(#[from] std::io::Error),

    #[error("Configuration is not a valid JSON object of refresh rate tiers")]
    Json(#[from] serde_json::Error),

    #[error("Refresh rate `{0}` is not an integer")]
    InvalidRefreshRate(String),

    #[error("Invalid brightness levels for refresh rate {refresh_rate}Hz")]
    InvalidTier {
        refresh_rate: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("No refresh rate configuration found")]
    NoTierFound,

    #[error("No brightness levels configured")]
    MissingBrightnessLevels,

    #[error("Setting `{name}` is unavailable: {reason}")]
    SettingUnavailable { name: String, reason: String },

    #[error("Could not parse setting `{name}` value `{value}`")]
    SettingUnparsable { name: String, value: String },

    #[error("Calibration command `{command}` failed: {reason}")]
    ApplyFailure { command: String, reason: String },
}
