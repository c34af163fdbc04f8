use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiDefaults,
}

/// Settings for the simulated submission backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDefaults {
    /// Simulated round-trip latency in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Probability in [0, 1] that a submission fails (default: 0.5).
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_failure_rate() -> f64 {
    0.5
}

impl Default for ApiDefaults {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}
