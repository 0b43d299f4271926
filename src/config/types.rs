use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deep_link: DeepLinkConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deep-link adapter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// URL scheme the app answers to (e.g., "tca20221220").
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Target for links without one, e.g. `scheme://nothing`.
    /// Same syntax as link targets: "intermediate-b/leaf".
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

/// Store runtime limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Follow-up intents processed per dispatched intent (default: 64).
    #[serde(default = "default_max_follow_ups")]
    pub max_follow_ups: usize,
    /// Diagnostics kept before the oldest are discarded (default: 256).
    #[serde(default = "default_diagnostics_capacity")]
    pub diagnostics_capacity: usize,
}

/// Logging settings. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_scheme() -> String {
    "tca20221220".to_string()
}

fn default_fallback() -> String {
    "intermediate-b/leaf".to_string()
}

fn default_max_follow_ups() -> usize {
    64
}

fn default_diagnostics_capacity() -> usize {
    256
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            fallback: default_fallback(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_follow_ups: default_max_follow_ups(),
            diagnostics_capacity: default_diagnostics_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
