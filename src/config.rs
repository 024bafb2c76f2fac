use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub ai: Option<AiSettings>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Settings for the government open-data feed
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_feed_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            timeout_secs: default_feed_timeout(),
            cache_ttl_secs: default_feed_cache_ttl(),
        }
    }
}

fn default_feed_url() -> String {
    "https://data.moa.gov.tw/Service/OpenData/TransService.aspx?UnitId=QcbUEzN6E6DL".to_string()
}
fn default_feed_timeout() -> u64 {
    30
}
fn default_feed_cache_ttl() -> u64 {
    300
}

/// Settings for the ranking pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Maximum number of ranked results returned to the caller
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
    /// Leading subset of results that gets an AI rationale
    #[serde(default = "default_explain_top")]
    pub explain_top: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
            explain_top: default_explain_top(),
        }
    }
}

fn default_result_cap() -> usize {
    6
}
fn default_explain_top() -> usize {
    3
}

/// Settings for the text-generation collaborator
///
/// The whole section is optional; without it the service runs with match
/// explanations disabled.
#[derive(Debug, Clone, Deserialize)]
pub struct AiSettings {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_ai_model")]
    pub model: String,
    #[serde(default = "default_ai_timeout")]
    pub timeout_secs: u64,
}

fn default_ai_model() -> String {
    "@cf/meta/llama-3.1-8b-instruct".to_string()
}
fn default_ai_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. PAWMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PAWMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PAWMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
