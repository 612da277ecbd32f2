//! Configuration management for signup-gate
//!
//! Separates startup configuration (requires restart) from runtime configuration
//! (shared with running connections and updatable in place).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

const ENV_PREFIX: &str = "SIGNUP_GATE";
const DEFAULT_CONFIG_PATH: &str = "config";

/// Complete server configuration with startup/runtime separation
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(flatten)]
    pub startup: StartupConfig,

    #[serde(flatten)]
    pub runtime: RuntimeConfig,
}

/// Configuration that requires server restart to take effect
#[derive(Debug, Deserialize, Clone)]
pub struct StartupConfig {
    // ═══ NETWORK (Environment Override Supported) ═══
    /// IP address to bind the listener to
    pub bind_address: String,

    /// Listener port, 0 picks an ephemeral port
    pub port: u16,

    // ═══ LIMITS ═══
    /// Maximum length of a single command line, terminator included
    pub max_command_length: usize,
    pub max_username_length: usize,
    pub max_email_length: usize,

    /// SIGNUP/LOGIN attempts allowed per client IP inside `auth_window_secs`
    pub auth_attempts_per_window: usize,
    pub auth_window_secs: u64,
}

/// Configuration that can be changed while the server is running
#[derive(Debug, Deserialize, Clone)]
pub struct RuntimeConfig {
    /// Maximum concurrent connections
    /// Environment: SIGNUP_GATE_MAX_CLIENTS
    pub max_clients: usize,
}

/// Thread-safe runtime configuration wrapper
pub type SharedRuntimeConfig = Arc<RwLock<RuntimeConfig>>;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            startup: StartupConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 2525,
                max_command_length: 512,
                max_username_length: 32,
                max_email_length: 120,
                auth_attempts_per_window: 10,
                auth_window_secs: 60,
            },
            runtime: RuntimeConfig { max_clients: 64 },
        }
    }
}

impl ServerConfig {
    /// Load `config.toml` from the working directory with environment overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from `path` (extension optional). A missing file falls back to defaults.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("bind_address", defaults.startup.bind_address)?
            .set_default("port", i64::from(defaults.startup.port))?
            .set_default("max_command_length", defaults.startup.max_command_length as i64)?
            .set_default("max_username_length", defaults.startup.max_username_length as i64)?
            .set_default("max_email_length", defaults.startup.max_email_length as i64)?
            .set_default(
                "auth_attempts_per_window",
                defaults.startup.auth_attempts_per_window as i64,
            )?
            .set_default("auth_window_secs", defaults.startup.auth_window_secs as i64)?
            .set_default("max_clients", defaults.runtime.max_clients as i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Split into startup (immutable) and runtime (mutable) parts
    pub fn split(self) -> (StartupConfig, SharedRuntimeConfig) {
        let runtime = Arc::new(RwLock::new(self.runtime));
        (self.startup, runtime)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.startup.bind_address.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.startup.max_command_length < 64 {
            return Err(config::ConfigError::Message(
                "max_command_length must be at least 64".into(),
            ));
        }

        if self.startup.max_username_length == 0 || self.startup.max_email_length == 0 {
            return Err(config::ConfigError::Message(
                "username and email limits must be greater than 0".into(),
            ));
        }

        if self.startup.auth_attempts_per_window == 0 || self.startup.auth_window_secs == 0 {
            return Err(config::ConfigError::Message(
                "auth rate limit must allow at least one attempt per window".into(),
            ));
        }

        if self.runtime.max_clients == 0 {
            return Err(config::ConfigError::Message(
                "max_clients must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl StartupConfig {
    /// Get bind address and port as a socket address string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn auth_window(&self) -> Duration {
        Duration::from_secs(self.auth_window_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.startup.listen_socket(), "127.0.0.1:2525");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load_from("does/not/exist/signup-gate").unwrap();
        assert_eq!(config.startup.max_username_length, 32);
        assert_eq!(config.runtime.max_clients, 64);
    }

    #[test]
    fn test_rejects_zero_max_clients() {
        let mut config = ServerConfig::default();
        config.runtime.max_clients = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_rate_limit() {
        let mut config = ServerConfig::default();
        config.startup.auth_attempts_per_window = 0;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_split_shares_runtime() {
        let (startup, runtime) = ServerConfig::default().split();
        assert_eq!(startup.auth_window(), Duration::from_secs(60));
        runtime.write().await.max_clients = 3;
        assert_eq!(runtime.read().await.max_clients, 3);
    }
}
