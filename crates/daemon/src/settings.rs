//! Daemon settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file named by `MQSCGEN_CONFIG`, then `MQSCGEN_*` environment
//! variables.

use config::{Config, ConfigError, Environment, File};
use mqscgen_core::port::SessionMaintenanceConfig;
use mqscgen_web::server::{
    WebServerConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST, DEFAULT_RATE_LIMIT_RATE,
};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "MQSCGEN";
pub const CONFIG_PATH_VAR: &str = "MQSCGEN_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub host: String,
    pub port: u16,
    pub session_ttl_minutes: i64,
    pub sweep_interval_secs: u64,
    pub rate_limit_burst: u32,
    pub rate_limit_rate: u32,
    /// `pretty` or `json`
    pub log_format: String,
}

impl DaemonConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_PATH_VAR).ok();
        Self::load_from(file.as_deref(), Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_from(file: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("session_ttl_minutes", 120_i64)?
            .set_default("sweep_interval_secs", 300_i64)?
            .set_default("rate_limit_burst", i64::from(DEFAULT_RATE_LIMIT_BURST))?
            .set_default("rate_limit_rate", i64::from(DEFAULT_RATE_LIMIT_RATE))?
            .set_default("log_format", "pretty")?;

        if let Some(path) = file {
            builder = builder.add_source(File::with_name(path));
        }

        let config: DaemonConfig = builder.add_source(env).build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.session_ttl_minutes <= 0 {
            return Err(ConfigError::Message(
                "session_ttl_minutes must be positive".to_string(),
            ));
        }
        if self.sweep_interval_secs == 0 {
            return Err(ConfigError::Message(
                "sweep_interval_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn web(&self) -> WebServerConfig {
        WebServerConfig {
            host: self.host.clone(),
            port: self.port,
            rate_limit_burst: self.rate_limit_burst,
            rate_limit_per_sec: self.rate_limit_rate,
        }
    }

    pub fn maintenance(&self) -> SessionMaintenanceConfig {
        SessionMaintenanceConfig {
            idle_ttl_minutes: self.session_ttl_minutes,
        }
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.session_ttl_minutes, 120);
        assert_eq!(config.sweep_interval(), Duration::from_secs(300));
        assert_eq!(config.log_format, "pretty");
    }

    #[test]
    fn test_env_overrides() {
        let config = DaemonConfig::load_from(
            None,
            env(&[
                ("MQSCGEN_PORT", "8080"),
                ("MQSCGEN_SESSION_TTL_MINUTES", "15"),
                ("MQSCGEN_RATE_LIMIT_BURST", "5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.web().port, 8080);
        assert_eq!(config.web().rate_limit_burst, 5);
        assert_eq!(config.maintenance().idle_ttl_ms(), 15 * 60_000);
    }

    #[test]
    fn test_rejects_zero_ttl() {
        let err = DaemonConfig::load_from(None, env(&[("MQSCGEN_SESSION_TTL_MINUTES", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("session_ttl_minutes"));
    }
}
