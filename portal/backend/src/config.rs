//! Portal settings
//!
//! Defaults, then an optional `concession.toml`, then `CONCESSION_*`
//! environment variables.

use std::collections::HashMap;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    /// PostgREST base URL; without it submissions stay in memory
    pub datastore_url: Option<String>,
    pub datastore_api_key: Option<String>,
    /// Workflow webhook; without it notifications are skipped
    pub workflow_url: Option<String>,
    pub request_timeout_secs: u64,
    pub session_ttl_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// `env` replaces the process environment when given
    fn build(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("request_timeout_secs", 30)?
            .set_default("session_ttl_secs", 3600)?
            .add_source(File::with_name("concession").required(false))
            .add_source(Environment::with_prefix("CONCESSION").try_parsing(true).source(env))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::build(env(&[])).unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.session_ttl(), Duration::from_secs(3600));
        assert!(settings.datastore_url.is_none());
        assert!(settings.workflow_url.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::build(env(&[
            ("CONCESSION_BIND_ADDR", "127.0.0.1:9000"),
            ("CONCESSION_DATASTORE_URL", "https://db.example.org"),
            ("CONCESSION_DATASTORE_API_KEY", "anon"),
            ("CONCESSION_WORKFLOW_URL", "https://hooks.example.org/exec"),
            ("CONCESSION_SESSION_TTL_SECS", "600"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:9000");
        assert_eq!(settings.datastore_url.as_deref(), Some("https://db.example.org"));
        assert_eq!(settings.datastore_api_key.as_deref(), Some("anon"));
        assert_eq!(settings.workflow_url.as_deref(), Some("https://hooks.example.org/exec"));
        assert_eq!(settings.session_ttl_secs, 600);
    }
}
