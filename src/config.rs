use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CandorConfig {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    pub provider: String,
    pub max_context_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 4000,
            log_level: "info".into(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "stub".into(),
            max_context_chars: 180,
        }
    }
}

/// Returns `~/.candor/`
pub fn default_candor_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".candor")
}

/// Returns the default config file path: `~/.candor/config.toml`
pub fn default_config_path() -> PathBuf {
    default_candor_dir().join("config.toml")
}

impl CandorConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CandorConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (CANDOR_HOST, CANDOR_PORT,
    /// CANDOR_LOG_LEVEL, CANDOR_GENERATION_PROVIDER).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CANDOR_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CANDOR_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %val, "ignoring invalid CANDOR_PORT"),
            }
        }
        if let Ok(val) = std::env::var("CANDOR_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("CANDOR_GENERATION_PROVIDER") {
            self.generation.provider = val;
        }
    }

    /// Address the HTTP listener binds to, e.g. `127.0.0.1:4000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CandorConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.generation.provider, "stub");
        assert_eq!(config.generation.max_context_chars, 180);
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
port = 8080
log_level = "debug"

[generation]
max_context_chars = 120
"#;
        let config: CandorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.generation.max_context_chars, 120);
        // defaults still apply for unset fields
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.generation.provider, "stub");
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CandorConfig::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn load_from_file_and_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 5000\n").unwrap();

        std::env::set_var("CANDOR_HOST", "0.0.0.0");
        std::env::set_var("CANDOR_PORT", "not-a-port");

        let config = CandorConfig::load_from(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        // invalid port override is ignored, TOML value wins
        assert_eq!(config.server.port, 5000);

        std::env::remove_var("CANDOR_HOST");
        std::env::remove_var("CANDOR_PORT");
    }
}
