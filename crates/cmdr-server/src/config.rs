//! Server configuration.

use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Server configuration
#[derive(Clone)]
pub struct Config {
    /// Path to configuration file (optional on disk)
    pub config_path: PathBuf,
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Gemini model name
    pub model: String,
    /// Gemini REST base URL
    pub base_url: String,
    /// Directory commands run in (server's cwd when unset)
    pub working_dir: Option<PathBuf>,
    /// Gemini API key
    pub api_key: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("config_path", &self.config_path)
            .field("bind", &self.bind)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("working_dir", &self.working_dir)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Values accepted in `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub bind: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub working_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Read a config file; a missing file yields the empty config
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }
}

fn default_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".cmdr")
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = default_config_dir();

        Self {
            config_path: config_dir.join("config.toml"),
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            model: cmdr_core::llm::DEFAULT_MODEL.to_string(),
            base_url: cmdr_core::llm::DEFAULT_BASE_URL.to_string(),
            working_dir: None,
            api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment and config file
    ///
    /// Precedence, highest first: environment, `config.toml`, defaults.
    ///
    /// ```text
    /// ~/.cmdr/              # or $CMDR_DIR
    /// └── config.toml       # bind, model, base_url, working_dir
    ///
    /// GOOGLE_API_KEY        # Gemini API key (env only)
    /// CMDR_BIND             # listen address, default 127.0.0.1:8000
    /// CMDR_MODEL            # Gemini model, default gemini-1.5-flash
    /// CMDR_BASE_URL         # Gemini REST base URL
    /// CMDR_WORKDIR          # directory commands run in
    /// ```
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `env` to look up variables
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let config_dir = var("CMDR_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_config_dir);
        let config_path = config_dir.join("config.toml");
        let file = FileConfig::read(&config_path)?;

        let bind_str = var("CMDR_BIND")
            .or(file.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_str
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address: {}", bind_str))?;

        let model = var("CMDR_MODEL")
            .or(file.model)
            .unwrap_or_else(|| cmdr_core::llm::DEFAULT_MODEL.to_string());

        let base_url = var("CMDR_BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| cmdr_core::llm::DEFAULT_BASE_URL.to_string());

        let working_dir = var("CMDR_WORKDIR").map(PathBuf::from).or(file.working_dir);
        if let Some(ref dir) = working_dir {
            if !dir.is_dir() {
                anyhow::bail!("Working directory does not exist: {}", dir.display());
            }
        }

        Ok(Self {
            config_path,
            bind,
            model,
            base_url,
            working_dir,
            api_key: var(API_KEY_ENV),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.config_path.ends_with("config.toml"));
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!(config.base_url.starts_with("https://generativelanguage.googleapis.com"));
        assert!(config.working_dir.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_str().unwrap().to_string();

        let config = Config::load_with(env_from(&[("CMDR_DIR", &dir)])).unwrap();

        assert!(config.config_path.starts_with(temp_dir.path()));
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.model, cmdr_core::llm::DEFAULT_MODEL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_reads_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let work_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            format!(
                "bind = \"0.0.0.0:9090\"\nmodel = \"gemini-1.5-pro\"\nworking_dir = {:?}\n",
                work_dir.path().to_str().unwrap()
            ),
        )
        .unwrap();

        let dir = temp_dir.path().to_str().unwrap().to_string();
        let config = Config::load_with(env_from(&[("CMDR_DIR", &dir)])).unwrap();

        assert_eq!(config.bind.to_string(), "0.0.0.0:9090");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.working_dir.as_deref(), Some(work_dir.path()));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "bind = \"0.0.0.0:9090\"\nmodel = \"from-file\"\n",
        )
        .unwrap();

        let dir = temp_dir.path().to_str().unwrap().to_string();
        let config = Config::load_with(env_from(&[
            ("CMDR_DIR", &dir),
            ("CMDR_BIND", "127.0.0.1:7000"),
            ("CMDR_MODEL", "from-env"),
            ("CMDR_BASE_URL", "http://localhost:1234"),
            ("GOOGLE_API_KEY", "abc123"),
        ]))
        .unwrap();

        assert_eq!(config.bind.to_string(), "127.0.0.1:7000");
        assert_eq!(config.model, "from-env");
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_str().unwrap().to_string();

        let config =
            Config::load_with(env_from(&[("CMDR_DIR", &dir), ("GOOGLE_API_KEY", "  ")])).unwrap();

        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_str().unwrap().to_string();

        let result = Config::load_with(env_from(&[("CMDR_DIR", &dir), ("CMDR_BIND", "nowhere")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "port = 80\n").unwrap();

        let dir = temp_dir.path().to_str().unwrap().to_string();
        assert!(Config::load_with(env_from(&[("CMDR_DIR", &dir)])).is_err());
    }

    #[test]
    fn test_missing_working_dir_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_str().unwrap().to_string();
        let missing = temp_dir.path().join("does-not-exist");

        let result = Config::load_with(env_from(&[
            ("CMDR_DIR", &dir),
            ("CMDR_WORKDIR", missing.to_str().unwrap()),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: Some("super-secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }
}
