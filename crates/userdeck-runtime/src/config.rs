use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use userdeck_providers::{DEFAULT_BASE_URL, FetchRequest};
use userdeck_providers::traits::{DEFAULT_NATIONALITIES, DEFAULT_RESULTS};

/// Environment variable overriding the data directory
pub const PATH_ENV: &str = "USERDECK_PATH";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. USERDECK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.userdeck
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("userdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".userdeck"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Where and how the startup fetch asks for users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub results: u32,
    pub nationalities: Vec<String>,
    /// Unset means a pending request waits indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            results: DEFAULT_RESULTS,
            nationalities: DEFAULT_NATIONALITIES
                .iter()
                .map(|nat| nat.to_string())
                .collect(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest::new(self.results, self.nationalities.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::path_in(&resolve_workspace_path(None)?))
    }

    /// Replace the API base URL, e.g. from a command-line flag
    pub fn override_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        self.api.base_url = base_url.into();
        self.validate()
    }

    /// Reject values the source would refuse anyway, so a broken file fails
    /// at load time with the file's name in the error
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url).map_err(|e| {
            Error::Config(format!("invalid api.base_url '{}': {}", self.api.base_url, e))
        })?;

        if self.api.results == 0 {
            return Err(Error::Config("api.results must be at least 1".to_string()));
        }

        if let Some(nat) = self
            .api
            .nationalities
            .iter()
            .find(|nat| nat.is_empty() || !nat.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err(Error::Config(format!(
                "invalid nationality code '{}' in api.nationalities",
                nat
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://randomuser.me/api");
        assert_eq!(config.api.results, 12);
        assert_eq!(config.api.nationalities, vec!["us", "gb"]);
        assert_eq!(config.api.timeout(), None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.results = 30;
        config.api.timeout_secs = Some(5);

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.api.timeout(), Some(Duration::from_secs(5)));

        Ok(())
    }

    #[test]
    fn test_unset_timeout_is_not_written() -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        assert!(content.contains("[api]"));
        assert!(!content.contains("timeout_secs"));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\nresults = 5\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api.results, 5);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.nationalities, vec!["us", "gb"]);

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "[api]\nresults = 0\n")?;
        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        std::fs::write(&config_path, "[api]\nnationalities = [\"us\", \"g-b\"]\n")?;
        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        std::fs::write(&config_path, "[api\n")?;
        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        Ok(())
    }

    #[test]
    fn test_override_base_url() {
        let mut config = Config::default();
        assert!(config.override_base_url("http://127.0.0.1:9/api").is_ok());
        assert_eq!(config.api.base_url, "http://127.0.0.1:9/api");

        assert!(config.override_base_url("not a url").is_err());
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/userdeck-data"))?;
        assert_eq!(path, PathBuf::from("/tmp/userdeck-data"));
        Ok(())
    }
}
