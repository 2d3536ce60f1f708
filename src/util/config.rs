use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// GraphQL endpoint. Overridable for GitHub Enterprise installs.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// The `organization/repository` shown on startup.
    #[serde(default = "default_path")]
    pub default_path: String,
}

fn default_api_url() -> String {
    "https://api.github.com/graphql".to_string()
}
fn default_path() -> String {
    "the-road-to-learn-react/the-road-to-learn-react".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_path: default_path(),
        }
    }
}

impl AppConfig {
    /// Load config from an explicit path, or search the usual places:
    /// `~/.config/ghissues/config.toml` first, then the platform config dir
    /// from the `directories` crate. Missing config means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/ghissues/config.toml"));
        }
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghissues") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::read(path),
            None => Ok(AppConfig::default()),
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghissues") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/ghissues/logs")
    }
}
