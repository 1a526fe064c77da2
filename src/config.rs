use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = ".folio.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub content: ContentSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Content document, relative to the directory holding the config file
    #[serde(default = "default_content_path")]
    pub path: String,
}

fn default_content_path() -> String {
    "content.json".to_string()
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Subject used when the visitor leaves the subject field blank
    #[serde(default = "default_subject")]
    pub default_subject: String,

    /// Simulated latency before the mail handoff
    #[serde(default = "default_pending_delay_ms")]
    pub pending_delay_ms: u64,

    /// Upper bound on the pending wait; the form is re-enabled when it elapses
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_subject() -> String {
    "Portfolio Contact".to_string()
}

fn default_pending_delay_ms() -> u64 {
    2000
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            default_subject: default_subject(),
            pending_delay_ms: default_pending_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ContactSettings {
    pub fn pending_delay(&self) -> Duration {
        Duration::from_millis(self.pending_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl TuiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl FolioConfig {
    /// Load the config found at or above `start_path`.
    ///
    /// Falls back to defaults rooted at `start_path` when no config file exists.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    /// Load a specific config file; its parent directory becomes the project root.
    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: FolioConfig = toml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| FolioError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.path.trim().is_empty() {
            return Err(FolioError::Config("content.path cannot be empty".to_string()));
        }
        if self.contact.timeout_ms == 0 {
            return Err(FolioError::Config(
                "contact.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.contact.timeout_ms <= self.contact.pending_delay_ms {
            return Err(FolioError::Config(format!(
                "contact.timeout_ms ({}) must be greater than contact.pending_delay_ms ({})",
                self.contact.timeout_ms, self.contact.pending_delay_ms
            )));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(FolioError::Config(
                "tui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn content_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.content.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
