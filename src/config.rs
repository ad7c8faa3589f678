use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "blogql.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub fixtures: FixtureSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub fact: FactSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_store_path() -> String {
    "./blog.sqlite".to_string()
}

fn default_max_connections() -> u32 {
    4
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSettings {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_authors")]
    pub authors: usize,
}

fn default_seed() -> u64 {
    123
}

fn default_authors() -> usize {
    10
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            authors: default_authors(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    /// Port 0 binds an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactSettings {
    #[serde(default = "default_fact_url")]
    pub url: String,
}

fn default_fact_url() -> String {
    "https://catfact.ninja/fact".to_string()
}

impl Default for FactSettings {
    fn default() -> Self {
        Self {
            url: default_fact_url(),
        }
    }
}

/// How relationship fields reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationLoading {
    /// One store call per parent object.
    Lazy,
    /// One bulk store call per resolution depth, deduplicated per request.
    #[default]
    Batched,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphqlSettings {
    #[serde(default)]
    pub relations: RelationLoading,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub file: Option<String>,
}

impl BlogConfig {
    /// Load `blogql.toml` from `start_path` or any parent directory.
    ///
    /// Falls back to defaults rooted at `start_path` when no file exists.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load(&config_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: BlogConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BlogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
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

    pub fn store_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.store.path)
    }

    pub fn log_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.logging.file.as_ref().map(|f| project_root.join(f))
    }
}
