// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::TweakAgentError;
use crate::infra::paths;

/// Environment variable that overrides `[api] base_url`.
pub const API_URL_ENV: &str = "TWEAK_AGENT_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub workflow: WorkflowConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// External text-generation tool. The prompt is appended as the last argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Skip the external tool entirely and use the built-in mock theme.
    #[serde(default)]
    pub mock: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: "claude".into(),
            args: vec!["-p".into()],
            mock: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the theme API; themes are POSTed to `{base_url}/themes`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/agent".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub default_iterations: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            default_iterations: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Iterations used when a trigger request omits `iterations`.
    pub default_iterations: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            default_iterations: 3,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, TweakAgentError> {
        let path = paths::config_file_path();
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self, TweakAgentError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| TweakAgentError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TWEAK_AGENT_API_URL` on top of whatever the file said.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        self
    }

    fn validate(&self) -> Result<(), TweakAgentError> {
        if self.generator.command.trim().is_empty() {
            return Err(TweakAgentError::Config(
                "generator.command must not be empty".into(),
            ));
        }
        if self.workflow.default_iterations == 0 {
            return Err(TweakAgentError::Config(
                "workflow.default_iterations must be at least 1".into(),
            ));
        }
        if self.server.default_iterations == 0 {
            return Err(TweakAgentError::Config(
                "server.default_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
