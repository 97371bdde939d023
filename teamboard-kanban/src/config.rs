//! Board configuration loaded with Figment
//!
//! Sources, later overriding earlier:
//! 1. Default values
//! 2. An optional configuration file (TOML, YAML or JSON, by extension)
//! 3. Environment variables prefixed `TEAMBOARD_`

use crate::error::{KanbanError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TEAMBOARD_";

/// What a grab does while another drag session is still active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrabPolicy {
    /// Keep the active session; drop the new grab
    #[default]
    Ignore,
    /// Cancel the active session and start a new one for the new grab
    CancelPrevious,
}

/// Settings for a board and its drag sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub grab_policy: GrabPolicy,
    /// Seed document to load the board from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

impl BoardConfig {
    /// Load configuration from defaults, `file` (if given) and the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(file)?.extract()?;
        debug!(?config, "board configuration loaded");
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            trace!(path = %path.display(), "merging config file");
            figment = figment.merge(file_provider(path)?);
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }
}

fn file_provider(path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(Figment::from(Yaml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        _ => Err(KanbanError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
