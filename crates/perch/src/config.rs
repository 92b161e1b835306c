//! RON timeline configuration.
//!
//! ```ron
//! (
//!     timelines: [
//!         (name: "Home", source: Home),
//!         (name: "Mentions", source: Mentions),
//!         (name: "#python", source: Search, args: Single("#python")),
//!         (name: "rust + mock", source: Search, args: Multi(["#rust", "#mock"])),
//!     ],
//!     visible: 2,
//! )
//! ```

use std::path::{Path, PathBuf};

use perch_timeline::UpdateArgs;
use serde::Deserialize;
use strum::{Display, EnumString};

/// Where a timeline's entries come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Source {
    Home,
    Mentions,
    Favorites,
    /// The user's own posts.
    Own,
    /// Full-text search; args are the search term(s).
    Search,
    /// Another user's posts; args is the screen name.
    User,
}

impl Source {
    /// Whether this source can't do anything without arguments.
    pub fn needs_args(self) -> bool {
        matches!(self, Source::Search | Source::User)
    }
}

/// One timeline pane.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimelineConfig {
    pub name: String,
    pub source: Source,
    #[serde(default)]
    pub args: UpdateArgs,
}

/// Top-level config file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PerchConfig {
    pub timelines: Vec<TimelineConfig>,
    /// How many panes are visible at startup, counted from the first.
    #[serde(default = "default_visible")]
    pub visible: usize,
}

fn default_visible() -> usize {
    1
}

/// Error type for config and feed loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid feed: {0}")]
    Feed(#[from] serde_json::Error),

    #[error("config defines no timelines")]
    NoTimelines,

    #[error("timeline '{name}' uses source '{origin}' but has no args")]
    MissingArgs { name: String, origin: Source },
}

impl PerchConfig {
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        let config = Self::from_ron(&content)?;
        tracing::info!(path = %path.display(), timelines = config.timelines.len(), "config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timelines.is_empty() {
            return Err(ConfigError::NoTimelines);
        }
        if let Some(t) = self
            .timelines
            .iter()
            .find(|t| t.source.needs_args() && t.args.is_none())
        {
            return Err(ConfigError::MissingArgs {
                name: t.name.clone(),
                origin: t.source,
            });
        }
        Ok(())
    }
}

pub(crate) fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
