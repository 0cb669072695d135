use std::path::PathBuf;

use n0_error::{Result, StdResultExt};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Language of every user-visible string.
    pub locale: Locale,

    /// Product name shown in the login heading and the illustration's alt text.
    pub brand_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            brand_name: "EmSana".to_string(),
        }
    }
}

impl Config {
    /// Environment variable that overrides [`Config::default_location`].
    pub const PATH_ENV: &'static str = "EMSANA_CONFIG";
    const CONFIG_FILE: &'static str = "config.yml";

    pub fn default_location() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs_next::config_dir().map(|dir| dir.join("emsana").join(Self::CONFIG_FILE))
    }

    pub async fn from_file(path: PathBuf) -> Result<Self> {
        let config = tokio::fs::read_to_string(path)
            .await
            .std_context("reading config file")?;
        let config = serde_yml::from_str(&config).std_context("parsing config file")?;
        Ok(config)
    }

    /// Reads the config at `path`, falling back to defaults when there is no file.
    ///
    /// The file is never created.
    pub async fn load_or_default(path: PathBuf) -> Result<Self> {
        let exists = tokio::fs::try_exists(&path)
            .await
            .std_context("checking for config file")?;
        if !exists {
            info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        info!("loading config from {}", path.display());
        Self::from_file(path).await
    }
}
