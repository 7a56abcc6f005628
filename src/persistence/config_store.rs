use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::SiteConfig;

const CONFIG_DIR: &str = "tidewalk";
const SITE_CONFIG_FILE: &str = "site.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// Platform config dir, current directory as last resort
fn get_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| {
        warn!("Could not determine config directory, using current directory");
        PathBuf::from(".")
    })
}

impl SiteConfig {
    /// Default location: `<config_dir>/tidewalk/site.toml`
    pub fn default_path() -> PathBuf {
        let mut path = get_config_dir();
        path.push(CONFIG_DIR);
        path.push(SITE_CONFIG_FILE);
        path
    }

    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading site config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(io_error(path))?;

        let config: SiteConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded site config from {}", path.display());
        Ok(config)
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(io_error(parent))?;
        }

        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .map_err(io_error(path))?;
        info!("Site config written to {}", path.display());
        Ok(())
    }

    /// Writes the default config if nothing exists at `path` yet
    pub async fn ensure_default_config(path: &Path) -> Result<(), ConfigError> {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(io_error(path))?;

        if !exists {
            info!("Creating default site config at {}", path.display());
            SiteConfig::default().save_to(path).await?;
        }
        Ok(())
    }

    /// Loads `path`, degrading to defaults instead of failing startup
    pub async fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path).await {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default site config: {}", e);
                SiteConfig::default()
            }
        }
    }
}
