use super::Config;
use crate::error::{ConfigError, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".incinerator";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// `~/.incinerator/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the user's config (or defaults when absent), apply env overrides, validate.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read a config file without env overrides. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str::<Config>(&contents)
                .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Load(format!("failed to serialize config: {e}")))?;
        fs::write(&self.config_path, toml_str).map_err(ConfigError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let acquisition = &self.acquisition;
        if !(0.0..=2.0).contains(&acquisition.temperature) {
            return Err(ConfigError::Validation(format!(
                "acquisition.temperature must be within 0.0..=2.0, got {}",
                acquisition.temperature
            )));
        }
        if acquisition.primary_model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "acquisition.primary_model must not be empty".into(),
            ));
        }
        if acquisition.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "acquisition.base_url must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The credential, if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
