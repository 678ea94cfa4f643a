//! Configuration for waypath
//!
//! Resolution order: an explicit `--config` path, then `waypath.toml` in the
//! working directory, then the global `~/.config/waypath/config.toml`, then
//! built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_config;
use crate::error::{Result, WaypathError};
use crate::ladder::Alphabet;

pub use types::{GridMarkers, SearchConfig, WaypathConfig, WordConfig, CONFIG_FORMAT_VERSION};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "waypath.toml";

const CONFIG_DIR: &str = "waypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYPATH_CONFIG_DIR";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl WaypathConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read config", path.display(), e))?;
        let config: WaypathConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| WaypathError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Reject configurations that cannot drive a meaningful search
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_config!(format!(
                "config version {} is newer than supported version {}",
                self.version, CONFIG_FORMAT_VERSION
            ));
        }
        let GridMarkers { passable, blocked } = self.grid;
        if passable == blocked {
            bail_config!(format!("grid markers must differ (both are {passable:?})"));
        }
        if passable.is_whitespace() || blocked.is_whitespace() {
            bail_config!("grid markers must not be whitespace");
        }
        self.alphabet().map(|_| ())
    }

    /// The configured substitution alphabet
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.word.alphabet)
    }

    /// Resolve configuration for a run from `cwd`
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, ConfigSource::Local(local)));
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Ok((Self::load(&global)?, ConfigSource::Global(global)));
            }
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }
}

/// Path of the global config file, honoring `WAYPATH_CONFIG_DIR`
pub fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
