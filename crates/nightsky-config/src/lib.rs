//! Configuration for the nightsky animation.
//!
//! Settings are read from an optional TOML file in the platform config
//! directory (for example `~/.config/nightsky/config.toml` on Linux). Every
//! key is optional; a missing file yields the defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, bail};
use directories::ProjectDirs;
use log::debug;
use nightsky_core::{SceneParams, ScreenSize};
use serde::Deserialize;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pixels of screen area per star, for each of the two star tiers.
    pub star_density: u32,
    /// Probability of a meteor appearing on each tick.
    pub meteor_chance: f64,
    /// Duration of one animation tick in milliseconds.
    pub tick_ms: u64,
    /// Fixed random seed. Uses OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_density: SceneParams::DEFAULT_STAR_DENSITY,
            meteor_chance: SceneParams::DEFAULT_METEOR_CHANCE,
            tick_ms: 20,
            seed: None,
        }
    }
}

impl Config {
    /// Project directories for nightsky, if a home directory can be resolved.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "nightsky")
    }

    /// Path of the configuration file, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from the default location.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .wrap_err_with(|| format!("failed to read config file {}", path.display()));
            }
        };
        debug!("loading config from {}", path.display());
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).wrap_err("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is within range.
    pub fn validate(&self) -> Result<()> {
        if self.star_density == 0 {
            bail!("star_density must be greater than 0");
        }
        if !(0.0..=1.0).contains(&self.meteor_chance) {
            bail!(
                "meteor_chance must be between 0 and 1, got {}",
                self.meteor_chance
            );
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than 0");
        }
        Ok(())
    }

    /// Wall-clock duration of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Scene parameters for a screen of the given size.
    pub fn scene_params(&self, screen: ScreenSize) -> SceneParams {
        SceneParams::for_screen(screen, self.star_density, self.meteor_chance)
    }
}
