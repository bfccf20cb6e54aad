//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bikeshare/bikeshare.toml`
//! 3. Environment variables: `BIKESHARE_*` prefix
//! 4. `--data-dir` command line override

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::City;

/// File name of each city's trip data, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CityFiles {
    pub chicago: String,
    pub new_york_city: String,
    pub washington: String,
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: "chicago.csv".into(),
            new_york_city: "new_york_city.csv".into(),
            washington: "washington.csv".into(),
        }
    }
}

impl CityFiles {
    pub fn get(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

/// Raw city files for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCityFiles {
    pub chicago: Option<String>,
    pub new_york_city: Option<String>,
    pub washington: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    pub cities: RawCityFiles,
}

/// Unified configuration for bikeshare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the city CSV files (default: current directory)
    pub data_dir: PathBuf,
    /// City → file name mapping
    pub cities: CityFiles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            cities: CityFiles::default(),
        }
    }
}

/// Get the XDG config directory for bikeshare.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bikeshare").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bikeshare.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Full path of a city's trip data file.
    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(self.cities.get(city))
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let cities = &overlay.cities;
        Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            cities: CityFiles {
                chicago: cities
                    .chicago
                    .clone()
                    .unwrap_or_else(|| self.cities.chicago.clone()),
                new_york_city: cities
                    .new_york_city
                    .clone()
                    .unwrap_or_else(|| self.cities.new_york_city.clone()),
                washington: cities
                    .washington
                    .clone()
                    .unwrap_or_else(|| self.cities.washington.clone()),
            },
        }
    }

    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_dir.to_string_lossy().as_ref());
        self.data_dir = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence, using the XDG global config file.
    pub fn load(data_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), data_dir)
    }

    /// Load settings with layered precedence from an explicit config file.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `config_file`, if given and present
    /// 3. Environment variables: `BIKESHARE_*` prefix
    /// 4. `data_dir` override
    pub fn load_from(
        config_file: Option<&Path>,
        data_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        if let Some(dir) = data_dir {
            current.data_dir = dir.to_path_buf();
        }

        current.expand_paths();

        Ok(current)
    }

    /// Apply BIKESHARE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BIKESHARE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_dir") {
            settings.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("cities.chicago") {
            settings.cities.chicago = val;
        }
        if let Ok(val) = config.get_string("cities.new_york_city") {
            settings.cities.new_york_city = val;
        }
        if let Ok(val) = config.get_string("cities.washington") {
            settings.cities.washington = val;
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
