use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input file, always resolved against the working directory
pub const LOG_FILE: &str = "logs.txt";

/// Output file used when neither the command line nor a config file names one
pub const DEFAULT_OUT: &str = "filtered_logs.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub defaults: Defaults,
}

/// Values used when the matching command-line flag is absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub level: Option<String>,
    pub service: Option<String>,
    pub out: Option<PathBuf>,
}

/// Options after layering command line over config over built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub level: Option<String>,
    pub service: Option<String>,
    pub out: PathBuf,
}

impl FilterConfig {
    pub fn resolve(
        &self,
        level: Option<&str>,
        service: Option<&str>,
        out: Option<&Path>,
    ) -> ResolvedOptions {
        ResolvedOptions {
            level: level.map(str::to_string).or_else(|| self.defaults.level.clone()),
            service: service
                .map(str::to_string)
                .or_else(|| self.defaults.service.clone()),
            out: out
                .map(Path::to_path_buf)
                .or_else(|| self.defaults.out.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT)),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(FilterConfig::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<FilterConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}
