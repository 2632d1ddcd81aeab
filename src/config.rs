use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::features::FeatureError;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path} does not fit the feature schema: {source}")]
    Invalid {
        path: PathBuf,
        source: FeatureError,
    },
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {}", path.display());
    Ok(value)
}

/// Locations of the resources a dashboard session loads once at start up.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub schema_path: PathBuf,
    pub model_path: PathBuf,
    /// Lowest rounded score that counts as a pass.
    pub pass_mark: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: "catalog.json".into(),
            schema_path: "feature_schema.json".into(),
            model_path: "model.json".into(),
            pass_mark: 60.0,
        }
    }
}

pub const CONFIG_ENV: &str = "CAROUSEL_CONFIG";

impl Config {
    /// Reads the file named by `CAROUSEL_CONFIG`, or returns the defaults when the
    /// variable is unset.
    pub fn load() -> Result<Self, LoadError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let mut config: Config = read_json(path)?;
        // Relative resource paths are taken relative to the config file.
        if let Some(dir) = path.parent() {
            config.catalog_path = dir.join(&config.catalog_path);
            config.schema_path = dir.join(&config.schema_path);
            config.model_path = dir.join(&config.model_path);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{ "pass_mark": 50.0 }"#).unwrap();
        assert_eq!(config.pass_mark, 50.0);
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(config.schema_path, PathBuf::from("feature_schema.json"));
        assert_eq!(config.model_path, PathBuf::from("model.json"));
    }

    #[test]
    fn unreadable_file() {
        let err = Config::from_file(Path::new("/nonexistent/carousel.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
