use std::{collections::HashMap, path::PathBuf};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::model::reference::Protocol;

pub struct GhcmConfig {
    pub host: Option<String>,
    pub protocol: Option<Protocol>,
    pub preferences_file: Option<PathBuf>,
}

impl GhcmConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            host: raw_config.git.host.filter(|host| !host.is_empty()),
            protocol: raw_config.git.protocol,
            preferences_file: raw_config.preferences.file,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    git: GitConfig,
    #[serde(default)]
    preferences: PreferencesConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct GitConfig {
    host: Option<String>,
    protocol: Option<Protocol>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct PreferencesConfig {
    file: Option<PathBuf>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("GHCM").separator("_").source(env))
            .build()?
            .try_deserialize()
    }
}
