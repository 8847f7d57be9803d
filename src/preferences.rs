use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    str::FromStr,
};

use home::home_dir;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::language::Language;

pub const DEFAULT_PREFERENCES_FILE_NAME: &str = ".ghcm-config.json";

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Unsupported language `{0}`, supported languages: en, tr")]
    UnsupportedLanguage(String),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Preference document is not a JSON object")]
    NotAnObject,
}

/// Persisted user settings.
///
/// `load` never fails: anything unreadable falls back to the default language.
/// `save` validates the code before touching storage and replaces the whole
/// document.
pub trait PreferenceStore {
    fn load(&self) -> Language;

    fn save(&self, code: &str) -> Result<Language, PreferenceError>;
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct PreferenceDocument {
    language: Language,
}

/// `$HOME/.ghcm-config.json`, if the home directory is known.
pub fn default_preferences_file() -> Option<PathBuf> {
    home_dir().map(|home| home.join(DEFAULT_PREFERENCES_FILE_NAME))
}

fn parse_code(code: &str) -> Result<Language, PreferenceError> {
    Language::from_str(code).map_err(|_| PreferenceError::UnsupportedLanguage(code.to_owned()))
}

/// JSON document stored at a fixed per-user location.
///
/// There is no locking: concurrent writers race and the last one wins.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Language, PreferenceError> {
        let contents = std::fs::read_to_string(&self.path)?;
        // serde also accepts `["tr"]` for a struct, only an object is a document
        match serde_json::from_str::<Value>(&contents)? {
            value @ Value::Object(_) => {
                let document: PreferenceDocument = serde_json::from_value(value)?;
                Ok(document.language)
            }
            _ => Err(PreferenceError::NotAnObject),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Language {
        match self.read() {
            Ok(language) => {
                trace!("Loaded language {} from {}", language, self.path.display());
                language
            }
            Err(error) => {
                debug!(
                    "Could not load preferences from {}, using default language: {}",
                    self.path.display(),
                    error
                );
                Language::default()
            }
        }
    }

    fn save(&self, code: &str) -> Result<Language, PreferenceError> {
        let language = parse_code(code)?;
        let document = PreferenceDocument { language };
        std::fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        debug!("Saved language {} to {}", language, self.path.display());
        Ok(language)
    }
}

/// Keeps the preference in memory, for embedding and tests.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    language: RefCell<Option<Language>>,
}

impl MemoryPreferenceStore {
    pub fn new(language: Option<Language>) -> Self {
        Self {
            language: RefCell::new(language),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Language {
        self.language.borrow().unwrap_or_default()
    }

    fn save(&self, code: &str) -> Result<Language, PreferenceError> {
        let language = parse_code(code)?;
        self.language.replace(Some(language));
        Ok(language)
    }
}
