use std::path::{Path, PathBuf};

use crate::{
    cli::command_handlers::{do_clone, do_command, do_set_language, CommandError},
    clone::{CloneObserver, CloneOutcome, Cloner},
    model::{
        language::Language,
        reference::{self, Protocol},
        ParseError,
    },
    preferences::{PreferenceError, PreferenceStore},
};

mod builder;

pub use builder::GhcmBuilder;

pub struct Ghcm {
    root: PathBuf,
    host: String,
    protocol: Protocol,
    preferences: Box<dyn PreferenceStore>,
    cloner: Box<dyn Cloner>,
}

impl Ghcm {
    pub fn builder() -> GhcmBuilder {
        GhcmBuilder::default()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Active display language, English when nothing valid is stored
    pub fn language(&self) -> Language {
        self.preferences.load()
    }

    /// Stores a new display language
    pub fn set_language(&self, code: &str) -> Result<Language, PreferenceError> {
        do_set_language(self.preferences.as_ref(), code)
    }

    /// Clone URL for a reference
    pub fn resolve(&self, input: &str) -> Result<String, ParseError> {
        reference::resolve(input, &self.host, self.protocol)
    }

    /// Clones a repository into the root directory
    pub fn clone_repository(
        &self,
        input: &str,
        name_override: Option<&str>,
        observer: &mut dyn CloneObserver,
    ) -> Result<CloneOutcome, CommandError> {
        do_clone(
            self.cloner.as_ref(),
            &self.root,
            &self.host,
            self.protocol,
            input,
            name_override,
            observer,
        )
    }

    /// The `ghcm` command that clones the referenced repository
    pub fn command(&self, input: &str) -> Result<String, ParseError> {
        do_command(&self.host, input)
    }
}
