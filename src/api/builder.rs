use std::{env, error::Error, path::PathBuf};

use crate::{
    clone::{Cloner, GitCloner},
    model::reference::{Protocol, DEFAULT_HOST},
    preferences::{default_preferences_file, FilePreferenceStore, PreferenceStore},
    Ghcm,
};

#[derive(Default)]
pub struct GhcmBuilder {
    root: Option<PathBuf>,
    host: Option<String>,
    protocol: Option<Protocol>,
    preferences_file: Option<PathBuf>,
    preferences: Option<Box<dyn PreferenceStore>>,
    cloner: Option<Box<dyn Cloner>>,
}

impl GhcmBuilder {
    /// Directory the repositories are cloned into.
    ///
    /// Defaults to the current directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Host recognized in full addresses and used to expand `owner/name`.
    ///
    /// Defaults to `github.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Protocol of the URLs built from `owner/name`.
    ///
    /// Defaults to https.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Location of the preference file.
    ///
    /// Defaults to `$HOME/.ghcm-config.json`.
    pub fn preferences_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_file = Some(path.into());
        self
    }

    /// Replaces the file backed preference store.
    pub fn preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.preferences = Some(Box::new(store));
        self
    }

    /// Replaces the libgit2 clone implementation.
    pub fn cloner(mut self, cloner: impl Cloner + 'static) -> Self {
        self.cloner = Some(Box::new(cloner));
        self
    }

    pub fn try_build(self) -> Result<Ghcm, Box<dyn Error>> {
        let Self {
            root,
            host,
            protocol,
            preferences_file,
            preferences,
            cloner,
        } = self;
        let root = match root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        let host = host
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let preferences = match preferences {
            Some(preferences) => preferences,
            None => {
                let path = preferences_file
                    .or_else(default_preferences_file)
                    .ok_or("Could not find home dir. Please define $HOME env variable.")?;
                Box::new(FilePreferenceStore::new(path))
            }
        };

        let cloner = match cloner {
            Some(cloner) => cloner,
            None => Box::new(GitCloner::default()),
        };

        Ok(Ghcm {
            root,
            host,
            protocol: protocol.unwrap_or_default(),
            preferences,
            cloner,
        })
    }
}
