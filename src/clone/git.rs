use std::path::Path;

use git2::{build::RepoBuilder, Config, Cred, CredentialType, FetchOptions, RemoteCallbacks};
use log::{debug, trace};

use super::{CloneError, Cloner};

/// Clones with libgit2, authenticating the way the user's git does.
///
/// Without an explicit configuration the user's default git configuration is
/// opened when a clone starts.
#[derive(Default)]
pub struct GitCloner {
    git_config: Option<Config>,
}

impl GitCloner {
    pub fn new(git_config: Config) -> Self {
        Self {
            git_config: Some(git_config),
        }
    }
}

/// Credential types handed out during one clone.
///
/// libgit2 asks again after a rejected credential, so each type is offered
/// once and the callback fails after that.
#[derive(Debug)]
struct CredentialAttempts {
    tried: CredentialType,
}

impl CredentialAttempts {
    fn new() -> Self {
        Self {
            tried: CredentialType::empty(),
        }
    }

    fn next(&mut self, allowed_types: CredentialType) -> Option<CredentialType> {
        let candidate = [
            CredentialType::USERNAME,
            CredentialType::SSH_KEY,
            CredentialType::USER_PASS_PLAINTEXT,
        ]
        .into_iter()
        .find(|kind| allowed_types.contains(*kind) && !self.tried.contains(*kind))?;
        self.tried.insert(candidate);
        Some(candidate)
    }
}

fn fetch_options(git_config: &Config) -> FetchOptions<'_> {
    let mut attempts = CredentialAttempts::new();
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |url, username, allowed_types| {
        trace!(
            "Requested credentials for {}, username {:?}, allowed types {:?}",
            url,
            username,
            allowed_types
        );
        let Some(kind) = attempts.next(allowed_types) else {
            return Err(git2::Error::from_str(&format!(
                "no valid authentication available for {url}"
            )));
        };
        // Asking for ssh username
        if kind == CredentialType::USERNAME {
            return Cred::username("git");
        }
        // SSH auth
        if kind == CredentialType::SSH_KEY {
            return Cred::ssh_key_from_agent(username.unwrap_or("git"));
        }
        // HTTP auth
        Cred::credential_helper(git_config, url, username)
    });

    callbacks.transfer_progress(|progress| {
        trace!(
            "Received {}/{} objects ({} bytes), indexed {}",
            progress.received_objects(),
            progress.total_objects(),
            progress.received_bytes(),
            progress.indexed_objects()
        );
        true
    });

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    fetch_options
}

impl Cloner for GitCloner {
    fn clone_repository(&self, source_url: &str, destination: &Path) -> Result<(), CloneError> {
        debug!("Cloning {} into {}", source_url, destination.display());

        let default_config;
        let git_config = match &self.git_config {
            Some(git_config) => git_config,
            None => {
                default_config = Config::open_default()?;
                &default_config
            }
        };

        let repo = RepoBuilder::new()
            .fetch_options(fetch_options(git_config))
            .clone(source_url, destination)?;

        debug!(
            "Cloned {} with HEAD at {:?}",
            source_url,
            repo.head().ok().and_then(|head| head.target())
        );
        Ok(())
    }
}
