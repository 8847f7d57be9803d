mod git;
pub(crate) mod orchestrator;

use std::path::Path;

use thiserror::Error;

pub use git::GitCloner;
pub use orchestrator::{execute, CloneObserver, CloneOutcome};

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum CloneError {
    #[error("{}", .0.message())]
    Git(#[from] git2::Error),
}

/// Materializes a remote repository into a local directory.
#[cfg_attr(test, automock)]
pub trait Cloner {
    fn clone_repository(&self, source_url: &str, destination: &Path) -> Result<(), CloneError>;
}
