use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::reference::strip_git_suffix;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Destination {name} already exists at {}", .path.display())]
    DestinationExists { name: String, path: PathBuf },
}

/// Where a repository goes and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
    pub source_url: String,
    pub destination_name: String,
    pub destination_path: PathBuf,
}

impl ClonePlan {
    /// Plans a clone of `source_url` into `root`.
    ///
    /// Fails if any filesystem entry, including a dangling symlink, already
    /// occupies the destination. Nothing is created here, so the destination
    /// may still appear before the clone starts.
    pub fn new(
        input: &str,
        source_url: impl Into<String>,
        name_override: Option<&str>,
        root: &Path,
    ) -> Result<ClonePlan, PlanError> {
        let destination_name = destination_name(input, name_override);
        let destination_path = root.join(&destination_name);

        if std::fs::symlink_metadata(&destination_path).is_ok() {
            return Err(PlanError::DestinationExists {
                name: destination_name,
                path: destination_path,
            });
        }

        debug!(
            "Planned clone destination {} ({})",
            destination_path.display(),
            destination_name
        );

        Ok(ClonePlan {
            source_url: source_url.into(),
            destination_name,
            destination_path,
        })
    }
}

/// Override if non-empty, otherwise the last `/` segment of `input` without `.git`.
pub fn destination_name(input: &str, name_override: Option<&str>) -> String {
    match name_override {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => {
            let last_segment = input.rsplit('/').next().unwrap_or(input);
            strip_git_suffix(last_segment).to_owned()
        }
    }
}
