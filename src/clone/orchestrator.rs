use std::path::{Path, PathBuf};

use log::debug;

use crate::model::plan::ClonePlan;

use super::Cloner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    Success { path: PathBuf, source_url: String },
    Failure { reason: String },
}

impl CloneOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CloneOutcome::Success { .. })
    }
}

/// Receives the notifications emitted around a clone.
pub trait CloneObserver {
    fn started(&mut self, plan: &ClonePlan);

    fn succeeded(&mut self, path: &Path, source_url: &str);

    fn failed(&mut self, reason: &str);
}

/// Runs a single clone attempt for `plan`.
///
/// There is no retry and no cleanup: whatever a failed clone leaves at the
/// destination stays there.
pub fn execute(
    plan: &ClonePlan,
    cloner: &dyn Cloner,
    observer: &mut dyn CloneObserver,
) -> CloneOutcome {
    observer.started(plan);

    match cloner.clone_repository(&plan.source_url, &plan.destination_path) {
        Ok(()) => {
            debug!(
                "Cloned {} into {}",
                plan.source_url,
                plan.destination_path.display()
            );
            observer.succeeded(&plan.destination_path, &plan.source_url);
            CloneOutcome::Success {
                path: plan.destination_path.clone(),
                source_url: plan.source_url.clone(),
            }
        }
        Err(error) => {
            debug!("Failed to clone {}: {}", plan.source_url, error);
            let reason = error.to_string();
            observer.failed(&reason);
            CloneOutcome::Failure { reason }
        }
    }
}
