use std::{io::Write, path::Path, process::ExitCode};

use anyhow::anyhow;
use log::debug;
use thiserror::Error;

use crate::{
    cli::args::CliArgs,
    clone::{self, CloneObserver, CloneOutcome, Cloner},
    model::{
        language::Language,
        plan::{ClonePlan, PlanError},
        reference::{Protocol, RepositoryReference},
        ParseError,
    },
    preferences::{PreferenceError, PreferenceStore},
    report::TerminalReporter,
    Ghcm,
};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Reference(#[from] ParseError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// How a `ghcm` invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Handler to a parsed command line
///
/// `--lang` wins over everything else, then a missing repository shows the
/// usage, then `--command` prints the invocation instead of cloning.
/// User mistakes are reported through `reporter` and end in
/// [`RunStatus::Failure`], only failures to persist the language are errors.
pub fn do_run<O: Write, E: Write>(
    ghcm: &Ghcm,
    cli_args: &CliArgs,
    reporter: &mut TerminalReporter<O, E>,
) -> anyhow::Result<RunStatus> {
    if let Some(code) = &cli_args.lang {
        return match ghcm.set_language(code) {
            Ok(language) => {
                reporter.language_changed(language);
                Ok(RunStatus::Success)
            }
            Err(PreferenceError::UnsupportedLanguage(_)) => {
                reporter.unsupported_language();
                Ok(RunStatus::Failure)
            }
            Err(e) => Err(anyhow!("Could not save language preference: {}", e)),
        };
    }

    let Some(repository) = cli_args.repository.as_deref() else {
        reporter.welcome();
        reporter.usage();
        return Ok(RunStatus::Success);
    };

    if cli_args.command {
        return match ghcm.command(repository) {
            Ok(command) => {
                reporter.command(&command);
                Ok(RunStatus::Success)
            }
            Err(e) => {
                debug!("{}", e);
                reporter.invalid_reference();
                Ok(RunStatus::Failure)
            }
        };
    }

    reporter.welcome();
    debug!("Cloning into {}", ghcm.root().display());

    match ghcm.clone_repository(repository, cli_args.dir.as_deref(), reporter) {
        Ok(outcome) if outcome.is_success() => Ok(RunStatus::Success),
        Ok(_) => Ok(RunStatus::Failure),
        Err(CommandError::Reference(e)) => {
            debug!("{}", e);
            reporter.invalid_reference();
            Ok(RunStatus::Failure)
        }
        Err(CommandError::Plan(PlanError::DestinationExists { name, .. })) => {
            reporter.destination_exists(&name);
            Ok(RunStatus::Failure)
        }
    }
}

/// Handler to clone command
/// 1 - Resolves the reference into a clone URL
/// 2 - Plans the destination under `root`
/// 3 - Runs the clone, reporting to `observer`
///
/// Nothing is reported to `observer` unless steps 1 and 2 succeed.
pub fn do_clone(
    cloner: &dyn Cloner,
    root: &Path,
    host: &str,
    protocol: Protocol,
    input: &str,
    name_override: Option<&str>,
    observer: &mut dyn CloneObserver,
) -> Result<CloneOutcome, CommandError> {
    let reference = RepositoryReference::parse(input, host)?;
    let source_url = reference.to_clone_url(host, protocol);
    debug!("Resolved {} to {}", reference, source_url);

    let plan = ClonePlan::new(input, source_url, name_override, root)?;

    Ok(clone::execute(&plan, cloner, observer))
}

/// Handler to language command
pub fn do_set_language(
    preferences: &dyn PreferenceStore,
    code: &str,
) -> Result<Language, PreferenceError> {
    preferences.save(code)
}

/// Handler to command derivation, the `ghcm` invocation equivalent to `input`
pub fn do_command(host: &str, input: &str) -> Result<String, ParseError> {
    RepositoryReference::parse(input, host)?.to_command(host)
}
