use std::process::ExitCode;

use ghcm::{
    cli::{args::CliArgs, command_handlers::do_run},
    config::GhcmConfig,
    preferences::{default_preferences_file, FilePreferenceStore, PreferenceStore},
    report::TerminalReporter,
    Ghcm,
};
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let config = GhcmConfig::load()?;

    // Help and version only need the language, nothing else may fail before parsing
    let language = config
        .preferences_file
        .clone()
        .or_else(default_preferences_file)
        .map(|path| FilePreferenceStore::new(path).load())
        .unwrap_or_default();
    let messages = language.messages();
    let cli_args = CliArgs::parse_localized(messages);

    let mut builder = Ghcm::builder();
    if let Some(host) = config.host {
        builder = builder.host(host);
    }
    if let Some(protocol) = config.protocol {
        builder = builder.protocol(protocol);
    }
    if let Some(preferences_file) = config.preferences_file {
        builder = builder.preferences_file(preferences_file);
    }
    let ghcm = builder.try_build().map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut reporter = TerminalReporter::stdio(messages);
    Ok(do_run(&ghcm, &cli_args, &mut reporter)?.into())
}
