use clap::{CommandFactory, FromArgMatches, Parser};

use crate::messages::Messages;

/// GitHub Clone Manager.
#[derive(Debug, Parser)]
#[clap(name = "ghcm", version)]
pub struct CliArgs {
    /// Repository in format username/repository
    pub repository: Option<String>,
    /// Custom directory name for cloning
    #[clap(short, long)]
    pub dir: Option<String>,
    /// Set language (en/tr)
    #[clap(short, long)]
    pub lang: Option<String>,
    /// Print the ghcm command for a repository or its web page and exit
    #[clap(short, long)]
    pub command: bool,
}

impl CliArgs {
    /// Parses the process arguments with help texts in the given language.
    pub fn parse_localized(messages: &'static Messages) -> Self {
        let matches = localized_command(messages).get_matches();
        CliArgs::from_arg_matches(&matches).unwrap_or_else(|error| error.exit())
    }
}

fn localized_command(messages: &'static Messages) -> clap::Command {
    CliArgs::command()
        .about(messages.help.description)
        .mut_arg("repository", |arg| arg.help(messages.help.repository))
        .mut_arg("dir", |arg| arg.help(messages.help.dir))
        .mut_arg("lang", |arg| arg.help(messages.help.lang))
        .mut_arg("command", |arg| arg.help(messages.help.command))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn parse_clone() {
        let args = CliArgs::parse_from(["ghcm", "microsoft/vscode", "-d", "my-vscode"]);
        assert_eq!(args.repository.as_deref(), Some("microsoft/vscode"));
        assert_eq!(args.dir.as_deref(), Some("my-vscode"));
        assert_eq!(args.lang, None);
        assert!(!args.command);
    }

    #[test]
    fn parse_language() {
        let args = CliArgs::parse_from(["ghcm", "--lang", "tr"]);
        assert_eq!(args.repository, None);
        assert_eq!(args.lang.as_deref(), Some("tr"));
    }

    #[test]
    fn parse_command() {
        let args = CliArgs::parse_from(["ghcm", "-c", "https://github.com/octocat/Hello-World"]);
        assert!(args.command);
    }

    #[test]
    fn localized_help_is_valid() {
        for messages in [&crate::messages::EN, &crate::messages::TR] {
            localized_command(messages).debug_assert();
        }
    }

    #[test]
    fn localized_parse() {
        let matches = localized_command(&crate::messages::TR)
            .try_get_matches_from(["ghcm", "octocat/Hello-World", "--dir", "hello"])
            .unwrap();
        let args = CliArgs::from_arg_matches(&matches).unwrap();
        assert_eq!(args.repository.as_deref(), Some("octocat/Hello-World"));
        assert_eq!(args.dir.as_deref(), Some("hello"));
    }
}
