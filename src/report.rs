//! Plain terminal rendering of the clone workflow.

use std::{io::Write, path::Path};

use crate::{
    clone::CloneObserver,
    messages::{Messages, EXAMPLES},
    model::{language::Language, plan::ClonePlan},
};

/// Writes orchestrator notifications to `out` and `err` in one language.
pub struct TerminalReporter<O, E> {
    messages: &'static Messages,
    out: O,
    err: E,
}

impl TerminalReporter<std::io::Stdout, std::io::Stderr> {
    pub fn stdio(messages: &'static Messages) -> Self {
        Self::new(messages, std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> TerminalReporter<O, E> {
    pub fn new(messages: &'static Messages, out: O, err: E) -> Self {
        Self { messages, out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn welcome(&mut self) {
        let _ = writeln!(self.out, "{}\n", self.messages.welcome);
    }

    pub fn usage(&mut self) {
        let _ = writeln!(self.out, "{}\n", self.messages.usage);
        let _ = writeln!(self.out, "{}:", self.messages.examples);
        for example in EXAMPLES {
            let _ = writeln!(self.out, "  {example}");
        }
    }

    pub fn invalid_reference(&mut self) {
        let _ = writeln!(self.err, "{}", self.messages.invalid_repo);
    }

    pub fn destination_exists(&mut self, name: &str) {
        let _ = writeln!(self.err, "{}: {}", self.messages.already_exists, name);
    }

    /// Confirms the change in the newly selected language.
    pub fn language_changed(&mut self, language: Language) {
        let _ = writeln!(self.out, "{}", language.messages().lang_changed);
    }

    pub fn unsupported_language(&mut self) {
        let _ = writeln!(self.err, "{}", self.messages.unsupported_language);
    }

    pub fn command(&mut self, command: &str) {
        let _ = writeln!(self.out, "{command}");
    }
}

impl<O: Write, E: Write> CloneObserver for TerminalReporter<O, E> {
    fn started(&mut self, _plan: &ClonePlan) {
        let _ = writeln!(self.out, "{}", self.messages.cloning);
        let _ = self.out.flush();
    }

    fn succeeded(&mut self, path: &Path, source_url: &str) {
        let _ = writeln!(self.out, "\n{}\n", self.messages.success);
        let _ = writeln!(self.out, "{}: {}", self.messages.location, path.display());
        let _ = writeln!(self.out, "{source_url}");
    }

    fn failed(&mut self, reason: &str) {
        let _ = writeln!(self.err, "{}", self.messages.error);
        let _ = writeln!(self.err, "Error: {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use crate::messages::{EN, TR};

    fn reporter(messages: &'static Messages) -> TerminalReporter<Vec<u8>, Vec<u8>> {
        TerminalReporter::new(messages, Vec::new(), Vec::new())
    }

    fn output(reporter: TerminalReporter<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = reporter.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn success_report() {
        let mut reporter = reporter(&EN);
        let plan = ClonePlan {
            source_url: "https://github.com/octocat/Hello-World.git".to_owned(),
            destination_name: "Hello-World".to_owned(),
            destination_path: PathBuf::from("/work/Hello-World"),
        };

        reporter.started(&plan);
        reporter.succeeded(&plan.destination_path, &plan.source_url);

        let (out, err) = output(reporter);
        assert_eq!(
            out,
            "Cloning repository...\n\
             \n\
             Repository cloned successfully!\n\
             \n\
             Location: /work/Hello-World\n\
             https://github.com/octocat/Hello-World.git\n"
        );
        assert_eq!(err, "");
    }

    #[test]
    fn failure_report_in_turkish() {
        let mut reporter = reporter(&TR);

        reporter.failed("repository not found");

        let (out, err) = output(reporter);
        assert_eq!(out, "");
        assert_eq!(err, "Depo klonlanamadı\nError: repository not found\n");
    }

    #[test]
    fn usage_lists_examples() {
        let mut reporter = reporter(&EN);

        reporter.usage();

        let (out, _) = output(reporter);
        assert!(out.starts_with("Usage: ghcm <username/repository> [options]\n"));
        for example in EXAMPLES {
            assert!(out.contains(example), "{example}");
        }
    }

    #[test]
    fn language_change_uses_new_language() {
        let mut reporter = reporter(&EN);

        reporter.language_changed(Language::Turkish);

        let (out, _) = output(reporter);
        assert_eq!(out, "Dil Türkçe olarak değiştirildi\n");
    }

    #[test]
    fn destination_exists_names_directory() {
        let mut reporter = reporter(&EN);

        reporter.destination_exists("Hello-World");

        let (_, err) = output(reporter);
        assert_eq!(err, "Directory already exists: Hello-World\n");
    }
}
