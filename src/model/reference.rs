use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use log::trace;
use regex_lite::Regex;
use serde::Deserialize;

use crate::model::ParseError;

pub const DEFAULT_HOST: &str = "github.com";

const GIT_SUFFIX: &str = ".git";

/// A repository as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryReference {
    /// `owner/name` shorthand, expanded into a clone URL for the configured host.
    Shorthand { owner: String, name: String },
    /// Anything mentioning the host. Passed to git untouched.
    Address(String),
}

impl RepositoryReference {
    /// Parses `input` against the reference grammar:
    ///
    /// - any string containing `host` is an [`RepositoryReference::Address`],
    /// - `owner/name` with exactly one `/` and two non-empty segments is a
    ///   [`RepositoryReference::Shorthand`],
    /// - everything else is rejected with [`ParseError::InvalidReferenceFormat`].
    pub fn parse(input: &str, host: &str) -> Result<RepositoryReference, ParseError> {
        if !host.is_empty() && input.contains(host) {
            trace!("Reference {} contains host {}, using it as is", input, host);
            return Ok(RepositoryReference::Address(input.to_owned()));
        }

        let re = Regex::new(r"^(?P<owner>[^/]+)/(?P<name>[^/]+)$")?;
        let captures = re
            .captures(input)
            .ok_or_else(|| ParseError::InvalidReferenceFormat(input.to_owned()))?;

        match (captures.name("owner"), captures.name("name")) {
            (Some(owner), Some(name)) => Ok(RepositoryReference::Shorthand {
                owner: owner.as_str().to_owned(),
                name: name.as_str().to_owned(),
            }),
            _ => Err(ParseError::InvalidReferenceFormat(input.to_owned())),
        }
    }

    pub fn to_clone_url(&self, host: &str, protocol: Protocol) -> String {
        match self {
            RepositoryReference::Address(address) => address.clone(),
            RepositoryReference::Shorthand { owner, name } => {
                let name = strip_git_suffix(name);
                match protocol {
                    Protocol::Https => format!("https://{host}/{owner}/{name}.git"),
                    Protocol::Ssh => format!("ssh://git@{host}/{owner}/{name}.git"),
                }
            }
        }
    }

    /// The `ghcm` invocation that clones this repository.
    ///
    /// Addresses are reduced to `owner/name` when they point at a repository on
    /// `host`, including repository web pages like `https://github.com/o/r/tree/main`.
    pub fn to_command(&self, host: &str) -> Result<String, ParseError> {
        let mut command = String::from("ghcm ");
        match self {
            RepositoryReference::Shorthand { owner, name } => {
                let _ = write!(command, "{}/{}", owner, strip_git_suffix(name));
            }
            RepositoryReference::Address(address) => {
                let re = Regex::new(&format!(
                    r"^(?:[a-z][a-z0-9+.-]*://)?(?:[^@/]+@)?{}[:/](?P<owner>[^/]+)/(?P<name>[^/?#]+)",
                    regex_lite::escape(host)
                ))?;
                let owner_and_name = re.captures(address).and_then(|captures| {
                    Some((captures.name("owner")?, captures.name("name")?))
                });
                match owner_and_name {
                    Some((owner, name)) => {
                        let _ = write!(
                            command,
                            "{}/{}",
                            owner.as_str(),
                            strip_git_suffix(name.as_str())
                        );
                    }
                    None => command.push_str(address),
                }
            }
        }
        Ok(command)
    }
}

impl Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RepositoryReference::Shorthand { owner, name } => write!(f, "{owner}/{name}"),
            RepositoryReference::Address(address) => f.write_str(address),
        }
    }
}

/// Turns a reference into the URL handed to git.
pub fn resolve(input: &str, host: &str, protocol: Protocol) -> Result<String, ParseError> {
    RepositoryReference::parse(input, host).map(|reference| reference.to_clone_url(host, protocol))
}

pub(crate) fn strip_git_suffix(name: &str) -> &str {
    name.strip_suffix(GIT_SUFFIX).unwrap_or(name)
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Deserialize)]
pub enum Protocol {
    #[default]
    #[serde(rename = "https")]
    Https,
    #[serde(rename = "ssh")]
    Ssh,
}

impl FromStr for Protocol {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.to_ascii_lowercase();
        match value.as_str() {
            "https" => Ok(Protocol::Https),
            "ssh" => Ok(Protocol::Ssh),
            _ => Err(ParseError::InvalidProtocol(value)),
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Protocol::Https => f.write_str("https"),
            Protocol::Ssh => f.write_str("ssh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn resolve_https(input: &str) -> Result<String, ParseError> {
        resolve(input, DEFAULT_HOST, Protocol::Https)
    }

    #[test]
    fn resolve_shorthand() {
        assert_eq!(
            resolve_https("octocat/Hello-World").unwrap(),
            "https://github.com/octocat/Hello-World.git"
        );
    }

    #[test]
    fn resolve_shorthand_keeps_segment_order() {
        for (owner, name) in [("a", "b"), ("rust-lang", "cargo"), ("x.y", "z_w")] {
            let url = resolve_https(&format!("{owner}/{name}")).unwrap();
            let owner_at = url.find(owner).unwrap();
            let name_at = url.rfind(name).unwrap();
            assert!(owner_at < name_at, "{url}");
        }
    }

    #[test]
    fn resolve_shorthand_with_git_suffix() {
        assert_eq!(
            resolve_https("octocat/Hello-World.git").unwrap(),
            "https://github.com/octocat/Hello-World.git"
        );
    }

    #[test]
    fn resolve_shorthand_ssh() {
        assert_eq!(
            resolve("octocat/Hello-World", DEFAULT_HOST, Protocol::Ssh).unwrap(),
            "ssh://git@github.com/octocat/Hello-World.git"
        );
    }

    #[test]
    fn resolve_address_unchanged() {
        for input in [
            "https://github.com/octocat/Hello-World.git",
            "git@github.com:octocat/Hello-World.git",
            "github.com",
            "https://github.com/a/b/c/d",
        ] {
            assert_eq!(resolve_https(input).unwrap(), input);
        }
    }

    #[test]
    fn resolve_custom_host() {
        assert_eq!(
            resolve("group/project", "gitlab.example.com", Protocol::Https).unwrap(),
            "https://gitlab.example.com/group/project.git"
        );
        assert_eq!(
            resolve(
                "https://gitlab.example.com/group/project",
                "gitlab.example.com",
                Protocol::Https
            )
            .unwrap(),
            "https://gitlab.example.com/group/project"
        );
    }

    #[test]
    fn resolve_invalid() {
        for input in [
            "",
            "bad-input-no-slash",
            "/",
            "owner/",
            "/name",
            "a/b/c",
            "a//b",
            "https://gitlab.com/a/b/c",
        ] {
            assert!(
                matches!(
                    resolve_https(input),
                    Err(ParseError::InvalidReferenceFormat(ref raw)) if raw == input
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_shorthand() {
        assert_eq!(
            RepositoryReference::parse("octocat/Hello-World", DEFAULT_HOST).unwrap(),
            RepositoryReference::Shorthand {
                owner: "octocat".to_owned(),
                name: "Hello-World".to_owned()
            }
        );
    }

    #[test]
    fn command_from_shorthand() {
        let reference = RepositoryReference::parse("octocat/Hello-World.git", DEFAULT_HOST).unwrap();
        assert_eq!(
            reference.to_command(DEFAULT_HOST).unwrap(),
            "ghcm octocat/Hello-World"
        );
    }

    #[test]
    fn command_from_addresses() {
        for input in [
            "https://github.com/octocat/Hello-World.git",
            "https://github.com/octocat/Hello-World",
            "https://github.com/octocat/Hello-World/tree/main/src",
            "https://github.com/octocat/Hello-World?tab=readme",
            "git@github.com:octocat/Hello-World.git",
            "github.com/octocat/Hello-World",
        ] {
            let reference = RepositoryReference::parse(input, DEFAULT_HOST).unwrap();
            assert_eq!(
                reference.to_command(DEFAULT_HOST).unwrap(),
                "ghcm octocat/Hello-World",
                "{input}"
            );
        }
    }

    #[test]
    fn command_from_host_only_address() {
        let reference = RepositoryReference::parse("https://github.com", DEFAULT_HOST).unwrap();
        assert_eq!(
            reference.to_command(DEFAULT_HOST).unwrap(),
            "ghcm https://github.com"
        );
    }

    #[test]
    fn parse_protocol() {
        assert_eq!(Protocol::from_str("SSH").unwrap(), Protocol::Ssh);
        assert_eq!(Protocol::from_str("https").unwrap(), Protocol::Https);
        assert!(matches!(
            Protocol::from_str("ftp"),
            Err(ParseError::InvalidProtocol(value)) if value == "ftp"
        ));
    }
}
