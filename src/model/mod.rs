use thiserror::Error;

pub mod language;
pub mod plan;
pub mod reference;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid repository reference `{0}`, expected owner/repository or a clone URL")]
    InvalidReferenceFormat(String),
    #[error("Unsupported language `{0}`, supported languages: en, tr")]
    UnsupportedLanguage(String),
    #[error("Invalid protocol `{0}`, expected https or ssh")]
    InvalidProtocol(String),
    #[error("Regex error: {0}")]
    Regex(#[from] regex_lite::Error),
}
