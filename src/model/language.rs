use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{messages::Messages, model::ParseError};

/// Display language of the terminal output.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tr")]
    Turkish,
}

impl Language {
    pub const SUPPORTED: [Language; 2] = [Language::English, Language::Turkish];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::English => &crate::messages::EN,
            Language::Turkish => &crate::messages::TR,
        }
    }
}

/// Codes are matched exactly, `EN` is not a language.
impl FromStr for Language {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::SUPPORTED
            .into_iter()
            .find(|language| language.code() == value)
            .ok_or_else(|| ParseError::UnsupportedLanguage(value.to_owned()))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn parse_supported_codes() {
        assert_eq!(Language::from_str("en").unwrap(), Language::English);
        assert_eq!(Language::from_str("tr").unwrap(), Language::Turkish);
    }

    #[test]
    fn reject_other_codes() {
        for code in ["fr", "", "EN", " tr"] {
            assert!(matches!(
                Language::from_str(code),
                Err(ParseError::UnsupportedLanguage(value)) if value == code
            ));
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&Language::Turkish).unwrap(),
            "\"tr\""
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"en\"").unwrap(),
            Language::English
        );
    }
}
