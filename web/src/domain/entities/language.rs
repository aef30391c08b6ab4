//! Display language
//!
//! The portfolio is shown in exactly two languages. Every other client
//! preference collapses to English during negotiation.

use serde::{Deserialize, Serialize};

/// Display language of a rendered page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// The other language, used by the page's language switch
    pub fn toggled(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }

    #[test]
    fn toggle_flips_between_both() {
        assert_eq!(Language::Ko.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Ko);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ko".parse::<Language>().unwrap(), Language::Ko);
        assert!("ja".parse::<Language>().is_err());
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    }
}
