//! Display language selection for bilingual labels.
//!
//! Records store names as a single `"English / Local"` string (older entries
//! use `"English (Local)"`). Splitting happens only here, at presentation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which half of a bilingual label to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    English,
    Local,
    #[default]
    Both,
}

impl DisplayLanguage {
    /// Pick the requested half of a bilingual label.
    ///
    /// Labels that are not bilingual are returned unchanged.
    pub fn select(self, label: &str) -> String {
        let Some((english, local)) = split_bilingual(label) else {
            return label.to_string();
        };

        match self {
            DisplayLanguage::English => english.to_string(),
            DisplayLanguage::Local => local.to_string(),
            DisplayLanguage::Both => format!("{} / {}", english, local),
        }
    }

    /// Choose between fixed English and local strings (used for headings).
    pub fn pick(self, english: &str, local: &str) -> String {
        match self {
            DisplayLanguage::English => english.to_string(),
            DisplayLanguage::Local => local.to_string(),
            DisplayLanguage::Both => format!("{} / {}", english, local),
        }
    }
}

fn split_bilingual(label: &str) -> Option<(&str, &str)> {
    if let Some((english, local)) = label.split_once(" / ") {
        return Some((english.trim(), local.trim()));
    }

    let (english, rest) = label.split_once(" (")?;
    let local = rest.strip_suffix(')')?;
    Some((english.trim(), local.trim()))
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayLanguage::English => write!(f, "english"),
            DisplayLanguage::Local => write!(f, "local"),
            DisplayLanguage::Both => write!(f, "both"),
        }
    }
}

impl FromStr for DisplayLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(DisplayLanguage::English),
            "local" | "te" => Ok(DisplayLanguage::Local),
            "both" => Ok(DisplayLanguage::Both),
            other => Err(format!("Unknown display language: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_slash_separated() {
        let label = "P. Rama Krishna / పి. రామకృష్ణ";
        assert_eq!(DisplayLanguage::English.select(label), "P. Rama Krishna");
        assert_eq!(DisplayLanguage::Local.select(label), "పి. రామకృష్ణ");
        assert_eq!(DisplayLanguage::Both.select(label), label);
    }

    #[test]
    fn test_select_parenthesized() {
        let label = "Bharadwaja (భరద్వాజ)";
        assert_eq!(DisplayLanguage::English.select(label), "Bharadwaja");
        assert_eq!(DisplayLanguage::Local.select(label), "భరద్వాజ");
    }

    #[test]
    fn test_plain_label_is_unchanged() {
        assert_eq!(DisplayLanguage::Local.select("Sita"), "Sita");
    }

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("en".parse::<DisplayLanguage>(), Ok(DisplayLanguage::English));
        assert_eq!("Local".parse::<DisplayLanguage>(), Ok(DisplayLanguage::Local));
        assert!("fr".parse::<DisplayLanguage>().is_err());
    }
}
