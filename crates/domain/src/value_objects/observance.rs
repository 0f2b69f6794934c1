//! Religious tradition and observance level value objects.
//!
//! These drive the religious rule of the guideline compiler. A family may
//! declare a tradition without an observance level; the level then defaults
//! to secular, which fires no religious rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A religious tradition a family may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReligiousTradition {
    Christian,
    Muslim,
    Jewish,
    Hindu,
    Buddhist,
    Sikh,
    /// Explicitly declared as non-religious. Fires no religious rule.
    None,
}

impl ReligiousTradition {
    /// All traditions for UI dropdowns.
    pub fn all() -> &'static [ReligiousTradition] {
        &[
            ReligiousTradition::Christian,
            ReligiousTradition::Muslim,
            ReligiousTradition::Jewish,
            ReligiousTradition::Hindu,
            ReligiousTradition::Buddhist,
            ReligiousTradition::Sikh,
            ReligiousTradition::None,
        ]
    }

    /// Get a display name for the tradition.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReligiousTradition::Christian => "Christian",
            ReligiousTradition::Muslim => "Muslim",
            ReligiousTradition::Jewish => "Jewish",
            ReligiousTradition::Hindu => "Hindu",
            ReligiousTradition::Buddhist => "Buddhist",
            ReligiousTradition::Sikh => "Sikh",
            ReligiousTradition::None => "None",
        }
    }

    /// Lenient tag lookup; unknown traditions fire no rule.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "christian" => Some(ReligiousTradition::Christian),
            "muslim" => Some(ReligiousTradition::Muslim),
            "jewish" => Some(ReligiousTradition::Jewish),
            "hindu" => Some(ReligiousTradition::Hindu),
            "buddhist" => Some(ReligiousTradition::Buddhist),
            "sikh" => Some(ReligiousTradition::Sikh),
            "none" => Some(ReligiousTradition::None),
            _ => None,
        }
    }
}

impl fmt::Display for ReligiousTradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ReligiousTradition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
            .ok_or_else(|| DomainError::parse(format!("Unknown religious tradition: {}", s)))
    }
}

/// How strictly a family observes their declared tradition.
///
/// Only `Observant` and `Strict` fire the religious rule; `Secular` and
/// `Cultural` families get universal content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ObservanceLevel {
    /// Non-practicing; no religious content rules apply.
    #[default]
    Secular,
    /// Culturally connected but not practicing.
    Cultural,
    /// Practicing; faith themes welcome, hard exclusions limited.
    Observant,
    /// Strictly practicing; full exclusion lists apply.
    Strict,
}

impl ObservanceLevel {
    /// All observance levels for UI dropdowns.
    pub fn all() -> &'static [ObservanceLevel] {
        &[
            ObservanceLevel::Secular,
            ObservanceLevel::Cultural,
            ObservanceLevel::Observant,
            ObservanceLevel::Strict,
        ]
    }

    /// Get a display name for the level.
    pub fn display_name(&self) -> &'static str {
        match self {
            ObservanceLevel::Secular => "Secular",
            ObservanceLevel::Cultural => "Cultural",
            ObservanceLevel::Observant => "Observant",
            ObservanceLevel::Strict => "Strict",
        }
    }

    /// Whether this level is devout enough to fire the religious rule.
    pub fn applies_religious_rules(&self) -> bool {
        matches!(self, ObservanceLevel::Observant | ObservanceLevel::Strict)
    }

    /// Lenient tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "secular" => Some(ObservanceLevel::Secular),
            "cultural" => Some(ObservanceLevel::Cultural),
            "observant" => Some(ObservanceLevel::Observant),
            "strict" => Some(ObservanceLevel::Strict),
            _ => None,
        }
    }
}

impl fmt::Display for ObservanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ObservanceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
            .ok_or_else(|| DomainError::parse(format!("Unknown observance level: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tradition_parse() {
        assert_eq!(
            "muslim".parse::<ReligiousTradition>().expect("parse"),
            ReligiousTradition::Muslim
        );
        assert_eq!(
            ReligiousTradition::from_tag("JEWISH"),
            Some(ReligiousTradition::Jewish)
        );
        assert!(ReligiousTradition::from_tag("jedi").is_none());
    }

    #[test]
    fn test_observance_defaults_secular() {
        assert_eq!(ObservanceLevel::default(), ObservanceLevel::Secular);
        assert!(!ObservanceLevel::Secular.applies_religious_rules());
        assert!(!ObservanceLevel::Cultural.applies_religious_rules());
        assert!(ObservanceLevel::Observant.applies_religious_rules());
        assert!(ObservanceLevel::Strict.applies_religious_rules());
    }

    #[test]
    fn test_observance_serde_tags() {
        let json = serde_json::to_string(&ObservanceLevel::Strict).expect("serialize");
        assert_eq!(json, "\"strict\"");
    }
}
