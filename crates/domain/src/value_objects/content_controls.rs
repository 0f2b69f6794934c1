//! Content control value objects.
//!
//! Each enum here is a closed set that a family (or child) preference record
//! can set. Open-ended preference fields (cultural tags, dietary tags) are
//! persisted as strings and resolved leniently through `from_tag`, so an
//! unknown tag skips its rule instead of failing the compile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Which mythologies may appear in stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MythologyScope {
    /// Any mythology is fine.
    #[default]
    All,
    /// Only mythology from the family's own cultural background.
    OwnCulture,
    /// No mythology at all.
    None,
}

impl MythologyScope {
    pub fn all() -> &'static [MythologyScope] {
        &[
            MythologyScope::All,
            MythologyScope::OwnCulture,
            MythologyScope::None,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MythologyScope::All => "All mythologies",
            MythologyScope::OwnCulture => "Own culture only",
            MythologyScope::None => "No mythology",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "all" => Some(MythologyScope::All),
            "own-culture" => Some(MythologyScope::OwnCulture),
            "none" => Some(MythologyScope::None),
            _ => None,
        }
    }
}

impl fmt::Display for MythologyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How much interpersonal conflict a story may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictLevel {
    /// Purely positive, harmonious stories.
    None,
    /// Mild, age-appropriate conflict resolved peacefully.
    Mild,
    /// Standard children's story conflict.
    #[default]
    Moderate,
}

impl ConflictLevel {
    pub fn all() -> &'static [ConflictLevel] {
        &[
            ConflictLevel::None,
            ConflictLevel::Mild,
            ConflictLevel::Moderate,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConflictLevel::None => "No conflict",
            ConflictLevel::Mild => "Mild",
            ConflictLevel::Moderate => "Moderate",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "none" => Some(ConflictLevel::None),
            "mild" => Some(ConflictLevel::Mild),
            "moderate" => Some(ConflictLevel::Moderate),
            _ => None,
        }
    }
}

impl fmt::Display for ConflictLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ConflictLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| DomainError::parse(format!("Unknown conflict level: {}", s)))
    }
}

/// Dress-code strictness for generated illustrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModestyLevel {
    /// Age-appropriate casual modern dress.
    #[default]
    Standard,
    /// Conservative clothing, shoulders and knees covered.
    Modest,
    /// Full coverage, loose fitting, head coverings where appropriate.
    VeryModest,
}

impl ModestyLevel {
    pub fn all() -> &'static [ModestyLevel] {
        &[
            ModestyLevel::Standard,
            ModestyLevel::Modest,
            ModestyLevel::VeryModest,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModestyLevel::Standard => "Standard",
            ModestyLevel::Modest => "Modest",
            ModestyLevel::VeryModest => "Very modest",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "standard" => Some(ModestyLevel::Standard),
            "modest" => Some(ModestyLevel::Modest),
            "very-modest" => Some(ModestyLevel::VeryModest),
            _ => None,
        }
    }
}

impl fmt::Display for ModestyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How genders are represented in character depiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GenderRepresentation {
    /// Mix of roles across genders.
    #[default]
    Balanced,
    /// Traditional gender roles.
    Traditional,
    /// Gender-neutral language and roles where possible.
    Neutral,
}

impl GenderRepresentation {
    pub fn all() -> &'static [GenderRepresentation] {
        &[
            GenderRepresentation::Balanced,
            GenderRepresentation::Traditional,
            GenderRepresentation::Neutral,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GenderRepresentation::Balanced => "Balanced",
            GenderRepresentation::Traditional => "Traditional",
            GenderRepresentation::Neutral => "Neutral",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "balanced" => Some(GenderRepresentation::Balanced),
            "traditional" => Some(GenderRepresentation::Traditional),
            "neutral" => Some(GenderRepresentation::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for GenderRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A dietary rule that constrains food shown in stories and illustrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    Halal,
    Kosher,
    Vegetarian,
    Vegan,
    NoPork,
}

impl DietaryPreference {
    pub fn all() -> &'static [DietaryPreference] {
        &[
            DietaryPreference::Halal,
            DietaryPreference::Kosher,
            DietaryPreference::Vegetarian,
            DietaryPreference::Vegan,
            DietaryPreference::NoPork,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DietaryPreference::Halal => "Halal",
            DietaryPreference::Kosher => "Kosher",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::NoPork => "No pork",
        }
    }

    /// Lenient tag lookup; unrecognized dietary tags are ignored by the
    /// compiler.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "halal" => Some(DietaryPreference::Halal),
            "kosher" => Some(DietaryPreference::Kosher),
            "vegetarian" => Some(DietaryPreference::Vegetarian),
            "vegan" => Some(DietaryPreference::Vegan),
            "no-pork" => Some(DietaryPreference::NoPork),
            _ => None,
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A cultural region tag a family can identify with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CulturalRegion {
    EastAsian,
    SouthAsian,
    MiddleEastern,
    African,
    LatinAmerican,
    European,
    Indigenous,
}

impl CulturalRegion {
    pub fn all() -> &'static [CulturalRegion] {
        &[
            CulturalRegion::EastAsian,
            CulturalRegion::SouthAsian,
            CulturalRegion::MiddleEastern,
            CulturalRegion::African,
            CulturalRegion::LatinAmerican,
            CulturalRegion::European,
            CulturalRegion::Indigenous,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CulturalRegion::EastAsian => "East Asian",
            CulturalRegion::SouthAsian => "South Asian",
            CulturalRegion::MiddleEastern => "Middle Eastern",
            CulturalRegion::African => "African",
            CulturalRegion::LatinAmerican => "Latin American",
            CulturalRegion::European => "European",
            CulturalRegion::Indigenous => "Indigenous",
        }
    }

    /// Lenient tag lookup; unknown cultural tags fire no rule.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "east-asian" => Some(CulturalRegion::EastAsian),
            "south-asian" => Some(CulturalRegion::SouthAsian),
            "middle-eastern" => Some(CulturalRegion::MiddleEastern),
            "african" => Some(CulturalRegion::African),
            "latin-american" => Some(CulturalRegion::LatinAmerican),
            "european" => Some(CulturalRegion::European),
            "indigenous" => Some(CulturalRegion::Indigenous),
            _ => None,
        }
    }
}

impl fmt::Display for CulturalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
