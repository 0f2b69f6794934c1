//! Family and child content preference records.
//!
//! These are the inputs to the guideline compiler. Every field is optional
//! or defaultable: an empty `FamilyPreferences` still compiles to a complete
//! `ContentGuidelines` with all defaults applied. The surrounding system
//! persists these as relational rows and hands them to the compiler as plain
//! in-memory records per story-generation request.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::language::LanguageCode;
use crate::value_objects::{
    ConflictLevel, FromTag, GenderRepresentation, ModestyLevel, MythologyScope, ObservanceLevel,
};

/// Deserialize a closed-enum field through its lenient tag lookup.
///
/// Persisted rows can carry tags written by newer app versions; an unknown
/// tag loads as `None` (no rule fired) instead of failing the whole row.
fn lenient_tag<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromTag,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.as_deref().and_then(T::parse_tag))
}

/// Family-wide content preferences.
///
/// Open-set fields (cultural background, dietary tags, religious tradition)
/// stay as strings and are resolved leniently at rule time, so a row written
/// by an older or newer app version never breaks compilation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyPreferences {
    /// Cultural-region tags the family identifies with (e.g. "east-asian").
    pub cultural_background: Vec<String>,
    /// Declared religious tradition tag (e.g. "muslim"), if any.
    pub religious_tradition: Option<String>,
    /// How strictly the tradition is observed. Defaults to secular.
    #[serde(deserialize_with = "lenient_tag")]
    pub religious_observance_level: Option<ObservanceLevel>,
    /// Dietary rule tags (e.g. "halal", "kosher").
    pub dietary_preferences: Vec<String>,
    /// Holidays the family wants celebrated in stories.
    pub specific_holidays: Vec<String>,
    /// Holidays that must not appear.
    pub excluded_holidays: Vec<String>,
    /// Whether magic and fantasy elements are allowed. Defaults to true.
    pub allow_magic_fantasy: Option<bool>,
    /// Which mythologies may appear. Defaults to all.
    #[serde(deserialize_with = "lenient_tag")]
    pub allow_mythology: Option<MythologyScope>,
    /// Whether animals may talk and act human. Defaults to true.
    pub allow_talking_animals: Option<bool>,
    /// Whether ghosts/spirits/angels may appear. Defaults to true.
    pub allow_supernatural_elements: Option<bool>,
    /// Family structure tag ("traditional", "custom", or free-form).
    pub family_structure: Option<String>,
    /// Free-form notes describing the family, used when structure is custom.
    pub custom_family_notes: Option<String>,
    /// How genders are represented in characters.
    #[serde(deserialize_with = "lenient_tag")]
    pub gender_representation: Option<GenderRepresentation>,
    /// How much conflict stories may contain.
    #[serde(deserialize_with = "lenient_tag")]
    pub conflict_level: Option<ConflictLevel>,
    /// Whether mild peril (storms, getting lost) is allowed. Defaults to true.
    pub allow_mild_peril: Option<bool>,
    /// Whether to weave educational content into stories.
    pub include_educational_content: Option<bool>,
    /// Educational focus areas (e.g. "math", "nature").
    pub educational_focus: Vec<String>,
    /// Dress-code strictness for illustrations. Defaults to standard.
    #[serde(deserialize_with = "lenient_tag")]
    pub modesty_level: Option<ModestyLevel>,
    /// Whether musical instruments and performances are allowed. Defaults to true.
    pub allow_music_themes: Option<bool>,
    /// Whether dancing is allowed. Defaults to true.
    pub allow_dance_themes: Option<bool>,
    /// Free-form themes to exclude, passed through verbatim.
    pub excluded_themes: Vec<String>,
    /// Free-form elements to exclude, passed through verbatim.
    pub excluded_elements: Vec<String>,
    /// Free-form guidance appended verbatim to the story notes.
    pub custom_guidelines: Option<String>,
}

impl FamilyPreferences {
    /// Whether stories for this family may include magic.
    ///
    /// True unless the family explicitly opted out. Convenience wrapper over
    /// the same default-true-unless-explicitly-false rule the compiler uses.
    pub fn can_include_magic(&self) -> bool {
        self.allow_magic_fantasy != Some(false)
    }

    /// Whether stories for this family may include talking animals.
    pub fn can_include_talking_animals(&self) -> bool {
        self.allow_talking_animals != Some(false)
    }

    /// The effective modesty level, defaulting to standard.
    pub fn modesty_level(&self) -> ModestyLevel {
        self.modesty_level.unwrap_or_default()
    }

    /// The effective observance level, defaulting to secular.
    pub fn observance_level(&self) -> ObservanceLevel {
        self.religious_observance_level.unwrap_or_default()
    }

    /// The declared dietary restriction tags.
    pub fn dietary_restrictions(&self) -> &[String] {
        &self.dietary_preferences
    }
}

/// Per-child overrides layered on top of the family preferences.
///
/// When `use_family_defaults` is true, the magic and conflict overrides are
/// ignored; `avoid_themes`, `favorite_themes`, and the accessibility flags
/// always apply regardless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildPreferences {
    /// When true, ignore this child's magic/conflict overrides.
    pub use_family_defaults: bool,
    /// Child-level magic override.
    pub allow_magic_fantasy: Option<bool>,
    /// Whether this child can handle scary elements.
    pub allow_scary_elements: Option<bool>,
    /// Child-level conflict override.
    #[serde(deserialize_with = "lenient_tag")]
    pub conflict_level: Option<ConflictLevel>,
    /// Themes this specific child is sensitive to. Always excluded.
    pub avoid_themes: Vec<String>,
    /// Themes this child loves. Always encouraged.
    pub favorite_themes: Vec<String>,
    /// Use simpler vocabulary and shorter sentences.
    pub needs_simple_language: Option<bool>,
    /// Use high contrast colors and clear outlines in illustrations.
    pub needs_high_contrast_images: Option<bool>,
}

/// A child's profile, as stored on the children table.
///
/// Carries the identity data the prompt layer personalizes stories with;
/// content rules live in `ChildPreferences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildProfile {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub favorite_color: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferred_language: LanguageCode,
}

impl ChildProfile {
    /// The child's age in whole years on the given date.
    ///
    /// Ages are clamped at zero for birthdates in the future (a data-entry
    /// mistake should not break story generation).
    pub fn age_on(&self, date: NaiveDate) -> u8 {
        let days = date.signed_duration_since(self.date_of_birth).num_days();
        if days <= 0 {
            return 0;
        }
        (days as f64 / 365.25).floor() as u8
    }
}
