//! The content-guidelines compiler.
//!
//! Maps a family's declared preferences (plus optional per-child overrides)
//! into the natural-language guidance blocks the story and illustration
//! models consume, along with the excluded/included element sets used for
//! filtering.
//!
//! Design contract: pure, deterministic, never fails. Unknown tags and
//! unsupported (tradition, level) pairs silently fire no rule; every output
//! field is always populated so downstream prompt assembly needs no
//! null-handling.

use serde::{Deserialize, Serialize};

use crate::guidelines::tables::{
    cultural_elements, dietary_rule, dress_code, religious_rule, CONFLICT_EXCLUSIONS,
    DANCE_EXCLUSIONS, MAGIC_EXCLUSIONS, MUSIC_EXCLUSIONS, MYTHOLOGY_EXCLUSIONS, PERIL_EXCLUSIONS,
    SUPERNATURAL_EXCLUSIONS, TALKING_ANIMAL_EXCLUSIONS, VISUAL_FILTER_TERMS,
};
use crate::language::LanguageCode;
use crate::value_objects::{
    ChildPreferences, ConflictLevel, CulturalRegion, DietaryPreference, FamilyPreferences,
    GenderRepresentation, MythologyScope, ObservanceLevel, ReligiousTradition,
};

/// Compiled content guidance for one story-generation request.
///
/// A derived view, recomputed per request from the current preferences;
/// never persisted as its own entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentGuidelines {
    /// Multi-section story-writing instructions for the text model.
    pub story_guidelines: String,
    /// Dress-code sentence plus visually relevant exclusions for the
    /// illustration model.
    pub image_guidelines: String,
    /// Deduplicated union of every exclusion rule triggered.
    pub excluded_elements: Vec<String>,
    /// Deduplicated union of every inclusion rule triggered.
    pub included_elements: Vec<String>,
    /// One fixed tone sentence selected by observance level.
    pub tone_guidelines: String,
}

impl ContentGuidelines {
    /// The subset of excluded elements relevant to visual depiction.
    ///
    /// An exclusion is visually relevant when it contains any of the fixed
    /// keyword list (case-insensitive). The prompt assembler repeats these
    /// in the illustration prompt.
    pub fn visually_relevant_exclusions(&self) -> Vec<&str> {
        self.excluded_elements
            .iter()
            .filter(|e| is_visually_relevant(e))
            .map(String::as_str)
            .collect()
    }
}

fn is_visually_relevant(element: &str) -> bool {
    let lowered = element.to_lowercase();
    VISUAL_FILTER_TERMS.iter().any(|term| lowered.contains(term))
}

/// Whether stories for this family may include magic.
pub fn can_include_magic(prefs: &FamilyPreferences) -> bool {
    prefs.can_include_magic()
}

/// Whether stories for this family may include talking animals.
pub fn can_include_talking_animals(prefs: &FamilyPreferences) -> bool {
    prefs.can_include_talking_animals()
}

/// Compile family and child preferences into content guidelines.
///
/// Rules apply in a fixed order and never short-circuit each other. Child
/// magic/conflict overrides take precedence only when `use_family_defaults`
/// is false; the child's avoid/favorite themes and accessibility flags layer
/// on regardless.
///
/// `child_age` and `language` are threaded through so callers can treat this
/// as the single per-request derivation entry point; they drive the prompt
/// layer, not the guideline content.
pub fn generate_content_guidelines(
    family: &FamilyPreferences,
    child: Option<&ChildPreferences>,
    _child_age: u8,
    _language: LanguageCode,
) -> ContentGuidelines {
    let mut excluded: Vec<String> = family.excluded_elements.clone();
    let mut included: Vec<String> = Vec::new();
    let mut story_notes: Vec<String> = Vec::new();
    let mut image_notes: Vec<String> = Vec::new();

    // Child magic/conflict overrides only apply when the child record opts
    // out of the family defaults.
    let child_overrides = child.filter(|c| !c.use_family_defaults);

    // Religious rule
    if let Some(tradition) = family
        .religious_tradition
        .as_deref()
        .and_then(ReligiousTradition::from_tag)
        .filter(|t| *t != ReligiousTradition::None)
    {
        let level = family.observance_level();
        if level.applies_religious_rules() {
            if let Some(rule) = religious_rule(tradition, level) {
                included.extend(rule.include.iter().map(|s| s.to_string()));
                excluded.extend(rule.exclude.iter().map(|s| s.to_string()));
                story_notes.push(rule.notes.to_string());
            }
        }
    }

    // Cultural background
    for tag in &family.cultural_background {
        if let Some(region) = CulturalRegion::from_tag(tag) {
            let elements = cultural_elements(region);
            included.extend(elements.include.iter().map(|s| s.to_string()));
            story_notes.push(format!(
                "Cultural considerations: {}",
                elements.considerations.join(", ")
            ));
        }
    }

    // Magic and fantasy
    let allow_magic = child_overrides
        .and_then(|c| c.allow_magic_fantasy)
        .or(family.allow_magic_fantasy)
        .unwrap_or(true);
    if !allow_magic {
        excluded.extend(MAGIC_EXCLUSIONS.iter().map(|s| s.to_string()));
        story_notes.push("No magical or fantasy elements - keep stories grounded in reality".to_string());
    }

    // Mythology
    match family.allow_mythology.unwrap_or_default() {
        MythologyScope::None => {
            excluded.extend(MYTHOLOGY_EXCLUSIONS.iter().map(|s| s.to_string()));
        }
        MythologyScope::OwnCulture => {
            story_notes.push(
                "Only include mythology from the family's own cultural background".to_string(),
            );
        }
        MythologyScope::All => {}
    }

    // Talking animals
    if family.allow_talking_animals == Some(false) {
        excluded.extend(TALKING_ANIMAL_EXCLUSIONS.iter().map(|s| s.to_string()));
        story_notes.push("Animals should behave realistically, not talk or act human".to_string());
    }

    // Supernatural elements
    if family.allow_supernatural_elements == Some(false) {
        excluded.extend(SUPERNATURAL_EXCLUSIONS.iter().map(|s| s.to_string()));
    }

    // Dietary preferences (for food shown in stories)
    for tag in &family.dietary_preferences {
        if let Some(diet) = DietaryPreference::from_tag(tag) {
            let (exclusions, note) = dietary_rule(diet);
            excluded.extend(exclusions.iter().map(|s| s.to_string()));
            if let Some(note) = note {
                story_notes.push(note.to_string());
            }
        }
    }

    // Holiday preferences
    excluded.extend(
        family
            .excluded_holidays
            .iter()
            .map(|h| format!("{} themes", h)),
    );
    included.extend(
        family
            .specific_holidays
            .iter()
            .map(|h| format!("{} celebrations", h)),
    );

    // Family structure
    match family.family_structure.as_deref() {
        Some("traditional") => {
            story_notes.push("Show traditional two-parent family structures".to_string());
        }
        Some("custom") => {
            if let Some(notes) = &family.custom_family_notes {
                story_notes.push(format!("Family representation: {}", notes));
            }
        }
        _ => {}
    }

    // Gender representation
    match family.gender_representation {
        Some(GenderRepresentation::Traditional) => {
            story_notes.push("Traditional gender roles in character depiction".to_string());
        }
        Some(GenderRepresentation::Neutral) => {
            story_notes.push("Gender-neutral language and roles where possible".to_string());
        }
        _ => {}
    }

    // Conflict level
    let conflict = child_overrides
        .and_then(|c| c.conflict_level)
        .or(family.conflict_level);
    match conflict {
        Some(ConflictLevel::None) => {
            excluded.extend(CONFLICT_EXCLUSIONS.iter().map(|s| s.to_string()));
            story_notes.push("No conflict - purely positive, harmonious stories".to_string());
        }
        Some(ConflictLevel::Mild) => {
            story_notes.push("Only mild, age-appropriate conflict resolved peacefully".to_string());
        }
        _ => {}
    }

    // Peril
    if family.allow_mild_peril == Some(false) {
        excluded.extend(PERIL_EXCLUSIONS.iter().map(|s| s.to_string()));
    }

    // Music and dance
    if family.allow_music_themes == Some(false) {
        excluded.extend(MUSIC_EXCLUSIONS.iter().map(|s| s.to_string()));
    }
    if family.allow_dance_themes == Some(false) {
        excluded.extend(DANCE_EXCLUSIONS.iter().map(|s| s.to_string()));
    }

    // Modesty for images - always fires, independent of the rules above
    image_notes.push(format!("Dress code: {}", dress_code(family.modesty_level())));

    // Educational focus
    if family.include_educational_content == Some(true) {
        included.extend(
            family
                .educational_focus
                .iter()
                .map(|f| format!("{} learning elements", f)),
        );
    }

    // Child-specific overlay - always applies, even with family defaults
    if let Some(child) = child {
        if !child.avoid_themes.is_empty() {
            excluded.extend(child.avoid_themes.iter().cloned());
            story_notes.push(format!(
                "Child-specific sensitivities: avoid {}",
                child.avoid_themes.join(", ")
            ));
        }
        included.extend(child.favorite_themes.iter().cloned());

        // Accessibility
        if child.needs_simple_language == Some(true) {
            story_notes
                .push("Use simpler vocabulary and shorter sentences for accessibility".to_string());
        }
        if child.needs_high_contrast_images == Some(true) {
            image_notes
                .push("Use high contrast colors, clear outlines, avoid busy backgrounds".to_string());
        }
    }

    // Custom exclusions
    excluded.extend(family.excluded_themes.iter().cloned());

    // Custom guidelines
    if let Some(custom) = &family.custom_guidelines {
        story_notes.push(format!("Custom family guidelines: {}", custom));
    }

    let excluded = dedupe_preserving_order(excluded);
    let included = dedupe_preserving_order(included);

    let story_guidelines = format!(
        "FAMILY CONTENT GUIDELINES:\n{}\n\nELEMENTS TO INCLUDE:\n{}\n\nELEMENTS TO EXCLUDE:\n{}",
        bullets_or(&story_notes, "Standard content guidelines apply"),
        bullets_or(&included, "No specific requirements"),
        bullets_or(&excluded, "Standard exclusions only"),
    );

    let visual_exclusions: Vec<String> = excluded
        .iter()
        .filter(|e| is_visually_relevant(e))
        .cloned()
        .collect();
    let image_guidelines = format!(
        "IMAGE CONTENT GUIDELINES:\n{}\n\nMUST NOT INCLUDE:\n{}",
        bullets_or(&image_notes, "Standard safety guidelines"),
        bullets_or(&visual_exclusions, "Standard safety guidelines"),
    );

    let tone_guidelines = tone_for(family.observance_level()).to_string();

    ContentGuidelines {
        story_guidelines,
        image_guidelines,
        excluded_elements: excluded,
        included_elements: included,
        tone_guidelines,
    }
}

fn tone_for(level: ObservanceLevel) -> &'static str {
    match level {
        ObservanceLevel::Strict => "Reverent, respectful, values-focused tone",
        ObservanceLevel::Observant => "Warm, values-aware, culturally respectful tone",
        _ => "Warm, inclusive, universally appropriate tone",
    }
}

/// Render items as a `- item` bullet list, or a single placeholder bullet
/// when empty. The placeholder keeps every output section non-empty.
fn bullets_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        return format!("- {}", placeholder);
    }
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deduplicate, keeping the first occurrence of each element.
fn dedupe_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ModestyLevel;

    fn compile(
        family: &FamilyPreferences,
        child: Option<&ChildPreferences>,
    ) -> ContentGuidelines {
        generate_content_guidelines(family, child, 5, LanguageCode::En)
    }

    #[test]
    fn test_empty_preferences_compile_to_complete_guidelines() {
        let guidelines = compile(&FamilyPreferences::default(), None);

        assert!(!guidelines.story_guidelines.is_empty());
        assert!(!guidelines.image_guidelines.is_empty());
        assert!(!guidelines.tone_guidelines.is_empty());
        assert!(guidelines.excluded_elements.is_empty());
        assert!(guidelines.included_elements.is_empty());

        // Placeholders keep every section populated.
        assert!(guidelines
            .story_guidelines
            .contains("- Standard content guidelines apply"));
        assert!(guidelines
            .story_guidelines
            .contains("- No specific requirements"));
        assert!(guidelines
            .story_guidelines
            .contains("- Standard exclusions only"));
        assert!(guidelines
            .image_guidelines
            .contains("- Standard safety guidelines"));
    }

    #[test]
    fn test_determinism() {
        let family = FamilyPreferences {
            cultural_background: vec!["east-asian".to_string(), "european".to_string()],
            religious_tradition: Some("buddhist".to_string()),
            religious_observance_level: Some(ObservanceLevel::Observant),
            dietary_preferences: vec!["vegetarian".to_string()],
            allow_magic_fantasy: Some(false),
            ..Default::default()
        };
        let child = ChildPreferences {
            avoid_themes: vec!["spiders".to_string()],
            favorite_themes: vec!["trains".to_string()],
            ..Default::default()
        };

        let first = compile(&family, Some(&child));
        let second = compile(&family, Some(&child));
        assert_eq!(first, second);
    }

    #[test]
    fn test_idempotent_unioning() {
        // "magic" arrives via both the free-form excluded themes and the
        // magic rule; it must appear exactly once.
        let family = FamilyPreferences {
            excluded_themes: vec!["magic".to_string()],
            allow_magic_fantasy: Some(false),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        let magic_count = guidelines
            .excluded_elements
            .iter()
            .filter(|e| e.as_str() == "magic")
            .count();
        assert_eq!(magic_count, 1);
    }

    #[test]
    fn test_child_override_precedence() {
        let family = FamilyPreferences {
            conflict_level: Some(ConflictLevel::Moderate),
            ..Default::default()
        };
        let child = ChildPreferences {
            use_family_defaults: false,
            conflict_level: Some(ConflictLevel::None),
            ..Default::default()
        };
        let guidelines = compile(&family, Some(&child));
        for term in ["conflict", "villains", "antagonists", "fighting", "arguments"] {
            assert!(
                guidelines.excluded_elements.iter().any(|e| e == term),
                "expected {term} to be excluded"
            );
        }
    }

    #[test]
    fn test_family_defaults_ignore_child_override() {
        let family = FamilyPreferences {
            conflict_level: Some(ConflictLevel::Moderate),
            ..Default::default()
        };
        let child = ChildPreferences {
            use_family_defaults: true,
            conflict_level: Some(ConflictLevel::None),
            ..Default::default()
        };
        let guidelines = compile(&family, Some(&child));
        assert!(!guidelines.excluded_elements.iter().any(|e| e == "conflict"));
        assert!(!guidelines.excluded_elements.iter().any(|e| e == "villains"));
    }

    #[test]
    fn test_child_magic_override_falls_back_to_family() {
        // Child opts out of family defaults but sets no magic value; the
        // family's opt-out still applies.
        let family = FamilyPreferences {
            allow_magic_fantasy: Some(false),
            ..Default::default()
        };
        let child = ChildPreferences {
            use_family_defaults: false,
            ..Default::default()
        };
        let guidelines = compile(&family, Some(&child));
        assert!(guidelines.excluded_elements.iter().any(|e| e == "magic"));
        assert!(guidelines.excluded_elements.iter().any(|e| e == "sorcery"));
    }

    #[test]
    fn test_halal_dietary_mapping() {
        let family = FamilyPreferences {
            dietary_preferences: vec!["halal".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        for term in ["pork", "pig characters", "bacon", "ham", "alcohol"] {
            assert!(
                guidelines.excluded_elements.iter().any(|e| e == term),
                "expected {term} to be excluded"
            );
        }
    }

    #[test]
    fn test_unknown_dietary_tag_is_ignored() {
        let family = FamilyPreferences {
            dietary_preferences: vec!["paleo".to_string(), "halal".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines.excluded_elements.iter().any(|e| e == "pork"));
    }

    #[test]
    fn test_strict_muslim_guidelines() {
        let family = FamilyPreferences {
            religious_tradition: Some("muslim".to_string()),
            religious_observance_level: Some(ObservanceLevel::Strict),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        for term in ["magic", "sorcery", "pigs", "alcohol", "music instruments", "dancing"] {
            assert!(
                guidelines.excluded_elements.iter().any(|e| e == term),
                "expected {term} to be excluded"
            );
        }
        for term in ["Islamic teachings", "mosque", "prayer"] {
            assert!(
                guidelines.included_elements.iter().any(|e| e == term),
                "expected {term} to be included"
            );
        }
    }

    #[test]
    fn test_unknown_tradition_fires_no_rule() {
        let family = FamilyPreferences {
            religious_tradition: Some("zoroastrian".to_string()),
            religious_observance_level: Some(ObservanceLevel::Strict),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines.excluded_elements.is_empty());
        assert!(guidelines.included_elements.is_empty());
    }

    #[test]
    fn test_declared_none_tradition_fires_no_rule() {
        let family = FamilyPreferences {
            religious_tradition: Some("none".to_string()),
            religious_observance_level: Some(ObservanceLevel::Strict),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines.included_elements.is_empty());
    }

    #[test]
    fn test_modesty_sentence_selection() {
        let family = FamilyPreferences {
            modesty_level: Some(ModestyLevel::VeryModest),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines.image_guidelines.contains(
            "Very conservative dress, loose fitting clothes, full coverage, head coverings where culturally appropriate"
        ));

        let default_guidelines = compile(&FamilyPreferences::default(), None);
        assert!(default_guidelines
            .image_guidelines
            .contains("Age-appropriate clothing, casual modern dress acceptable"));
    }

    #[test]
    fn test_tone_selection() {
        let strict = FamilyPreferences {
            religious_observance_level: Some(ObservanceLevel::Strict),
            ..Default::default()
        };
        assert_eq!(
            compile(&strict, None).tone_guidelines,
            "Reverent, respectful, values-focused tone"
        );

        let observant = FamilyPreferences {
            religious_observance_level: Some(ObservanceLevel::Observant),
            ..Default::default()
        };
        assert_eq!(
            compile(&observant, None).tone_guidelines,
            "Warm, values-aware, culturally respectful tone"
        );

        assert_eq!(
            compile(&FamilyPreferences::default(), None).tone_guidelines,
            "Warm, inclusive, universally appropriate tone"
        );
    }

    #[test]
    fn test_child_overlay_always_applies() {
        let child = ChildPreferences {
            use_family_defaults: true,
            avoid_themes: vec!["spiders".to_string()],
            favorite_themes: vec!["space travel".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&FamilyPreferences::default(), Some(&child));
        assert!(guidelines.excluded_elements.iter().any(|e| e == "spiders"));
        assert!(guidelines
            .included_elements
            .iter()
            .any(|e| e == "space travel"));
        assert!(guidelines
            .story_guidelines
            .contains("Child-specific sensitivities: avoid spiders"));
    }

    #[test]
    fn test_cultural_rule() {
        let family = FamilyPreferences {
            cultural_background: vec!["east-asian".to_string(), "atlantean".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines
            .included_elements
            .iter()
            .any(|e| e == "respect for elders"));
        assert!(guidelines
            .story_guidelines
            .contains("Cultural considerations: hierarchical family relationships"));
    }

    #[test]
    fn test_mythology_rule() {
        let none = FamilyPreferences {
            allow_mythology: Some(MythologyScope::None),
            ..Default::default()
        };
        let guidelines = compile(&none, None);
        assert!(guidelines.excluded_elements.iter().any(|e| e == "mythology"));
        assert!(guidelines.excluded_elements.iter().any(|e| e == "Greek gods"));

        let own = FamilyPreferences {
            allow_mythology: Some(MythologyScope::OwnCulture),
            ..Default::default()
        };
        let guidelines = compile(&own, None);
        assert!(guidelines.excluded_elements.is_empty());
        assert!(guidelines
            .story_guidelines
            .contains("Only include mythology from the family's own cultural background"));
    }

    #[test]
    fn test_holiday_rule() {
        let family = FamilyPreferences {
            specific_holidays: vec!["Eid".to_string()],
            excluded_holidays: vec!["Halloween".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines
            .excluded_elements
            .iter()
            .any(|e| e == "Halloween themes"));
        assert!(guidelines
            .included_elements
            .iter()
            .any(|e| e == "Eid celebrations"));
    }

    #[test]
    fn test_peril_music_dance_rules() {
        let family = FamilyPreferences {
            allow_mild_peril: Some(false),
            allow_music_themes: Some(false),
            allow_dance_themes: Some(false),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        for term in ["danger", "storms", "musical instruments", "concerts", "dancing", "ballet"] {
            assert!(
                guidelines.excluded_elements.iter().any(|e| e == term),
                "expected {term} to be excluded"
            );
        }
    }

    #[test]
    fn test_talking_animals_and_supernatural_rules() {
        let family = FamilyPreferences {
            allow_talking_animals: Some(false),
            allow_supernatural_elements: Some(false),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        for term in [
            "talking animals",
            "anthropomorphic animals",
            "ghosts",
            "spirits",
            "supernatural",
            "paranormal",
            "angels",
            "demons",
        ] {
            assert!(
                guidelines.excluded_elements.iter().any(|e| e == term),
                "expected {term} to be excluded"
            );
        }
        assert!(guidelines
            .story_guidelines
            .contains("Animals should behave realistically, not talk or act human"));
    }

    #[test]
    fn test_educational_focus_rule() {
        let family = FamilyPreferences {
            include_educational_content: Some(true),
            educational_focus: vec!["math".to_string(), "nature".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines
            .included_elements
            .iter()
            .any(|e| e == "math learning elements"));
        assert!(guidelines
            .included_elements
            .iter()
            .any(|e| e == "nature learning elements"));

        // Focus list without the flag contributes nothing.
        let family = FamilyPreferences {
            educational_focus: vec!["math".to_string()],
            ..Default::default()
        };
        assert!(compile(&family, None).included_elements.is_empty());
    }

    #[test]
    fn test_family_structure_and_gender_notes() {
        let family = FamilyPreferences {
            family_structure: Some("custom".to_string()),
            custom_family_notes: Some("Two moms and a grandparent at home".to_string()),
            gender_representation: Some(GenderRepresentation::Neutral),
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines
            .story_guidelines
            .contains("Family representation: Two moms and a grandparent at home"));
        assert!(guidelines
            .story_guidelines
            .contains("Gender-neutral language and roles where possible"));
    }

    #[test]
    fn test_image_guidelines_filter_visually_relevant_terms() {
        let family = FamilyPreferences {
            dietary_preferences: vec!["halal".to_string()],
            allow_dance_themes: Some(false),
            conflict_level: Some(ConflictLevel::None),
            ..Default::default()
        };
        let guidelines = compile(&family, None);

        // Food and dance exclusions are visually relevant; conflict terms
        // are narrative-only and must not leak into image guidance.
        assert!(guidelines.image_guidelines.contains("- pork"));
        assert!(guidelines.image_guidelines.contains("- dancing"));
        assert!(!guidelines.image_guidelines.contains("- villains"));

        let visual = guidelines.visually_relevant_exclusions();
        assert!(visual.contains(&"alcohol"));
        assert!(!visual.contains(&"conflict"));
    }

    #[test]
    fn test_accessibility_notes() {
        let child = ChildPreferences {
            use_family_defaults: true,
            needs_simple_language: Some(true),
            needs_high_contrast_images: Some(true),
            ..Default::default()
        };
        let guidelines = compile(&FamilyPreferences::default(), Some(&child));
        assert!(guidelines
            .story_guidelines
            .contains("Use simpler vocabulary and shorter sentences for accessibility"));
        assert!(guidelines
            .image_guidelines
            .contains("Use high contrast colors, clear outlines, avoid busy backgrounds"));
    }

    #[test]
    fn test_custom_guidelines_passthrough() {
        let family = FamilyPreferences {
            custom_guidelines: Some("Always end with a bedtime wind-down".to_string()),
            excluded_themes: vec!["clowns".to_string()],
            excluded_elements: vec!["balloons".to_string()],
            ..Default::default()
        };
        let guidelines = compile(&family, None);
        assert!(guidelines
            .story_guidelines
            .contains("Custom family guidelines: Always end with a bedtime wind-down"));
        assert!(guidelines.excluded_elements.iter().any(|e| e == "clowns"));
        assert!(guidelines.excluded_elements.iter().any(|e| e == "balloons"));
        // Free-form family exclusions come first in the output ordering.
        assert_eq!(guidelines.excluded_elements[0], "balloons");
    }

    #[test]
    fn test_helper_predicates() {
        let prefs = FamilyPreferences::default();
        assert!(can_include_magic(&prefs));
        assert!(can_include_talking_animals(&prefs));

        let restricted = FamilyPreferences {
            allow_magic_fantasy: Some(false),
            allow_talking_animals: Some(false),
            ..Default::default()
        };
        assert!(!can_include_magic(&restricted));
        assert!(!can_include_talking_animals(&restricted));
    }
}
