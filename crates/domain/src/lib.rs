//! StoryVerse domain crate.
//!
//! Pure domain types and logic for the StoryVerse personalized children's
//! book platform: preference value objects, the content-guidelines compiler,
//! and supporting ID/language types. No I/O, no async, no external services.

pub mod error;
pub mod guidelines;
pub mod ids;
pub mod language;
pub mod value_objects;

pub use error::DomainError;
pub use guidelines::{
    can_include_magic, can_include_talking_animals, generate_content_guidelines, ContentGuidelines,
};
pub use ids::{BookId, ChildId, FamilyId};
pub use language::LanguageCode;
pub use value_objects::{
    ChildPreferences, ChildProfile, ConflictLevel, CulturalRegion, DietaryPreference,
    FamilyPreferences, GenderRepresentation, ModestyLevel, MythologyScope, ObservanceLevel,
    ReligiousTradition,
};
