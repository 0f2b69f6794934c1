//! Value objects - immutable domain values with no identity.

mod content_controls;
mod observance;
mod preferences;

pub use content_controls::{
    ConflictLevel, CulturalRegion, DietaryPreference, GenderRepresentation, ModestyLevel,
    MythologyScope,
};
pub use observance::{ObservanceLevel, ReligiousTradition};
pub use preferences::{ChildPreferences, ChildProfile, FamilyPreferences};

/// Tag lookup used by the lenient deserializers in `preferences`, so a
/// persisted row carrying an unknown tag degrades to "no rule fired"
/// instead of failing to load.
pub(crate) trait FromTag: Sized {
    fn parse_tag(tag: &str) -> Option<Self>;
}

macro_rules! impl_from_tag {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromTag for $ty {
                fn parse_tag(tag: &str) -> Option<Self> {
                    <$ty>::from_tag(tag)
                }
            }
        )*
    };
}

impl_from_tag!(
    ConflictLevel,
    GenderRepresentation,
    ModestyLevel,
    MythologyScope,
    ObservanceLevel,
);
