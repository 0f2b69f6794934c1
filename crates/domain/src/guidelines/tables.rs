//! Fixed lookup tables for the guideline compiler.
//!
//! The compiler is dominated by data, not control flow: per-tradition
//! religious rules, per-region cultural elements, per-diet exclusion lists,
//! and the fixed term sets each boolean preference toggles. Everything here
//! is `'static` so compilation allocates only the assembled output.

use crate::value_objects::{
    CulturalRegion, DietaryPreference, ModestyLevel, ObservanceLevel, ReligiousTradition,
};

/// Elements a religious rule adds and removes, plus a story note.
#[derive(Debug, Clone, Copy)]
pub struct ReligiousRule {
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
    pub notes: &'static str,
}

/// Look up the religious rule for a (tradition, level) pair.
///
/// Only observant and strict levels carry rules; secular and cultural
/// families (and traditions we have no table for) fire nothing.
pub fn religious_rule(
    tradition: ReligiousTradition,
    level: ObservanceLevel,
) -> Option<&'static ReligiousRule> {
    use ObservanceLevel::{Observant, Strict};
    use ReligiousTradition as T;

    let rule = match (tradition, level) {
        (T::Christian, Observant) => &ReligiousRule {
            include: &[
                "faith themes",
                "prayer",
                "kindness",
                "forgiveness",
                "helping others",
                "Christmas",
                "Easter",
            ],
            exclude: &["occult practices", "dark magic"],
            notes: "May include gentle faith-based themes and Christian holidays",
        },
        (T::Christian, Strict) => &ReligiousRule {
            include: &[
                "Biblical values",
                "faith",
                "prayer",
                "church community",
                "Christian holidays",
            ],
            exclude: &[
                "magic",
                "witches",
                "wizards",
                "sorcery",
                "Halloween",
                "occult",
                "eastern mysticism",
                "evolution themes",
            ],
            notes: "Focus on faith-based values, avoid all magical/supernatural elements outside Biblical context",
        },
        (T::Muslim, Observant) => &ReligiousRule {
            include: &[
                "Islamic values",
                "kindness",
                "charity",
                "family respect",
                "Eid celebrations",
                "Ramadan themes",
            ],
            exclude: &["pork/pig characters", "alcohol references", "immodest dress"],
            notes: "Include Islamic celebrations, modest dress, halal-friendly content",
        },
        (T::Muslim, Strict) => &ReligiousRule {
            include: &[
                "Islamic teachings",
                "Prophet stories (respectfully)",
                "mosque",
                "prayer",
                "Quran values",
                "Eid",
                "Ramadan",
            ],
            exclude: &[
                "magic",
                "sorcery",
                "pigs",
                "dogs as pets inside homes",
                "alcohol",
                "music instruments",
                "dancing",
                "immodest clothing",
                "cross-gender friendships",
            ],
            notes: "Strictly Islamic content, modest dress, gender-appropriate interactions, no music/dance, no magical elements",
        },
        (T::Jewish, Observant) => &ReligiousRule {
            include: &[
                "Jewish values",
                "Shabbat",
                "Jewish holidays",
                "tikun olam",
                "family traditions",
                "Hebrew elements",
            ],
            exclude: &["non-kosher food prominently featured", "Christmas as religious"],
            notes: "Include Jewish celebrations and values, kosher-friendly content",
        },
        (T::Jewish, Strict) => &ReligiousRule {
            include: &[
                "Torah values",
                "Shabbat observance",
                "Jewish holidays",
                "mitzvot",
                "synagogue",
                "kosher lifestyle",
            ],
            exclude: &[
                "non-kosher animals as food",
                "Shabbat violations",
                "mixing meat/dairy",
                "immodest dress",
            ],
            notes: "Orthodox-friendly content, strict Shabbat respect, tzniut (modesty) standards",
        },
        (T::Hindu, Observant) => &ReligiousRule {
            include: &[
                "Hindu values",
                "Diwali",
                "Holi",
                "dharma",
                "karma",
                "respect for elders",
                "vegetarian-friendly",
            ],
            exclude: &["beef/cow as food", "disrespect to deities"],
            notes: "Include Hindu festivals and values, vegetarian-friendly, respect for sacred animals",
        },
        (T::Hindu, Strict) => &ReligiousRule {
            include: &[
                "Hindu deities (respectfully)",
                "Sanskrit elements",
                "puja",
                "temples",
                "vegetarian lifestyle",
                "ahimsa",
            ],
            exclude: &[
                "beef",
                "meat prominently featured",
                "leather items",
                "onion/garlic for some",
            ],
            notes: "Strictly vegetarian content, respectful deity representation, traditional values",
        },
        (T::Buddhist, Observant) => &ReligiousRule {
            include: &[
                "Buddhist values",
                "compassion",
                "mindfulness",
                "karma",
                "nature respect",
                "meditation",
            ],
            exclude: &["violence glorification", "cruelty to animals"],
            notes: "Peaceful themes, respect for all living beings, mindfulness elements",
        },
        (T::Buddhist, Strict) => &ReligiousRule {
            include: &[
                "Buddhist teachings",
                "temples",
                "monks",
                "meditation",
                "Vesak",
                "non-violence",
                "vegetarian",
            ],
            exclude: &["killing/hunting", "meat", "alcohol", "violence of any kind"],
            notes: "Strictly peaceful, vegetarian, no violence even in conflict resolution",
        },
        (T::Sikh, Observant) => &ReligiousRule {
            include: &[
                "Sikh values",
                "seva (service)",
                "equality",
                "langar (community meals)",
                "Gurdwara",
                "Vaisakhi",
            ],
            exclude: &["tobacco", "alcohol", "disrespect to turbans/hair"],
            notes: "Include Sikh traditions, equality themes, community service",
        },
        (T::Sikh, Strict) => &ReligiousRule {
            include: &[
                "Guru teachings",
                "five Ks respect",
                "Gurdwara",
                "equality",
                "vegetarian for many",
                "Punjabi elements",
            ],
            exclude: &[
                "tobacco",
                "alcohol",
                "halal/kosher meat",
                "cutting hair themes",
                "caste references",
            ],
            notes: "Strict adherence to Sikh principles, vegetarian-friendly, equality emphasized",
        },
        _ => return None,
    };
    Some(rule)
}

/// Elements a cultural background contributes, plus narrative considerations.
#[derive(Debug, Clone, Copy)]
pub struct CulturalElements {
    pub include: &'static [&'static str],
    pub considerations: &'static [&'static str],
}

/// Look up the cultural elements for a region tag.
pub fn cultural_elements(region: CulturalRegion) -> &'static CulturalElements {
    match region {
        CulturalRegion::EastAsian => &CulturalElements {
            include: &[
                "respect for elders",
                "education value",
                "family harmony",
                "tea culture",
                "lunar new year",
            ],
            considerations: &[
                "hierarchical family relationships",
                "collective over individual",
                "indirect communication styles",
            ],
        },
        CulturalRegion::SouthAsian => &CulturalElements {
            include: &[
                "extended family",
                "festivals of color and light",
                "hospitality",
                "diverse traditions",
            ],
            considerations: &[
                "family honor",
                "respect for elders",
                "arranged relationships neutral",
                "regional diversity",
            ],
        },
        CulturalRegion::MiddleEastern => &CulturalElements {
            include: &[
                "hospitality",
                "family bonds",
                "desert and oasis imagery",
                "geometric art",
            ],
            considerations: &[
                "gender interactions",
                "modesty norms",
                "religious diversity in region",
            ],
        },
        CulturalRegion::African => &CulturalElements {
            include: &[
                "community (ubuntu)",
                "oral traditions",
                "extended family",
                "nature connection",
                "diverse cultures",
            ],
            considerations: &[
                "avoid monolithic portrayal",
                "celebrate diversity",
                "avoid stereotypes",
            ],
        },
        CulturalRegion::LatinAmerican => &CulturalElements {
            include: &[
                "extended family",
                "celebrations",
                "vibrant culture",
                "Day of the Dead (respectfully)",
                "diverse heritage",
            ],
            considerations: &[
                "religious traditions vary",
                "indigenous heritage respect",
                "regional diversity",
            ],
        },
        CulturalRegion::European => &CulturalElements {
            include: &[
                "diverse traditions",
                "fairy tale heritage",
                "seasonal celebrations",
            ],
            considerations: &[
                "religious diversity",
                "avoid stereotypes",
                "regional differences",
            ],
        },
        CulturalRegion::Indigenous => &CulturalElements {
            include: &[
                "nature connection",
                "oral traditions",
                "community elders",
                "respect for land",
            ],
            considerations: &[
                "avoid appropriation",
                "authentic representation",
                "tribal diversity",
                "consult authentic sources",
            ],
        },
    }
}

/// Exclusion list and story note for a dietary preference.
pub fn dietary_rule(diet: DietaryPreference) -> (&'static [&'static str], Option<&'static str>) {
    match diet {
        DietaryPreference::Halal => (
            &["pork", "pig characters", "bacon", "ham", "alcohol"],
            Some("Food shown should be halal-appropriate"),
        ),
        DietaryPreference::Kosher => (
            &["pork", "shellfish", "mixing meat and dairy"],
            Some("Food shown should be kosher-appropriate"),
        ),
        DietaryPreference::Vegetarian => (
            &["meat dishes prominently featured", "hunting for food"],
            Some("Prefer vegetarian food in meal scenes"),
        ),
        DietaryPreference::Vegan => (
            &["meat", "dairy", "eggs prominently featured"],
            Some("Prefer plant-based food in scenes"),
        ),
        DietaryPreference::NoPork => (
            &["pork", "pig characters as food", "bacon", "ham"],
            None,
        ),
    }
}

/// Dress-code sentence for image generation, by modesty level.
pub fn dress_code(level: ModestyLevel) -> &'static str {
    match level {
        ModestyLevel::Standard => "Age-appropriate clothing, casual modern dress acceptable",
        ModestyLevel::Modest => {
            "Conservative clothing, shoulders and knees covered, no tight/revealing clothing"
        }
        ModestyLevel::VeryModest => {
            "Very conservative dress, loose fitting clothes, full coverage, head coverings where culturally appropriate"
        }
    }
}

/// Terms excluded when magic/fantasy is disallowed.
pub const MAGIC_EXCLUSIONS: &[&str] = &[
    "magic",
    "spells",
    "witches",
    "wizards",
    "sorcery",
    "enchantments",
    "magical powers",
];

/// Terms excluded when mythology is disallowed entirely.
pub const MYTHOLOGY_EXCLUSIONS: &[&str] =
    &["mythology", "Greek gods", "Norse gods", "mythical creatures"];

/// Terms excluded when talking animals are disallowed.
pub const TALKING_ANIMAL_EXCLUSIONS: &[&str] = &["talking animals", "anthropomorphic animals"];

/// Terms excluded when supernatural elements are disallowed.
pub const SUPERNATURAL_EXCLUSIONS: &[&str] = &[
    "ghosts",
    "spirits",
    "supernatural",
    "paranormal",
    "angels",
    "demons",
];

/// Terms excluded when the conflict level is none.
pub const CONFLICT_EXCLUSIONS: &[&str] =
    &["conflict", "villains", "antagonists", "fighting", "arguments"];

/// Terms excluded when mild peril is disallowed.
pub const PERIL_EXCLUSIONS: &[&str] = &[
    "danger",
    "peril",
    "scary situations",
    "getting lost",
    "storms",
];

/// Terms excluded when music themes are disallowed.
pub const MUSIC_EXCLUSIONS: &[&str] = &["musical instruments", "singing performances", "concerts"];

/// Terms excluded when dance themes are disallowed.
pub const DANCE_EXCLUSIONS: &[&str] = &["dancing", "dance parties", "ballet"];

/// Keywords that mark an exclusion as relevant to visual depiction.
///
/// Exclusions matching any of these (case-insensitive substring) are
/// repeated in the image guidelines so the illustration model sees them.
pub const VISUAL_FILTER_TERMS: &[&str] = &[
    "pork",
    "pig",
    "alcohol",
    "immodest",
    "revealing",
    "dancing",
    "musical instruments",
];
