//! Supported story languages.
//!
//! StoryVerse generates and narrates books in the languages below. The
//! two-letter (or ISO 639) tag is what the surrounding system persists on
//! child profiles and passes into story generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A language a story can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Zh,
    Ja,
    Ko,
    Ar,
    Hi,
    Ru,
    Nl,
    Pl,
    Tr,
    Vi,
    Th,
    Id,
    Ms,
    Fil,
    He,
    Uk,
    Sv,
    Da,
    No,
    Fi,
    El,
    Cs,
    Ro,
    Hu,
}

impl LanguageCode {
    /// All supported languages, in display order.
    pub fn all() -> &'static [LanguageCode] {
        use LanguageCode::*;
        &[
            En, Es, Fr, De, It, Pt, Zh, Ja, Ko, Ar, Hi, Ru, Nl, Pl, Tr, Vi, Th, Id, Ms, Fil, He,
            Uk, Sv, Da, No, Fi, El, Cs, Ro, Hu,
        ]
    }

    /// The persisted language tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Ar => "ar",
            Self::Hi => "hi",
            Self::Ru => "ru",
            Self::Nl => "nl",
            Self::Pl => "pl",
            Self::Tr => "tr",
            Self::Vi => "vi",
            Self::Th => "th",
            Self::Id => "id",
            Self::Ms => "ms",
            Self::Fil => "fil",
            Self::He => "he",
            Self::Uk => "uk",
            Self::Sv => "sv",
            Self::Da => "da",
            Self::No => "no",
            Self::Fi => "fi",
            Self::El => "el",
            Self::Cs => "cs",
            Self::Ro => "ro",
            Self::Hu => "hu",
        }
    }

    /// English name of the language, used when instructing the story model.
    pub fn english_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::It => "Italian",
            Self::Pt => "Portuguese",
            Self::Zh => "Chinese",
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
            Self::Ar => "Arabic",
            Self::Hi => "Hindi",
            Self::Ru => "Russian",
            Self::Nl => "Dutch",
            Self::Pl => "Polish",
            Self::Tr => "Turkish",
            Self::Vi => "Vietnamese",
            Self::Th => "Thai",
            Self::Id => "Indonesian",
            Self::Ms => "Malay",
            Self::Fil => "Filipino",
            Self::He => "Hebrew",
            Self::Uk => "Ukrainian",
            Self::Sv => "Swedish",
            Self::Da => "Danish",
            Self::No => "Norwegian",
            Self::Fi => "Finnish",
            Self::El => "Greek",
            Self::Cs => "Czech",
            Self::Ro => "Romanian",
            Self::Hu => "Hungarian",
        }
    }

    /// Native name of the language, for UI display.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::It => "Italiano",
            Self::Pt => "Português",
            Self::Zh => "中文",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::Ar => "العربية",
            Self::Hi => "हिन्दी",
            Self::Ru => "Русский",
            Self::Nl => "Nederlands",
            Self::Pl => "Polski",
            Self::Tr => "Türkçe",
            Self::Vi => "Tiếng Việt",
            Self::Th => "ไทย",
            Self::Id => "Bahasa Indonesia",
            Self::Ms => "Bahasa Melayu",
            Self::Fil => "Filipino",
            Self::He => "עברית",
            Self::Uk => "Українська",
            Self::Sv => "Svenska",
            Self::Da => "Dansk",
            Self::No => "Norsk",
            Self::Fi => "Suomi",
            Self::El => "Ελληνικά",
            Self::Cs => "Čeština",
            Self::Ro => "Română",
            Self::Hu => "Magyar",
        }
    }

    /// Lenient tag lookup. Unknown tags return `None` rather than erroring,
    /// matching the compiler's never-fail philosophy.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.as_str() == tag)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| DomainError::parse(format!("Unknown language code: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_tag() {
        assert_eq!(LanguageCode::from_tag("en"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_tag("AR"), Some(LanguageCode::Ar));
        assert_eq!(LanguageCode::from_tag("fil"), Some(LanguageCode::Fil));
        assert_eq!(LanguageCode::from_tag("klingon"), None);
    }

    #[test]
    fn test_language_default_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn test_language_serde_tag() {
        let json = serde_json::to_string(&LanguageCode::He).expect("serialize");
        assert_eq!(json, "\"he\"");
        let parsed: LanguageCode = serde_json::from_str("\"uk\"").expect("deserialize");
        assert_eq!(parsed, LanguageCode::Uk);
    }

    #[test]
    fn test_all_languages_have_distinct_tags() {
        let mut tags: Vec<&str> = LanguageCode::all().iter().map(|l| l.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), LanguageCode::all().len());
    }
}
