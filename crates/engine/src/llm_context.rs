//! LLM context types - Types for building story and illustration prompts.
//!
//! These DTOs are serialized to JSON for outbound model requests and are
//! intentionally owned by the engine (not the domain) to keep domain pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storyverse_domain::{BookId, ContentGuidelines, LanguageCode};

/// Everything the story model needs to write one personalized book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContext {
    /// The child the story is for.
    pub child_name: String,
    /// The child's age in whole years.
    pub child_age: u8,
    /// Interests to weave into the story.
    #[serde(default)]
    pub interests: Vec<String>,
    /// The child's favorite color, if known.
    pub favorite_color: Option<String>,
    /// Free-form gender tag from the child profile, if given.
    pub gender: Option<String>,
    /// Story theme (e.g. "adventure", "bedtime").
    pub theme: String,
    /// Illustration style tag (e.g. "storybook", "watercolor").
    pub illustration_style: String,
    /// Free-form elements the family asked for in this book.
    pub custom_elements: Option<String>,
    /// Language the story must be written in.
    pub language: LanguageCode,
    /// Number of pages to write.
    pub page_count: u32,
    /// Compiled family/child content guidelines.
    pub content_guidelines: ContentGuidelines,
    /// Avoid frightening imagery for this child.
    #[serde(default)]
    pub avoid_scary_elements: bool,
    /// Story continuity from the child's previous books.
    #[serde(default)]
    pub memory: StoryMemoryContext,
}

/// Story continuity memory carried across a child's books.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryMemoryContext {
    /// Characters introduced in earlier books who may return.
    #[serde(default)]
    pub existing_characters: Vec<RecurringCharacter>,
    /// Notable events from earlier books.
    #[serde(default)]
    pub previous_events: Vec<PastStoryEvent>,
    /// Story arcs still in progress.
    #[serde(default)]
    pub ongoing_arcs: Vec<String>,
}

/// A character that appeared in an earlier book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringCharacter {
    pub name: String,
    pub description: String,
}

/// A notable event from an earlier book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastStoryEvent {
    pub book_title: String,
    pub event: String,
    /// "minor" or "major" - how much the event should shape future stories.
    pub significance: String,
    pub date: DateTime<Utc>,
}

/// Page layout the story model chooses per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PageLayout {
    /// Full-page illustration with overlaid text.
    #[default]
    Full,
    /// Half illustration, half text.
    Split,
    /// Text only, no illustration.
    TextOnly,
}

impl PageLayout {
    /// Whether this layout carries an illustration.
    pub fn is_illustrated(&self) -> bool {
        !matches!(self, PageLayout::TextOnly)
    }
}

/// The story model's response: a complete draft before illustration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub pages: Vec<DraftPage>,
    /// New characters introduced in this story, for the memory update.
    #[serde(default)]
    pub new_characters: Vec<RecurringCharacter>,
    /// The story's headline event, for the memory update.
    pub story_event: Option<DraftStoryEvent>,
}

/// One page of a story draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPage {
    pub page_number: u32,
    pub text: String,
    /// Scene description for the illustration model.
    pub image_prompt: String,
    #[serde(default)]
    pub layout: PageLayout,
}

/// The headline event of a draft, recorded into story memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftStoryEvent {
    pub event: String,
    pub significance: String,
}

/// Aspect ratio for a generated illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1, used for split-layout pages.
    Square,
    /// 4:3, used for full-page illustrations.
    FourThree,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::FourThree => "4:3",
        }
    }
}

/// Everything the illustration model needs for one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IllustrationRequest {
    /// Scene description from the story draft.
    pub prompt: String,
    /// Illustration style tag.
    pub style: String,
    /// Consistent description of the child across all pages.
    pub child_description: String,
    pub child_age: u8,
    pub language: LanguageCode,
    pub aspect_ratio: AspectRatio,
    /// Compiled image guidelines, embedded verbatim.
    pub image_guidelines: String,
    /// Visually relevant exclusions the image must not depict.
    #[serde(default)]
    pub must_not_include: Vec<String>,
    /// Use high contrast colors and clear outlines.
    #[serde(default)]
    pub high_contrast: bool,
}

/// A fully generated book, ready for persistence and narration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBook {
    pub book_id: BookId,
    pub title: String,
    pub pages: Vec<GeneratedPage>,
    pub page_count: u32,
    /// Approximate read-aloud time at a child-friendly pace.
    pub reading_time_minutes: u32,
    pub new_characters: Vec<RecurringCharacter>,
    pub story_event: Option<DraftStoryEvent>,
    pub generated_at: DateTime<Utc>,
}

/// One generated page with its (possibly absent) illustration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPage {
    pub page_number: u32,
    pub text: String,
    pub image_prompt: String,
    pub layout: PageLayout,
    /// Illustration URL; `None` for text-only pages or when illustration
    /// generation failed (the book still ships).
    pub image_url: Option<String>,
}
