//! StoryVerse engine - book generation orchestration.
//!
//! Takes the domain's compiled content guidelines, builds the model-facing
//! prompts, and drives the story and illustration ports to produce a
//! finished personalized book.

pub mod llm_context;
pub mod ports;
pub mod prompt_builder;
pub mod prompt_templates;
pub mod use_cases;

pub use llm_context::{
    AspectRatio, DraftPage, DraftStoryEvent, GeneratedBook, GeneratedPage, IllustrationRequest,
    PageLayout, PastStoryEvent, RecurringCharacter, StoryContext, StoryDraft, StoryMemoryContext,
};
pub use ports::{ClockPort, GenerationError, IllustrationModelPort, StoryModelPort, SystemClock};
pub use use_cases::{GenerateBook, GenerateBookRequest};
