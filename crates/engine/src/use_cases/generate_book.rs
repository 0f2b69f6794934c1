//! Generate-book use case - turns one book request into a finished book.
//!
//! Compiles the family's content guidelines, assembles the story prompts,
//! calls the story model, then illustrates each page. A failed illustration
//! is logged and skipped rather than failing the whole book.

use std::sync::Arc;

use storyverse_domain::{
    generate_content_guidelines, BookId, ChildPreferences, ChildProfile, FamilyPreferences,
};

use crate::llm_context::{
    AspectRatio, GeneratedBook, GeneratedPage, IllustrationRequest, PageLayout, StoryContext,
    StoryMemoryContext,
};
use crate::ports::{ClockPort, GenerationError, IllustrationModelPort, StoryModelPort};
use crate::prompt_builder::{
    build_story_system_prompt, build_story_user_message, child_description,
};

/// Words per minute a child (or parent reading aloud) gets through.
const READING_WORDS_PER_MINUTE: f64 = 150.0;

/// One book-generation request, assembled by the caller from the family's
/// current rows.
#[derive(Debug, Clone)]
pub struct GenerateBookRequest {
    pub book_id: BookId,
    pub child: ChildProfile,
    pub family_preferences: FamilyPreferences,
    pub child_preferences: Option<ChildPreferences>,
    /// Story theme (e.g. "adventure", "bedtime").
    pub theme: String,
    /// Illustration style tag (e.g. "storybook", "watercolor").
    pub illustration_style: String,
    /// Free-form elements the family asked for in this book.
    pub custom_elements: Option<String>,
    /// Number of pages to write.
    pub page_count: u32,
    /// Story continuity from the child's previous books.
    pub memory: StoryMemoryContext,
}

/// Generates one personalized book through the outbound model ports.
pub struct GenerateBook {
    story_model: Arc<dyn StoryModelPort>,
    illustration_model: Arc<dyn IllustrationModelPort>,
    clock: Arc<dyn ClockPort>,
}

impl GenerateBook {
    pub fn new(
        story_model: Arc<dyn StoryModelPort>,
        illustration_model: Arc<dyn IllustrationModelPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            story_model,
            illustration_model,
            clock,
        }
    }

    /// Generate the story and its illustrations.
    pub async fn execute(
        &self,
        request: GenerateBookRequest,
    ) -> Result<GeneratedBook, GenerationError> {
        let now = self.clock.now();
        let child_age = request.child.age_on(now.date_naive());
        let language = request.child.preferred_language;

        let guidelines = generate_content_guidelines(
            &request.family_preferences,
            request.child_preferences.as_ref(),
            child_age,
            language,
        );

        let avoid_scary = request
            .child_preferences
            .as_ref()
            .and_then(|c| c.allow_scary_elements)
            .map(|allowed| !allowed)
            .unwrap_or(false);
        let high_contrast = request
            .child_preferences
            .as_ref()
            .and_then(|c| c.needs_high_contrast_images)
            .unwrap_or(false);

        let context = StoryContext {
            child_name: request.child.name.clone(),
            child_age,
            interests: request.child.interests.clone(),
            favorite_color: request.child.favorite_color.clone(),
            gender: request.child.gender.clone(),
            theme: request.theme,
            illustration_style: request.illustration_style.clone(),
            custom_elements: request.custom_elements,
            language,
            page_count: request.page_count,
            content_guidelines: guidelines,
            avoid_scary_elements: avoid_scary,
            memory: request.memory,
        };

        let system_prompt = build_story_system_prompt(&context);
        let user_message = build_story_user_message(&context);

        tracing::info!(
            book_id = %request.book_id,
            child = %context.child_name,
            theme = %context.theme,
            language = %context.language,
            "Generating story draft"
        );

        let draft = self
            .story_model
            .generate_story(&system_prompt, &user_message)
            .await?;

        tracing::info!(
            book_id = %request.book_id,
            title = %draft.title,
            pages = draft.pages.len(),
            "Story draft received, illustrating pages"
        );

        let description = child_description(
            &context.child_name,
            child_age,
            context.gender.as_deref(),
            context.favorite_color.as_deref(),
        );

        let mut pages = Vec::with_capacity(draft.pages.len());
        for page in draft.pages {
            let image_url = if page.layout.is_illustrated() {
                let illustration = IllustrationRequest {
                    prompt: page.image_prompt.clone(),
                    style: context.illustration_style.clone(),
                    child_description: description.clone(),
                    child_age,
                    language,
                    aspect_ratio: match page.layout {
                        PageLayout::Full => AspectRatio::FourThree,
                        _ => AspectRatio::Square,
                    },
                    image_guidelines: context.content_guidelines.image_guidelines.clone(),
                    must_not_include: context
                        .content_guidelines
                        .visually_relevant_exclusions()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                    high_contrast,
                };

                match self
                    .illustration_model
                    .generate_illustration(&illustration)
                    .await
                {
                    Ok(url) => Some(url),
                    Err(e) => {
                        // The book still ships; the page falls back to text.
                        tracing::warn!(
                            book_id = %request.book_id,
                            page = page.page_number,
                            error = %e,
                            "Illustration failed, continuing without image"
                        );
                        None
                    }
                }
            } else {
                None
            };

            pages.push(GeneratedPage {
                page_number: page.page_number,
                text: page.text,
                image_prompt: page.image_prompt,
                layout: page.layout,
                image_url,
            });
        }

        let reading_time_minutes = reading_time_minutes(&pages);
        let page_count = pages.len() as u32;

        tracing::info!(
            book_id = %request.book_id,
            title = %draft.title,
            page_count,
            reading_time_minutes,
            "Book generation complete"
        );

        Ok(GeneratedBook {
            book_id: request.book_id,
            title: draft.title,
            pages,
            page_count,
            reading_time_minutes,
            new_characters: draft.new_characters,
            story_event: draft.story_event,
            generated_at: now,
        })
    }
}

/// Approximate read-aloud minutes for the finished pages.
fn reading_time_minutes(pages: &[GeneratedPage]) -> u32 {
    let total_words: usize = pages
        .iter()
        .map(|p| p.text.split_whitespace().count())
        .sum();
    (total_words as f64 / READING_WORDS_PER_MINUTE).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_context::{DraftPage, DraftStoryEvent, RecurringCharacter, StoryDraft};
    use crate::ports::{MockClockPort, MockIllustrationModelPort, MockStoryModelPort};
    use chrono::{NaiveDate, TimeZone, Utc};
    use storyverse_domain::LanguageCode;

    fn sample_draft() -> StoryDraft {
        StoryDraft {
            title: "Maya and the Moon Garden".to_string(),
            pages: vec![
                DraftPage {
                    page_number: 1,
                    text: "Maya planted a silver seed under the biggest moonbeam.".to_string(),
                    image_prompt: "A girl planting a glowing seed at night".to_string(),
                    layout: PageLayout::Full,
                },
                DraftPage {
                    page_number: 2,
                    text: "By morning it had grown taller than the house.".to_string(),
                    image_prompt: "A huge shimmering plant beside a cottage".to_string(),
                    layout: PageLayout::TextOnly,
                },
            ],
            new_characters: vec![RecurringCharacter {
                name: "Moon Gardener".to_string(),
                description: "A gentle old gardener who tends moonlight".to_string(),
            }],
            story_event: Some(DraftStoryEvent {
                event: "Maya grew her first moon garden".to_string(),
                significance: "major".to_string(),
            }),
        }
    }

    fn sample_request() -> GenerateBookRequest {
        GenerateBookRequest {
            book_id: BookId::new(),
            child: ChildProfile {
                name: "Maya".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2020, 3, 1).expect("valid date"),
                gender: Some("girl".to_string()),
                favorite_color: Some("purple".to_string()),
                interests: vec!["gardens".to_string()],
                preferred_language: LanguageCode::En,
            },
            family_preferences: FamilyPreferences {
                dietary_preferences: vec!["halal".to_string()],
                ..Default::default()
            },
            child_preferences: Some(ChildPreferences {
                use_family_defaults: true,
                allow_scary_elements: Some(false),
                avoid_themes: vec!["thunder".to_string()],
                ..Default::default()
            }),
            theme: "bedtime".to_string(),
            illustration_style: "watercolor".to_string(),
            custom_elements: None,
            page_count: 2,
            memory: StoryMemoryContext::default(),
        }
    }

    fn fixed_clock() -> MockClockPort {
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(|| {
            Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0)
                .single()
                .expect("valid timestamp")
        });
        clock
    }

    #[tokio::test]
    async fn test_generate_book_embeds_guidelines_and_illustrates() {
        let mut story_model = MockStoryModelPort::new();
        story_model
            .expect_generate_story()
            .withf(|system_prompt, user_message| {
                // Compiled guidelines and the child overlay must reach the
                // story model verbatim.
                system_prompt.contains("ELEMENTS TO EXCLUDE:")
                    && system_prompt.contains("- pork")
                    && system_prompt.contains("- thunder")
                    && system_prompt.contains("sensitive to frightening content")
                    && user_message.contains("bedtime story starring Maya, age 6")
            })
            .once()
            .returning(|_, _| Ok(sample_draft()));

        let mut illustration_model = MockIllustrationModelPort::new();
        illustration_model
            .expect_generate_illustration()
            .withf(|request| {
                request.image_guidelines.contains("Dress code:")
                    && request.must_not_include.iter().any(|e| e == "pork")
                    && request.aspect_ratio == AspectRatio::FourThree
            })
            .once()
            .returning(|_| Ok("https://assets.example/page1.png".to_string()));

        let use_case = GenerateBook::new(
            Arc::new(story_model),
            Arc::new(illustration_model),
            Arc::new(fixed_clock()),
        );

        let book = use_case.execute(sample_request()).await.expect("book");

        assert_eq!(book.title, "Maya and the Moon Garden");
        assert_eq!(book.page_count, 2);
        assert_eq!(
            book.pages[0].image_url.as_deref(),
            Some("https://assets.example/page1.png")
        );
        // Text-only page gets no illustration call at all.
        assert!(book.pages[1].image_url.is_none());
        assert_eq!(book.reading_time_minutes, 1);
        assert_eq!(book.new_characters.len(), 1);
    }

    #[tokio::test]
    async fn test_illustration_failure_does_not_fail_book() {
        let mut story_model = MockStoryModelPort::new();
        story_model
            .expect_generate_story()
            .returning(|_, _| Ok(sample_draft()));

        let mut illustration_model = MockIllustrationModelPort::new();
        illustration_model
            .expect_generate_illustration()
            .returning(|_| {
                Err(GenerationError::IllustrationModel(
                    "provider timeout".to_string(),
                ))
            });

        let use_case = GenerateBook::new(
            Arc::new(story_model),
            Arc::new(illustration_model),
            Arc::new(fixed_clock()),
        );

        let book = use_case.execute(sample_request()).await.expect("book");
        assert!(book.pages.iter().all(|p| p.image_url.is_none()));
        assert_eq!(book.page_count, 2);
    }

    #[tokio::test]
    async fn test_story_model_failure_propagates() {
        let mut story_model = MockStoryModelPort::new();
        story_model
            .expect_generate_story()
            .returning(|_, _| Err(GenerationError::StoryModel("rate limited".to_string())));

        let use_case = GenerateBook::new(
            Arc::new(story_model),
            Arc::new(MockIllustrationModelPort::new()),
            Arc::new(fixed_clock()),
        );

        let result = use_case.execute(sample_request()).await;
        assert!(matches!(result, Err(GenerationError::StoryModel(_))));
    }
}
