//! Prompt building functions for story and illustration requests.
//!
//! Assembles the compiled content guidelines, child profile, and story
//! memory into the prompts sent to the outbound model ports. Guideline text
//! is embedded verbatim; the compiler already formatted it for the models.

use storyverse_domain::LanguageCode;

use crate::llm_context::{IllustrationRequest, StoryContext};
use crate::prompt_templates::{defaults, keys, resolve_template};

/// Build the system prompt that establishes the author role, the child's
/// profile, the family's content guidelines, and the response format.
pub fn build_story_system_prompt(context: &StoryContext) -> String {
    let mut prompt = String::new();

    // Role establishment
    prompt.push_str(&resolve_template(keys::STORY_SYSTEM_PREAMBLE)
        .unwrap_or_else(|| defaults::STORY_SYSTEM_PREAMBLE.to_string()));
    prompt.push_str("\n\n");

    // Child profile
    prompt.push_str(&format!("THE HERO: {}\n", context.child_name));
    prompt.push_str(&format!("AGE: {}\n", context.child_age));
    prompt.push_str(&format!(
        "READING LEVEL: {}\n",
        reading_level_for_age(context.child_age)
    ));
    if !context.interests.is_empty() {
        prompt.push_str(&format!("INTERESTS: {}\n", context.interests.join(", ")));
    }
    if let Some(color) = &context.favorite_color {
        prompt.push_str(&format!("FAVORITE COLOR: {}\n", color));
    }
    prompt.push('\n');

    // Language
    if context.language != LanguageCode::En {
        prompt.push_str(&format!(
            "Write the entire story in {}.\n\n",
            context.language.english_name()
        ));
    }

    // Family content guidelines, verbatim from the compiler
    prompt.push_str(&context.content_guidelines.story_guidelines);
    prompt.push_str("\n\nTONE: ");
    prompt.push_str(&context.content_guidelines.tone_guidelines);
    prompt.push('\n');

    if context.avoid_scary_elements {
        prompt.push_str("This child is sensitive to frightening content. Keep every scene gentle and reassuring.\n");
    }
    prompt.push('\n');

    // Story memory - continuity across the child's books
    if !context.memory.existing_characters.is_empty() {
        prompt.push_str("RETURNING CHARACTERS (reuse where natural):\n");
        for character in &context.memory.existing_characters {
            prompt.push_str(&format!("- {}: {}\n", character.name, character.description));
        }
        prompt.push('\n');
    }
    if !context.memory.previous_events.is_empty() {
        prompt.push_str("EVENTS FROM EARLIER BOOKS:\n");
        for event in &context.memory.previous_events {
            prompt.push_str(&format!(
                "- {} (from \"{}\", {})\n",
                event.event, event.book_title, event.significance
            ));
        }
        prompt.push('\n');
    }
    if !context.memory.ongoing_arcs.is_empty() {
        prompt.push_str("ONGOING STORY ARCS:\n");
        for arc in &context.memory.ongoing_arcs {
            prompt.push_str(&format!("- {}\n", arc));
        }
        prompt.push('\n');
    }

    // Response format instructions
    prompt.push_str(&resolve_template(keys::STORY_RESPONSE_FORMAT)
        .unwrap_or_else(|| defaults::STORY_RESPONSE_FORMAT.to_string()));

    prompt
}

/// Build the user message requesting this specific book.
pub fn build_story_user_message(context: &StoryContext) -> String {
    let mut message = String::new();

    message.push_str(&format!(
        "Write a {} story starring {}, age {}, in {} pages.\n",
        context.theme, context.child_name, context.child_age, context.page_count
    ));

    if let Some(custom) = &context.custom_elements {
        message.push_str(&format!("The family asked for: {}\n", custom));
    }

    message
}

/// Build the prompt for one page illustration.
pub fn build_illustration_prompt(request: &IllustrationRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(&resolve_template(keys::ILLUSTRATION_SAFETY_PREAMBLE)
        .unwrap_or_else(|| defaults::ILLUSTRATION_SAFETY_PREAMBLE.to_string()));
    prompt.push_str("\n\n");

    prompt.push_str(&format!("STYLE: {}\n", request.style));
    prompt.push_str(&format!("THE CHILD: {}\n", request.child_description));
    prompt.push_str(&format!("SCENE: {}\n\n", request.prompt));

    // Image guidelines, verbatim from the compiler
    prompt.push_str(&request.image_guidelines);
    prompt.push('\n');

    if !request.must_not_include.is_empty() {
        prompt.push_str(&format!(
            "\nNever depict: {}\n",
            request.must_not_include.join(", ")
        ));
    }
    if request.high_contrast {
        prompt.push_str("\nUse high contrast colors, clear outlines, avoid busy backgrounds.\n");
    }

    prompt
}

/// Build the prompt for the book cover.
pub fn build_cover_prompt(title: &str, request: &IllustrationRequest) -> String {
    let mut prompt = build_illustration_prompt(request);

    prompt.push('\n');
    prompt.push_str(&resolve_template(keys::COVER_INSTRUCTIONS)
        .unwrap_or_else(|| defaults::COVER_INSTRUCTIONS.to_string()));
    prompt.push_str(&format!("\nThe book is titled \"{}\".\n", title));

    prompt
}

/// A consistent one-line description of the child, reused across every
/// illustration so the hero looks the same on each page.
pub fn child_description(
    name: &str,
    age: u8,
    gender: Option<&str>,
    favorite_color: Option<&str>,
) -> String {
    let subject = match gender.map(str::to_lowercase).as_deref() {
        Some("girl") | Some("female") | Some("f") => "girl",
        Some("boy") | Some("male") | Some("m") => "boy",
        _ => "child",
    };

    let mut description = format!("{}, a {}-year-old {}", name, age, subject);
    if let Some(color) = favorite_color {
        description.push_str(&format!(", often wearing {}", color));
    }
    description
}

/// Vocabulary and sentence guidance by age band.
pub fn reading_level_for_age(age: u8) -> &'static str {
    match age {
        0..=2 => "Very simple words, one short sentence per page, lots of repetition",
        3..=4 => "Simple vocabulary, short sentences, playful rhythm and repetition",
        5..=6 => "Early reader vocabulary, short paragraphs, gentle humor",
        7..=8 => "Confident reader vocabulary, varied sentences, light subplots",
        9..=12 => "Middle grade vocabulary, richer descriptions, deeper themes",
        _ => "Young adult vocabulary, nuanced emotions, sophisticated themes",
    }
}
