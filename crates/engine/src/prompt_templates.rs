//! Configurable prompt templates used by the engine.
//!
//! Each template has a hard-coded default and an environment-variable
//! override, resolved as: Environment Variable > Default. Operators can tune
//! the model-facing boilerplate without a redeploy.

/// All prompt template keys as constants.
pub mod keys {
    // === Story Generation ===
    /// Role preamble for the story system prompt.
    pub const STORY_SYSTEM_PREAMBLE: &str = "story.system_preamble";
    /// Response format instructions for story drafts.
    pub const STORY_RESPONSE_FORMAT: &str = "story.response_format";

    // === Illustration ===
    /// Safety preamble prepended to every illustration prompt.
    pub const ILLUSTRATION_SAFETY_PREAMBLE: &str = "illustration.safety_preamble";
    /// Extra instructions for book cover images.
    pub const COVER_INSTRUCTIONS: &str = "cover.instructions";
}

/// Default values for all prompt templates.
pub mod defaults {
    /// Role preamble for the story system prompt.
    pub const STORY_SYSTEM_PREAMBLE: &str = "You are a celebrated children's book author. \
You write warm, imaginative, age-appropriate stories that make one specific child \
the hero of their own adventure. You follow the family's content guidelines exactly.";

    /// Response format instructions for story drafts.
    pub const STORY_RESPONSE_FORMAT: &str = r#"
RESPONSE FORMAT:
Respond with a single JSON object and nothing else:

{
  "title": "The story title",
  "pages": [
    {
      "page_number": 1,
      "text": "The page text, 2-4 sentences",
      "image_prompt": "A vivid scene description for the illustrator",
      "layout": "full" | "split" | "text-only"
    }
  ],
  "new_characters": [
    { "name": "Character name", "description": "One-sentence description" }
  ],
  "story_event": { "event": "One-sentence summary", "significance": "minor" | "major" }
}

Every page needs an image_prompt even when layout is "text-only".
Describe scenes visually; never reference the story text in image prompts.
"#;

    /// Safety preamble prepended to every illustration prompt.
    pub const ILLUSTRATION_SAFETY_PREAMBLE: &str = "Children's book illustration, wholesome and \
age-appropriate, soft friendly shapes, no text or lettering in the image, no frightening imagery.";

    /// Extra instructions for book cover images.
    pub const COVER_INSTRUCTIONS: &str = "Book cover composition with space at the top for the \
title, the child hero front and center, inviting and joyful.";
}

/// Convert a template key to its environment-variable override name.
pub fn key_to_env_var(key: &str) -> String {
    format!("STORYVERSE_PROMPT_{}", key.to_uppercase().replace('.', "_"))
}

/// Get the default value for a template key.
pub fn get_default(key: &str) -> Option<&'static str> {
    match key {
        keys::STORY_SYSTEM_PREAMBLE => Some(defaults::STORY_SYSTEM_PREAMBLE),
        keys::STORY_RESPONSE_FORMAT => Some(defaults::STORY_RESPONSE_FORMAT),
        keys::ILLUSTRATION_SAFETY_PREAMBLE => Some(defaults::ILLUSTRATION_SAFETY_PREAMBLE),
        keys::COVER_INSTRUCTIONS => Some(defaults::COVER_INSTRUCTIONS),
        _ => None,
    }
}

/// All recognized template keys.
pub fn all_keys() -> Vec<&'static str> {
    vec![
        keys::STORY_SYSTEM_PREAMBLE,
        keys::STORY_RESPONSE_FORMAT,
        keys::ILLUSTRATION_SAFETY_PREAMBLE,
        keys::COVER_INSTRUCTIONS,
    ]
}

/// Resolve a template: environment variable override first, then default.
///
/// Returns `None` only for unrecognized keys.
pub fn resolve_template(key: &str) -> Option<String> {
    let default_value = get_default(key)?;

    let env_var = key_to_env_var(key);
    if let Ok(env_value) = std::env::var(&env_var) {
        if !env_value.trim().is_empty() {
            return Some(env_value);
        }
    }

    Some(default_value.to_string())
}
