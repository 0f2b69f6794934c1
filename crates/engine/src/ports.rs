//! Outbound ports for external generative models.
//!
//! The engine never talks to a vendor API directly; adapters implement these
//! traits against whichever text/image providers are configured. Tests mock
//! them with `mockall`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::llm_context::{IllustrationRequest, StoryDraft};

/// Errors from the outbound generative model adapters.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The story model call failed.
    #[error("Story model error: {0}")]
    StoryModel(String),

    /// The illustration model call failed.
    #[error("Illustration model error: {0}")]
    IllustrationModel(String),

    /// The model responded, but not in the expected shape.
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}

/// Port to the text-generation model that writes story drafts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoryModelPort: Send + Sync {
    /// Generate a complete story draft from the assembled prompts.
    async fn generate_story(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<StoryDraft, GenerationError>;
}

/// Port to the image-generation model that illustrates pages and covers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IllustrationModelPort: Send + Sync {
    /// Generate one illustration; returns the stored asset URL.
    async fn generate_illustration(
        &self,
        request: &IllustrationRequest,
    ) -> Result<String, GenerationError>;
}

/// Testability port for injecting time.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation for production composition.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
