//! LLM access.
//!
//! [`LlmClient`] is the seam between the orchestrator and a hosted model.
//! [`GeminiClient`] talks to Google's Generative Language API; tests inject
//! their own implementations.

mod gemini;

pub use gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Provider harm categories that can carry a block threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHarassment,
    HarmCategoryHateSpeech,
    HarmCategorySexuallyExplicit,
    HarmCategoryDangerousContent,
}

/// How aggressively the provider withholds content in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

/// One safety override sent with a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    pub const fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }
}

/// Safety settings used for command generation.
///
/// Dangerous content is blocked only at high severity. Ordinary shell
/// requests are rated medium often enough that the provider default refuses
/// too many of them.
pub fn command_safety_settings() -> Vec<SafetySetting> {
    vec![SafetySetting::new(
        HarmCategory::HarmCategoryDangerousContent,
        HarmBlockThreshold::BlockOnlyHigh,
    )]
}

/// A hosted text-generation model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// Returns `Ok(None)` when the provider declined to produce text, for
    /// instance because a safety filter blocked the prompt or the response.
    async fn generate(&self, prompt: &str, safety: &[SafetySetting]) -> Result<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_safety_settings() {
        let settings = command_safety_settings();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].category, HarmCategory::HarmCategoryDangerousContent);
        assert_eq!(settings[0].threshold, HarmBlockThreshold::BlockOnlyHigh);
    }

    #[test]
    fn test_safety_setting_wire_format() {
        let json = serde_json::to_value(command_safety_settings()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "category": "HARM_CATEGORY_DANGEROUS_CONTENT",
                "threshold": "BLOCK_ONLY_HIGH"
            }])
        );
    }
}
