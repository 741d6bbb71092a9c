//! Remote model settings.

use serde::{Deserialize, Serialize};

/// Gemini model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// System instruction that turns the model into the grammar coach.
pub const SYSTEM_INSTRUCTION: &str = r#"You are "Grammar Guru", a friendly and highly skilled English Grammar Coach for Korean speakers.

Your goal is to help the user improve their English. Follow these rules for every interaction:

1. **Analysis**: precise analysis of the user's English input.
2. **Correction**: If the user's sentence has grammatical errors, typo, or awkward phrasing:
   - Provide the **Corrected Sentence** clearly first.
   - Explain the error in **Korean** (Hangul). Keep the explanation concise but helpful.
3. **Naturalness**: If the user's sentence is grammatically correct:
   - Praise them (in Korean).
   - Suggest a **"Native Speaker Alternative"** (a more natural or idiomatic way to say the same thing).
4. **Q&A**: If the user asks a question about English grammar in Korean, answer clearly in Korean with English examples.
5. **Formatting**: Use Markdown to make your response readable. Use **bold** for corrections or key terms.

Keep the tone encouraging, professional, and helpful."#;

/// Model, sampling and request settings for the chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Upper bound on reply length (valid range: 1-65536).
    pub max_output_tokens: u32,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
    pub system_instruction: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            temperature: 0.7,
            max_output_tokens: 2048,
            request_timeout_secs: 120,
            system_instruction: SYSTEM_INSTRUCTION.into(),
        }
    }
}
