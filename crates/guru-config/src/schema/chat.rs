//! Chat front-end texts and behaviour.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING: &str =
    "안녕하세요! 영어 문장을 입력하시면 문법을 교정해 드리고, 더 자연스러운 표현을 제안해 드릴게요. 😉";

/// User-facing texts for the conversation and its failure notices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Bot message that seeds every new conversation.
    pub greeting: String,
    /// Ask before `/reset` wipes the conversation.
    pub confirm_reset: bool,
    /// Shown when the model answers with an empty reply.
    pub empty_reply: String,
    pub credential_missing_notice: String,
    pub auth_error_notice: String,
    pub transport_error_notice: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            confirm_reset: true,
            empty_reply: "죄송합니다. 응답을 생성하는 중에 문제가 발생했습니다.".into(),
            credential_missing_notice:
                "API 키가 설정되지 않았습니다. GEMINI_API_KEY 환경 변수를 설정한 뒤 다시 시도해 주세요."
                    .into(),
            auth_error_notice: "API 키 인증에 실패했습니다. 키가 올바른지 확인해 주세요.".into(),
            transport_error_notice: "일시적인 오류가 발생했습니다. 잠시 후 다시 시도해 주세요."
                .into(),
        }
    }
}
