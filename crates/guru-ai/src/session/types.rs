//! Session parameters and the client construction hook.

use std::sync::Arc;

use guru_config::schema::ModelConfig;
use guru_config::Credential;

use crate::AiClient;

/// Builds the service client for a new session. Receives the resolved
/// credential (an empty placeholder when none was found) and the fixed
/// session parameters.
pub type ClientFactory =
    Box<dyn Fn(&Credential, &SessionSettings) -> Arc<dyn AiClient> + Send + Sync>;

/// Parameters every session is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub model: String,
    pub system_instruction: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl From<&ModelConfig> for SessionSettings {
    fn from(model: &ModelConfig) -> Self {
        Self {
            model: model.name.clone(),
            system_instruction: model.system_instruction.clone(),
            temperature: model.temperature,
            max_output_tokens: model.max_output_tokens,
        }
    }
}
