//! Full configuration validation.
//!
//! Each domain has its own submodule. [`validate`] reports every problem at
//! once; [`repair`] additionally swaps each failing section for its defaults.

mod helpers;
mod misc;
mod model;


use crate::schema::{
    ChatConfig, CredentialsConfig, GuruConfig, LoggingConfig, ModelConfig, StorageConfig,
};
use guru_common::ConfigError;

type SectionCheck = fn(&mut Vec<String>, &GuruConfig);

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GuruConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    misc::validate_credentials(&mut errors, config);
    misc::validate_storage(&mut errors, config);
    misc::validate_chat(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    into_result(errors)
}

/// Reset every section that fails validation to its defaults, leaving valid
/// sections untouched. The returned error lists what was replaced; the config
/// is valid afterwards either way.
pub fn repair(config: &mut GuruConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if fails(&mut errors, config, model::validate_model) {
        config.model = ModelConfig::default();
    }
    if fails(&mut errors, config, misc::validate_credentials) {
        config.credentials = CredentialsConfig::default();
    }
    if fails(&mut errors, config, misc::validate_storage) {
        config.storage = StorageConfig::default();
    }
    if fails(&mut errors, config, misc::validate_chat) {
        config.chat = ChatConfig::default();
    }
    if fails(&mut errors, config, misc::validate_logging) {
        config.logging = LoggingConfig::default();
    }

    into_result(errors)
}

fn fails(errors: &mut Vec<String>, config: &GuruConfig, check: SectionCheck) -> bool {
    let before = errors.len();
    check(errors, config);
    errors.len() > before
}

fn into_result(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
