//! Credential, storage, chat and logging validation.

use crate::schema::GuruConfig;

use super::helpers::validate_non_blank;

pub(super) fn validate_credentials(errors: &mut Vec<String>, config: &GuruConfig) {
    let candidates = &config.credentials.candidates;
    if candidates.is_empty() {
        errors.push("credentials.candidates must list at least one variable".into());
    }
    for name in candidates {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            errors.push(format!(
                "credentials.candidates entry {name:?} is not a valid variable name"
            ));
        }
    }
}

pub(super) fn validate_storage(errors: &mut Vec<String>, config: &GuruConfig) {
    let key = &config.storage.history_key;
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid {
        errors.push(format!(
            "storage.history_key = {key:?} may only contain letters, digits, '-', '_' and '.'"
        ));
    }
}

pub(super) fn validate_chat(errors: &mut Vec<String>, config: &GuruConfig) {
    validate_non_blank(errors, "chat.greeting", &config.chat.greeting);
    validate_non_blank(errors, "chat.empty_reply", &config.chat.empty_reply);
}

pub(super) fn validate_logging(errors: &mut Vec<String>, config: &GuruConfig) {
    validate_non_blank(errors, "logging.level", &config.logging.level);
}
