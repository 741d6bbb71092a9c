//! Session lifecycle tests against a scripted client.

use std::sync::{Arc, Mutex};

use guru_config::{CredentialResolver, MapSource, ValueSource};

use super::*;
use crate::scripted::ScriptedClient;
use crate::{AiError, FailureKind, Role};

fn settings() -> SessionSettings {
    SessionSettings {
        model: "gemini-2.5-flash".into(),
        system_instruction: "Be a grammar coach.".into(),
        temperature: 0.7,
        max_output_tokens: 256,
    }
}

fn resolver(pairs: &[(&str, &str)]) -> CredentialResolver {
    CredentialResolver::new(
        vec!["VAIT_API_KEY".into(), "GEMINI_API_KEY".into()],
        Arc::new(MapSource::from_pairs(pairs.iter().copied())),
    )
}

fn manager(client: &Arc<ScriptedClient>, pairs: &[(&str, &str)]) -> SessionManager {
    SessionManager::new(settings(), resolver(pairs), client.factory())
        .with_empty_reply("(empty)")
}

#[test]
fn session_is_created_lazily() {
    let client = ScriptedClient::new();
    let mut mgr = manager(&client, &[("GEMINI_API_KEY", "k")]);
    assert!(!mgr.has_session());
    assert_eq!(client.sessions_opened(), 0);

    let first = mgr.get_session().id().clone();
    let again = mgr.get_session().id().clone();
    assert_eq!(first, again);
    assert_eq!(client.sessions_opened(), 1);
    assert_eq!(client.credentials(), vec!["k".to_string()]);
}

#[test]
fn missing_credential_still_builds_a_session() {
    let client = ScriptedClient::new();
    let mut mgr = manager(&client, &[]);
    assert!(!mgr.credential_available());

    let session = mgr.get_session();
    assert!(!session.has_credential());
    assert_eq!(client.credentials(), vec![String::new()]);
}

#[test]
fn reset_is_idempotent() {
    let client = ScriptedClient::new();
    let mut mgr = manager(&client, &[("GEMINI_API_KEY", "k")]);
    mgr.get_session();
    mgr.reset();
    assert!(!mgr.has_session());
    mgr.reset();
    assert!(!mgr.has_session());
    assert!(mgr.session_id().is_none());
}

#[tokio::test]
async fn send_returns_reply_and_keeps_history() {
    let client = ScriptedClient::new();
    client.push_reply("Fixed!");
    client.push_reply("Great sentence!");
    let mut mgr = manager(&client, &[("VAIT_API_KEY", "k")]);

    assert_eq!(mgr.send("I go to school yesterday.").await.unwrap(), "Fixed!");
    assert_eq!(mgr.send("I went to school.").await.unwrap(), "Great sentence!");

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    // system + user
    assert_eq!(requests[0].len(), 2);
    assert_eq!(requests[0][0].role, Role::System);
    assert_eq!(requests[0][0].content, "Be a grammar coach.");
    // system + user + model + user
    assert_eq!(requests[1].len(), 4);
    assert_eq!(requests[1][2].role, Role::Assistant);
    assert_eq!(requests[1][2].content, "Fixed!");
    assert_eq!(mgr.get_session().history().len(), 4);
    assert_eq!(client.sessions_opened(), 1);
}

#[tokio::test]
async fn send_without_credential_fails_before_any_request() {
    let client = ScriptedClient::new();
    client.push_reply("never used");
    let mut mgr = manager(&client, &[]);

    let err = mgr.send("Hello").await.unwrap_err();
    assert!(matches!(err, AiError::CredentialMissing));
    assert_eq!(err.kind(), FailureKind::CredentialMissing);
    assert!(client.requests().is_empty());
    assert!(!mgr.has_session());
}

#[tokio::test]
async fn failure_discards_session_and_next_send_reconnects() {
    let client = ScriptedClient::new();
    client.push_error(AiError::Auth("HTTP 403 Forbidden".into()));
    client.push_reply("Back online");
    let mut mgr = manager(&client, &[("GEMINI_API_KEY", "k")]);

    let before = mgr.get_session().id().clone();
    let err = mgr.send("Hello").await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Auth);
    assert!(!mgr.has_session());

    let after = mgr.get_session().id().clone();
    assert_ne!(before, after);
    assert_eq!(client.sessions_opened(), 2);

    assert_eq!(mgr.send("Hello again").await.unwrap(), "Back online");
    // The failed turn is not replayed to the fresh session.
    let last = client.requests().pop().unwrap();
    assert_eq!(last.len(), 2);
    assert_eq!(last[1].content, "Hello again");
}

#[tokio::test]
async fn empty_reply_is_replaced() {
    let client = ScriptedClient::new();
    client.push_reply("   ");
    let mut mgr = manager(&client, &[("GEMINI_API_KEY", "k")]);
    assert_eq!(mgr.send("Hi").await.unwrap(), "(empty)");
    assert!(mgr.has_session());
}

/// Source whose value can change while the manager is alive.
#[derive(Default)]
struct LateEnv(Mutex<Option<String>>);

impl ValueSource for LateEnv {
    fn read(&self, _name: &str) -> Option<String> {
        self.0.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn credential_exported_later_is_used_by_next_session() {
    let client = ScriptedClient::new();
    let env = Arc::new(LateEnv::default());
    let resolver = CredentialResolver::new(vec!["GEMINI_API_KEY".into()], env.clone());
    let mut mgr = SessionManager::new(settings(), resolver, client.factory());

    assert!(matches!(
        mgr.send("Hi").await.unwrap_err(),
        AiError::CredentialMissing
    ));

    *env.0.lock().unwrap() = Some("late-key".into());
    client.push_reply("ok");
    assert_eq!(mgr.send("Hi").await.unwrap(), "ok");
    assert_eq!(client.credentials(), vec![String::new(), "late-key".to_string()]);
}

#[test]
fn settings_from_model_config() {
    let model = guru_config::schema::ModelConfig::default();
    let s = SessionSettings::from(&model);
    assert_eq!(s.model, model.name);
    assert_eq!(s.temperature, 0.7);
    assert_eq!(s.system_instruction, model.system_instruction);
}
