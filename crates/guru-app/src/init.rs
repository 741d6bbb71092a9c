//! Wiring the configured pieces into a ready orchestrator.

use std::time::Duration;

use guru_ai::{GeminiClient, SessionManager, SessionSettings};
use guru_common::GuruError;
use guru_config::{CredentialResolver, GuruConfig};
use guru_platform::{FileStore, KeyValueStore};
use tracing::info;

use crate::chat::{MessageStore, Notices, TurnOrchestrator};
use crate::cli::Args;

fn open_storage(config: &GuruConfig) -> Result<Box<dyn KeyValueStore>, GuruError> {
    let store = match &config.storage.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::open_default()?,
    };
    info!("History stored under {}", store.dir().display());
    Ok(Box::new(store))
}

pub fn build_orchestrator(config: &GuruConfig, args: &Args) -> Result<TurnOrchestrator, GuruError> {
    let mut model = config.model.clone();
    if let Some(name) = &args.model {
        model.name = name.clone();
    }

    let resolver = CredentialResolver::from_env(config.credentials.candidates.clone());
    let factory =
        GeminiClient::factory(Duration::from_secs(u64::from(model.request_timeout_secs)));
    let sessions = SessionManager::new(SessionSettings::from(&model), resolver, factory)
        .with_empty_reply(config.chat.empty_reply.clone());

    let mut store = MessageStore::new(
        open_storage(config)?,
        config.storage.history_key.clone(),
        config.chat.greeting.clone(),
    );
    store.initialize();
    if args.fresh {
        info!("Starting with a fresh conversation");
        store.clear();
    }

    Ok(TurnOrchestrator::new(
        sessions,
        store,
        Notices::from(&config.chat),
    ))
}
