//! Application factories for HTTP tests

use keygate::config::Config;
use keygate::core::keys::KeyManager;
use keygate::notifications::NotificationSink;
use keygate::server::AppState;
use keygate::storage::{KeyStore, MemoryKeyStore};
use actix_web::web;
use std::sync::Arc;

/// State backed by a fresh memory store, without notifications
pub fn memory_state() -> (web::Data<AppState>, Arc<MemoryKeyStore>) {
    let store = Arc::new(MemoryKeyStore::new());
    let keys = KeyManager::without_notifications(store.clone());
    (web::Data::new(AppState::new(Config::default(), keys)), store)
}

/// State backed by a fresh memory store and the given sink
pub fn state_with_sink(sink: Arc<dyn NotificationSink>) -> web::Data<AppState> {
    let store: Arc<dyn KeyStore> = Arc::new(MemoryKeyStore::new());
    web::Data::new(AppState::new(Config::default(), KeyManager::new(store, sink)))
}

/// Query string for `/check`
pub fn check_uri(key: &str) -> String {
    format!("/check?key={}", key)
}

/// Query string for `/generate`
pub fn generate_uri(expired: &str) -> String {
    format!("/generate?expired={}", expired)
}
