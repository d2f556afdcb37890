//! Session state tracker: chat id → [`SessionState`], kept for the life of the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::SessionState;

/// Shared map of chat states. Cloning shares the same map.
///
/// Updates for one chat arrive in order; different chats may read and write concurrently.
#[derive(Clone, Default)]
pub struct SessionStore {
    states: Arc<RwLock<HashMap<i64, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the chat's state.
    pub async fn set(&self, chat_id: i64, state: SessionState) {
        self.states.write().await.insert(chat_id, state);
    }

    /// The chat's state, or [`SessionState::NoState`] for a chat never seen.
    pub async fn get(&self, chat_id: i64) -> SessionState {
        self.states
            .read()
            .await
            .get(&chat_id)
            .copied()
            .unwrap_or_default()
    }
}
