use crate::domain::ports::StateStore;
use crate::domain::state::BankFormState;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for session states.
///
/// Uses `Arc<RwLock<HashMap<u32, BankFormState>>>` to allow shared concurrent access.
/// Clones share the same sessions.
#[derive(Default, Clone)]
pub struct InMemoryStateStore {
    sessions: Arc<RwLock<HashMap<u32, BankFormState>>>,
}

impl InMemoryStateStore {
    /// Creates a new, empty in-memory state store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn save(&self, session: u32, state: BankFormState) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session, state);
        Ok(())
    }

    async fn load(&self, session: u32) -> Result<Option<BankFormState>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&session).cloned())
    }

    async fn all(&self) -> Result<Vec<(u32, BankFormState)>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .map(|(session, state)| (*session, state.clone()))
            .collect())
    }
}
