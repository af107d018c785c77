use super::state::BankFormState;
use crate::error::Result;
use async_trait::async_trait;

/// Persisted-state slot for linking sessions, keyed by session id.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn save(&self, session: u32, state: BankFormState) -> Result<()>;
    async fn load(&self, session: u32) -> Result<Option<BankFormState>>;
    async fn all(&self) -> Result<Vec<(u32, BankFormState)>>;
}

pub type StateStoreBox = Box<dyn StateStore>;
pub type StateStoreFactory = Box<dyn Fn() -> StateStoreBox + Send + Sync>;
