use crate::domain::event::{FlowConfig, LinkEvent};
use crate::domain::ports::StateStoreBox;
use crate::domain::state::BankFormState;
use crate::error::{LinkError, Result};
use tracing::{debug, warn};

/// An instruction for one linking session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SessionCommand {
    /// Opens a session with its fixed configuration.
    Start { session: u32, config: FlowConfig },
    /// Feeds an event into an open session.
    Apply { session: u32, event: LinkEvent },
}

impl SessionCommand {
    pub fn session(&self) -> u32 {
        match self {
            SessionCommand::Start { session, .. } | SessionCommand::Apply { session, .. } => {
                *session
            }
        }
    }
}

/// Replays recorded linking events across many sessions.
///
/// `ReplayEngine` is the orchestrator for recorded flows: it owns the state
/// store and is the only writer of every session in it. Commands are applied
/// in the order they are submitted, and each one is persisted before the
/// next is accepted.
pub struct ReplayEngine {
    state_store: StateStoreBox,
}

impl ReplayEngine {
    /// Creates a new `ReplayEngine` on top of the given store.
    ///
    /// Sessions already present in the store are resumed.
    pub fn new(state_store: StateStoreBox) -> Self {
        Self { state_store }
    }

    /// Processes a single command and returns the resulting state.
    pub async fn process(&self, command: SessionCommand) -> Result<BankFormState> {
        match command {
            SessionCommand::Start { session, config } => {
                // Ignore duplicate starts so a resumed session keeps its progress
                if let Some(existing) = self.state_store.load(session).await? {
                    warn!(session, "session already started, ignoring start");
                    return Ok(existing);
                }
                let state = BankFormState::new(config);
                debug!(session, "session started");
                self.state_store.save(session, state.clone()).await?;
                Ok(state)
            }
            SessionCommand::Apply { session, event } => {
                let current = self
                    .state_store
                    .load(session)
                    .await?
                    .ok_or(LinkError::UnknownSession(session))?;
                let next = current.apply(&event);
                debug!(
                    session,
                    event = event.name(),
                    phase = ?next.phase(),
                    "applied link event"
                );
                if next != current {
                    self.state_store.save(session, next.clone()).await?;
                }
                Ok(next)
            }
        }
    }

    /// Consumes the engine and returns the final state of every session,
    /// ordered by session id.
    pub async fn into_results(self) -> Result<Vec<(u32, BankFormState)>> {
        let mut sessions = self.state_store.all().await?;
        sessions.sort_by_key(|(session, _)| *session);
        Ok(sessions)
    }
}
