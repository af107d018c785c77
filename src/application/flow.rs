use crate::domain::account::LinkedBankAccount;
use crate::domain::event::{FlowConfig, LinkEvent};
use crate::domain::state::BankFormState;
use crate::domain::text::ResolvableText;
use tokio::sync::watch;
use tracing::debug;

/// The writer side of one linking session.
///
/// `LinkFlow` owns the latest [`BankFormState`] and publishes every change on
/// a `watch` channel. Renderers call [`LinkFlow::subscribe`] and always observe
/// complete snapshots; a newer snapshot replaces the previous one. Mutation
/// needs `&mut self` and the type is not `Clone`, so a session has exactly one
/// writer.
pub struct LinkFlow {
    sender: watch::Sender<BankFormState>,
}

impl LinkFlow {
    pub fn new(config: FlowConfig) -> Self {
        Self::restore(BankFormState::new(config))
    }

    /// Resumes a session from a previously persisted snapshot.
    pub fn restore(state: BankFormState) -> Self {
        let (sender, _) = watch::channel(state);
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<BankFormState> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> BankFormState {
        self.sender.borrow().clone()
    }

    /// Applies an event and returns the resulting snapshot.
    ///
    /// Subscribers are only woken when the snapshot actually changed.
    pub fn apply(&mut self, event: LinkEvent) -> BankFormState {
        let changed = self.sender.send_if_modified(|state| {
            let next = state.apply(&event);
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        });
        debug!(event = event.name(), changed, "applied link event");
        self.current()
    }

    pub fn begin_processing(&mut self) -> BankFormState {
        self.apply(LinkEvent::Processing)
    }

    pub fn attach_linked_account(&mut self, account: LinkedBankAccount) -> BankFormState {
        self.apply(LinkEvent::Linked(account))
    }

    pub fn update_mandate_text(&mut self, mandate: Option<ResolvableText>) -> BankFormState {
        self.apply(LinkEvent::Mandate(mandate))
    }

    pub fn attach_error(&mut self, error: ResolvableText) -> BankFormState {
        self.apply(LinkEvent::Failed(error))
    }

    pub fn reset(&mut self) -> BankFormState {
        self.apply(LinkEvent::Reset)
    }

    /// Ends the session, handing back the final snapshot.
    pub fn into_state(self) -> BankFormState {
        self.current()
    }
}
