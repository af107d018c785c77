use crate::domain::state::{BankFormState, LinkPhase};
use serde::Serialize;

/// Flattened, display-ready projection of a [`BankFormState`].
///
/// This is what a renderer consumes: derived values are already computed and
/// text is resolved.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct BankFormView {
    pub session: u32,
    pub phase: LinkPhase,
    pub processing: bool,
    pub bank_name: Option<String>,
    pub last4: Option<String>,
    pub promo: Option<String>,
    pub promo_eligible: Option<bool>,
    pub disclaimer: Option<String>,
    pub mandate: Option<String>,
    pub error: Option<String>,
}

impl BankFormView {
    pub fn new(session: u32, state: &BankFormState) -> Self {
        let account = state.linked_account();
        let badge = state.promo_badge();
        Self {
            session,
            phase: state.phase(),
            processing: state.is_processing(),
            bank_name: account.and_then(|a| a.bank_name.clone()),
            last4: account.and_then(|a| a.last4.clone()),
            promo_eligible: badge.as_ref().map(|b| b.eligible),
            promo: badge.map(|b| b.promo_text),
            disclaimer: state.promo_disclaimer_text().map(|t| t.resolve()),
            mandate: account.map(|a| a.mandate_text.resolve()),
            error: state.error().map(|e| e.resolve()),
        }
    }
}
