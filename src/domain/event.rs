use super::account::LinkedBankAccount;
use super::text::ResolvableText;

/// Configuration fixed for the lifetime of a linking session.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FlowConfig {
    /// `true` for a one-time payment, `false` for saving the account.
    pub is_payment_flow: bool,
    pub promo_text: Option<String>,
}

impl FlowConfig {
    pub fn payment() -> Self {
        Self {
            is_payment_flow: true,
            promo_text: None,
        }
    }

    pub fn setup() -> Self {
        Self {
            is_payment_flow: false,
            promo_text: None,
        }
    }

    pub fn with_promo(mut self, promo_text: impl Into<String>) -> Self {
        self.promo_text = Some(promo_text.into());
        self
    }
}

/// Something that happened in the linking flow.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LinkEvent {
    /// A linking operation started.
    Processing,
    /// An account was linked successfully.
    Linked(LinkedBankAccount),
    /// Mandate text arrived. May be empty or arrive before the link.
    Mandate(Option<ResolvableText>),
    /// Linking failed.
    Failed(ResolvableText),
    /// The user dropped the linked account and starts over.
    Reset,
}

impl LinkEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LinkEvent::Processing => "processing",
            LinkEvent::Linked(_) => "linked",
            LinkEvent::Mandate(_) => "mandate",
            LinkEvent::Failed(_) => "failed",
            LinkEvent::Reset => "reset",
        }
    }
}
