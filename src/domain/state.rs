use super::account::LinkedBankAccount;
use super::event::{FlowConfig, LinkEvent};
use super::text::{ResolvableText, TextTemplate};
use serde::{Deserialize, Serialize};

/// Promo badge shown next to a linked account.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PromoBadge {
    pub promo_text: String,
    pub eligible: bool,
}

/// Logical position of a state in the linking flow.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LinkPhase {
    Idle,
    Processing,
    Linked,
}

/// State of the bank account form during a linking session.
///
/// Values are immutable: every transition returns a new state. The processing
/// flag is stored as-is but only ever read through [`BankFormState::is_processing`],
/// which hides it once an account is linked.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BankFormState {
    is_payment_flow: bool,
    #[serde(default)]
    promo_text: Option<String>,
    #[serde(default, rename = "is_processing")]
    processing_flag: bool,
    #[serde(default)]
    linked_account: Option<LinkedBankAccount>,
    #[serde(default)]
    error: Option<ResolvableText>,
}

impl BankFormState {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            is_payment_flow: config.is_payment_flow,
            promo_text: config.promo_text,
            processing_flag: false,
            linked_account: None,
            error: None,
        }
    }

    pub fn config(&self) -> FlowConfig {
        FlowConfig {
            is_payment_flow: self.is_payment_flow,
            promo_text: self.promo_text.clone(),
        }
    }

    pub fn is_payment_flow(&self) -> bool {
        self.is_payment_flow
    }

    pub fn promo_text(&self) -> Option<&str> {
        self.promo_text.as_deref()
    }

    pub fn linked_account(&self) -> Option<&LinkedBankAccount> {
        self.linked_account.as_ref()
    }

    pub fn error(&self) -> Option<&ResolvableText> {
        self.error.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing_flag && self.linked_account.is_none()
    }

    pub fn phase(&self) -> LinkPhase {
        if self.linked_account.is_some() {
            LinkPhase::Linked
        } else if self.processing_flag {
            LinkPhase::Processing
        } else {
            LinkPhase::Idle
        }
    }

    pub fn promo_badge(&self) -> Option<PromoBadge> {
        match (&self.promo_text, &self.linked_account) {
            (Some(promo_text), Some(account)) => Some(PromoBadge {
                promo_text: promo_text.clone(),
                eligible: account.eligible_for_incentive,
            }),
            _ => None,
        }
    }

    pub fn promo_disclaimer_text(&self) -> Option<ResolvableText> {
        let promo_text = self.promo_text.as_ref()?;
        if self
            .linked_account
            .as_ref()
            .is_some_and(|account| !account.eligible_for_incentive)
        {
            return None;
        }
        let template = if self.is_payment_flow {
            TextTemplate::PromoForPayment
        } else {
            TextTemplate::PromoForSetup
        };
        Some(ResolvableText::template(template, vec![promo_text.clone()]))
    }

    /// Marks a linking operation as started.
    pub fn begin_processing(&self) -> Self {
        Self {
            processing_flag: true,
            ..self.clone()
        }
    }

    /// Records a successful link, clearing processing and any error.
    pub fn attach_linked_account(&self, account: LinkedBankAccount) -> Self {
        Self {
            processing_flag: false,
            linked_account: Some(account),
            error: None,
            ..self.clone()
        }
    }

    /// Replaces the mandate of the linked account.
    ///
    /// Mandate text arriving before the link, or arriving empty, is ignored.
    pub fn update_mandate_text(&self, mandate: Option<ResolvableText>) -> Self {
        match (&self.linked_account, mandate) {
            (Some(account), Some(mandate)) => Self {
                linked_account: Some(LinkedBankAccount {
                    mandate_text: mandate,
                    ..account.clone()
                }),
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Records a failed link. The form starts over with the error shown.
    pub fn attach_error(&self, error: ResolvableText) -> Self {
        Self {
            error: Some(error),
            ..Self::new(self.config())
        }
    }

    /// Drops the linked account and any error, keeping the configuration.
    pub fn reset(&self) -> Self {
        Self::new(self.config())
    }

    pub fn apply(&self, event: &LinkEvent) -> Self {
        match event {
            LinkEvent::Processing => self.begin_processing(),
            LinkEvent::Linked(account) => self.attach_linked_account(account.clone()),
            LinkEvent::Mandate(mandate) => self.update_mandate_text(mandate.clone()),
            LinkEvent::Failed(error) => self.attach_error(error.clone()),
            LinkEvent::Reset => self.reset(),
        }
    }
}
