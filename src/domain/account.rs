use super::text::ResolvableText;
use serde::{Deserialize, Serialize};

/// Reference to a payment method created by the linking collaborator.
///
/// Only the fields the bank form needs are carried; the rest of the payment
/// method lives with whoever created it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentMethod {
    pub id: String,
    /// Payment method type code, e.g. `us_bank_account`.
    pub kind: String,
    #[serde(default)]
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
}

impl PaymentMethod {
    pub const US_BANK_ACCOUNT: &'static str = "us_bank_account";

    pub fn us_bank_account(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Self::US_BANK_ACCOUNT.to_string(),
            livemode: false,
            bank_name: None,
            last4: None,
        }
    }
}

/// How a bank account link was established.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultIdentifier {
    /// A financial connections session that still has to be attached.
    Session { id: String },
    /// A payment method that was created directly.
    PaymentMethod { payment_method: PaymentMethod },
}

impl ResultIdentifier {
    /// The identifier string, whichever variant carries it.
    pub fn id(&self) -> &str {
        match self {
            ResultIdentifier::Session { id } => id,
            ResultIdentifier::PaymentMethod { payment_method } => &payment_method.id,
        }
    }
}

/// A successfully linked bank account, owned by the state that holds it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct LinkedBankAccount {
    pub result_identifier: ResultIdentifier,
    pub bank_name: Option<String>,
    pub last4: Option<String>,
    pub intent_id: Option<String>,
    pub financial_connections_session_id: Option<String>,
    pub mandate_text: ResolvableText,
    pub is_verifying_with_microdeposits: bool,
    #[serde(default)]
    pub eligible_for_incentive: bool,
}

impl LinkedBankAccount {
    /// Creates an account with every optional detail absent.
    pub fn new(result_identifier: ResultIdentifier, mandate_text: ResolvableText) -> Self {
        Self {
            result_identifier,
            bank_name: None,
            last4: None,
            intent_id: None,
            financial_connections_session_id: None,
            mandate_text,
            is_verifying_with_microdeposits: false,
            eligible_for_incentive: false,
        }
    }

    pub fn with_bank(mut self, bank_name: impl Into<String>, last4: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self.last4 = Some(last4.into());
        self
    }

    pub fn with_incentive(mut self, eligible: bool) -> Self {
        self.eligible_for_incentive = eligible;
        self
    }

    pub fn with_microdeposits(mut self, verifying: bool) -> Self {
        self.is_verifying_with_microdeposits = verifying;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_identifier_id() {
        let session = ResultIdentifier::Session {
            id: "fcsess_123".into(),
        };
        assert_eq!(session.id(), "fcsess_123");

        let pm = ResultIdentifier::PaymentMethod {
            payment_method: PaymentMethod::us_bank_account("pm_123"),
        };
        assert_eq!(pm.id(), "pm_123");
    }

    #[test]
    fn test_account_defaults() {
        let account = LinkedBankAccount::new(
            ResultIdentifier::Session { id: "fcsess_1".into() },
            "mandate".into(),
        );
        assert!(!account.eligible_for_incentive);
        assert!(!account.is_verifying_with_microdeposits);
        assert_eq!(account.bank_name, None);
    }

    #[test]
    fn test_missing_incentive_flag_defaults_to_false() {
        let json = r#"{
            "result_identifier": {"type": "session", "id": "fcsess_1"},
            "bank_name": "Test Bank",
            "last4": "6789",
            "intent_id": null,
            "financial_connections_session_id": "fcsess_1",
            "mandate_text": {"kind": "literal", "value": "mandate"},
            "is_verifying_with_microdeposits": false
        }"#;
        let account: LinkedBankAccount = serde_json::from_str(json).unwrap();
        assert!(!account.eligible_for_incentive);
        assert_eq!(account.last4.as_deref(), Some("6789"));
    }
}
