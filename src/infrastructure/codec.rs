use crate::domain::state::BankFormState;
use crate::error::{LinkError, Result};
use serde::{Deserialize, Serialize};

/// Version written into every snapshot.
pub const SNAPSHOT_VERSION: u8 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u8,
    state: &'a BankFormState,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u8,
    state: serde_json::Value,
}

/// Encodes a state into an opaque, versioned snapshot.
pub fn encode(state: &BankFormState) -> Result<Vec<u8>> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        state,
    };
    Ok(serde_json::to_vec(&snapshot)?)
}

/// Restores a state from a snapshot produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<BankFormState> {
    let snapshot: Snapshot = serde_json::from_slice(bytes)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(LinkError::SnapshotError(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }
    Ok(serde_json::from_value(snapshot.state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{LinkedBankAccount, PaymentMethod, ResultIdentifier};
    use crate::domain::event::FlowConfig;
    use crate::domain::text::{ResolvableText, TextTemplate};

    fn payment_method_account() -> LinkedBankAccount {
        let mut payment_method = PaymentMethod::us_bank_account("pm_123");
        payment_method.bank_name = Some("STRIPE TEST BANK".into());
        payment_method.last4 = Some("6789".into());
        LinkedBankAccount {
            result_identifier: ResultIdentifier::PaymentMethod { payment_method },
            bank_name: Some("STRIPE TEST BANK".into()),
            last4: Some("6789".into()),
            intent_id: Some("pi_123".into()),
            financial_connections_session_id: None,
            mandate_text: ResolvableText::template(
                TextTemplate::PromoForSetup,
                vec!["ignored".into()],
            ),
            is_verifying_with_microdeposits: true,
            eligible_for_incentive: true,
        }
    }

    #[test]
    fn test_snapshot_preserves_every_field() {
        let processing = BankFormState::new(FlowConfig::setup().with_promo("10 OFF"))
            .begin_processing();
        let linked = processing.attach_linked_account(payment_method_account());
        let failed = BankFormState::new(FlowConfig::payment())
            .begin_processing()
            .attach_error("Linking failed".into());

        for state in [processing, linked, failed] {
            let restored = decode(&encode(&state).unwrap()).unwrap();
            assert_eq!(restored, state);
            assert_eq!(restored.is_processing(), state.is_processing());
            assert_eq!(restored.promo_badge(), state.promo_badge());
        }
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let account = LinkedBankAccount::new(
            ResultIdentifier::Session {
                id: "fcsess_1".into(),
            },
            "Mandate".into(),
        );
        let state = BankFormState::new(FlowConfig::payment()).attach_linked_account(account);
        let restored = decode(&encode(&state).unwrap()).unwrap();

        let account = restored.linked_account().unwrap();
        assert_eq!(account.bank_name, None);
        assert_eq!(account.intent_id, None);
        assert_eq!(restored.promo_text(), None);
        assert_eq!(restored.error(), None);
    }

    #[test]
    fn test_processing_flag_survives_hidden_behind_account() {
        // the raw flag is persisted even though is_processing() masks it
        let bytes = br#"{"version":1,"state":{
            "is_payment_flow":true,
            "is_processing":true,
            "linked_account":{
                "result_identifier":{"type":"session","id":"fcsess_1"},
                "bank_name":null,"last4":null,"intent_id":null,
                "financial_connections_session_id":null,
                "mandate_text":{"kind":"literal","value":"m"},
                "is_verifying_with_microdeposits":false
            }
        }}"#;
        let state = decode(bytes).unwrap();
        assert!(!state.is_processing());
        assert_eq!(decode(&encode(&state).unwrap()).unwrap(), state);
        assert!(state.reset().linked_account().is_none());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let bytes = br#"{"version":2,"state":{}}"#;
        assert!(matches!(decode(bytes), Err(LinkError::SnapshotError(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(decode(b"not json"), Err(LinkError::SnapshotError(_))));
    }
}
