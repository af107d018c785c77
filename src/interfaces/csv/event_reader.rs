use crate::application::engine::SessionCommand;
use crate::domain::account::{LinkedBankAccount, PaymentMethod, ResultIdentifier};
use crate::domain::event::{FlowConfig, LinkEvent};
use crate::domain::text::ResolvableText;
use crate::error::{LinkError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Start,
    Processing,
    LinkSession,
    LinkPaymentMethod,
    Mandate,
    Error,
    Reset,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Payment,
    Setup,
}

/// One row of a recorded linking flow.
///
/// Columns are `type, session, flow, id, bank_name, last4, eligible,
/// microdeposits, text`; trailing columns may be omitted.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EventRecord {
    pub r#type: EventType,
    pub session: u32,
    #[serde(default)]
    pub flow: Option<FlowKind>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub eligible: Option<bool>,
    #[serde(default)]
    pub microdeposits: Option<bool>,
    #[serde(default)]
    pub text: Option<String>,
}

impl EventRecord {
    fn require_id(&mut self) -> Result<String> {
        self.id.take().ok_or_else(|| {
            LinkError::InvalidEvent(format!(
                "{:?} on session {} needs an id",
                self.r#type, self.session
            ))
        })
    }

    fn require_text(&mut self) -> Result<ResolvableText> {
        self.text.take().map(ResolvableText::literal).ok_or_else(|| {
            LinkError::InvalidEvent(format!(
                "{:?} on session {} needs text",
                self.r#type, self.session
            ))
        })
    }

    fn linked_account(
        &mut self,
        result_identifier: ResultIdentifier,
    ) -> Result<LinkedBankAccount> {
        let mandate = self.require_text()?;
        let mut account = LinkedBankAccount::new(result_identifier, mandate)
            .with_incentive(self.eligible.unwrap_or(false))
            .with_microdeposits(self.microdeposits.unwrap_or(false));
        account.bank_name = self.bank_name.take();
        account.last4 = self.last4.take();
        Ok(account)
    }
}

impl TryFrom<EventRecord> for SessionCommand {
    type Error = LinkError;

    fn try_from(mut record: EventRecord) -> Result<Self> {
        let session = record.session;
        let event = match record.r#type {
            EventType::Start => {
                let config = match record.flow {
                    Some(FlowKind::Payment) => FlowConfig::payment(),
                    Some(FlowKind::Setup) => FlowConfig::setup(),
                    None => {
                        return Err(LinkError::InvalidEvent(format!(
                            "Start on session {session} needs a flow"
                        )));
                    }
                };
                let config = FlowConfig {
                    promo_text: record.text,
                    ..config
                };
                return Ok(SessionCommand::Start { session, config });
            }
            EventType::Processing => LinkEvent::Processing,
            EventType::LinkSession => {
                let id = record.require_id()?;
                let mut account =
                    record.linked_account(ResultIdentifier::Session { id: id.clone() })?;
                account.financial_connections_session_id = Some(id);
                LinkEvent::Linked(account)
            }
            EventType::LinkPaymentMethod => {
                let mut payment_method = PaymentMethod::us_bank_account(record.require_id()?);
                payment_method.bank_name = record.bank_name.clone();
                payment_method.last4 = record.last4.clone();
                LinkEvent::Linked(
                    record.linked_account(ResultIdentifier::PaymentMethod { payment_method })?,
                )
            }
            EventType::Mandate => LinkEvent::Mandate(record.text.map(ResolvableText::literal)),
            EventType::Error => LinkEvent::Failed(record.require_text()?),
            EventType::Reset => LinkEvent::Reset,
        };
        Ok(SessionCommand::Apply { session, event })
    }
}

/// Reads session commands from a CSV source.
///
/// Handles whitespace trimming and rows with omitted trailing columns.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads rows and turns them into commands.
    pub fn commands(self) -> impl Iterator<Item = Result<SessionCommand>> {
        self.reader
            .into_deserialize::<EventRecord>()
            .map(|result| {
                result
                    .map_err(LinkError::from)
                    .and_then(SessionCommand::try_from)
            })
    }
}
