use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SepaError;
use super::version::PainVersion;

/// Add amounts, failing instead of overflowing.
fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Decimal>) -> Result<Decimal, SepaError> {
    amounts.into_iter().try_fold(Decimal::ZERO, |sum, amount| {
        sum.checked_add(*amount)
            .ok_or_else(|| SepaError::Arithmetic(format!("control sum overflows at {sum} + {amount}")))
    })
}

/// The top-level instruction: one pain message with one or more batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepaDocument {
    /// `MsgId`, at most 35 characters.
    pub id: String,
    /// `CreDtTm`, rendered in UTC with whole-second precision.
    pub creation_date_time: DateTime<Utc>,
    /// `InitgPty/Nm`, at most 70 characters.
    pub initiator_name: String,
    /// `PmtInf` blocks, in output order.
    pub batches: Vec<PaymentBatch>,
    /// Schema selector and XML prolog/namespace overrides.
    #[serde(default)]
    pub xml_options: XmlOptions,
    /// Group-level batch booking, only emitted for revision 2 schemas.
    #[serde(default)]
    pub batch_booking: Option<bool>,
    /// Direct debit local instrument (`LclInstrm/Cd`).
    #[serde(default)]
    pub local_instrument: Option<LocalInstrument>,
    /// Direct debit sequence type (`SeqTp`).
    #[serde(default)]
    pub sequence_type: Option<SequenceType>,
}

impl SepaDocument {
    /// Total number of payments across all batches.
    pub fn number_of_transactions(&self) -> usize {
        self.batches.iter().map(|b| b.payments.len()).sum()
    }

    /// Sum of every payment amount across all batches (unrounded).
    pub fn control_sum(&self) -> Result<Decimal, SepaError> {
        checked_sum(self.batches.iter().flat_map(|b| b.payments.iter().map(|p| &p.amount)))
    }

    /// Selected schema, falling back to `pain.001.001.03`.
    pub fn pain_version(&self) -> PainVersion {
        self.xml_options.pain_version.unwrap_or_default()
    }
}

/// Per-call overrides for the schema selector and the XML envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlOptions {
    pub pain_version: Option<PainVersion>,
    /// Declared XML version (default "1.0").
    pub xml_version: Option<String>,
    /// Declared encoding (default "UTF-8").
    pub xml_encoding: Option<String>,
    /// `xmlns:xsi` value.
    pub xsi_namespace: Option<String>,
    /// Prefix the pain version is appended to for `xmlns` and `xsi:schemaLocation`.
    pub xsi_xmlns: Option<String>,
}

/// One payment information block (`PmtInf`): all payments to or from
/// a single counterparty account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBatch {
    /// `PmtInfId`, at most 35 characters.
    pub id: String,
    #[serde(default)]
    pub batch_booking: Option<bool>,
    /// `ReqdExctnDt` for credit transfers.
    pub requested_execution_date: NaiveDate,
    /// `ReqdColltnDt` for direct debits.
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
    /// Debtor of a credit transfer batch, creditor of a direct debit batch.
    pub counterparty: Counterparty,
    pub payments: Vec<Payment>,
}

impl PaymentBatch {
    /// Sum of the batch's payment amounts (unrounded).
    pub fn control_sum(&self) -> Result<Decimal, SepaError> {
        checked_sum(self.payments.iter().map(|p| &p.amount))
    }
}

/// Account holder on the batch side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterparty {
    /// Creditor scheme identifier (direct debit only).
    #[serde(default)]
    pub id: Option<String>,
    /// At most 70 characters.
    pub name: String,
    pub iban: String,
    pub bic: String,
}

/// A single transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// `InstrId`, at most 35 characters.
    pub id: String,
    /// Creditor (credit transfer) or debtor (direct debit) name, at most 35 characters.
    pub name: String,
    pub iban: String,
    pub bic: String,
    pub amount: Decimal,
    /// `RmtInf/Ustrd`.
    pub remittance_information: String,
    /// `EndToEndId`; an empty string counts as absent.
    #[serde(default)]
    pub end_to_end_reference: Option<String>,
    #[serde(default)]
    pub mandate_id: Option<String>,
    #[serde(default)]
    pub mandate_signature_date: Option<NaiveDate>,
}

/// Direct debit scheme (`LclInstrm/Cd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalInstrument {
    /// SEPA Core direct debit.
    #[serde(rename = "CORE")]
    Core,
    /// SEPA Core with D+1 presentation.
    #[serde(rename = "COR1")]
    Cor1,
    /// SEPA business-to-business direct debit.
    #[serde(rename = "B2B")]
    B2b,
}

impl LocalInstrument {
    pub fn code(&self) -> &'static str {
        match self {
            LocalInstrument::Core => "CORE",
            LocalInstrument::Cor1 => "COR1",
            LocalInstrument::B2b => "B2B",
        }
    }
}

/// Direct debit sequence type (`SeqTp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    /// First collection of a recurring mandate.
    #[serde(rename = "FRST")]
    First,
    /// Subsequent collection of a recurring mandate.
    #[serde(rename = "RCUR")]
    Recurring,
    /// One-off collection.
    #[serde(rename = "OOFF")]
    OneOff,
    /// Final collection of a recurring mandate.
    #[serde(rename = "FNAL")]
    Final,
}

impl SequenceType {
    pub fn code(&self) -> &'static str {
        match self {
            SequenceType::First => "FRST",
            SequenceType::Recurring => "RCUR",
            SequenceType::OneOff => "OOFF",
            SequenceType::Final => "FNAL",
        }
    }
}
