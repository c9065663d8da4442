use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::types::*;
use super::version::PainVersion;

/// Builder for [`SepaDocument`].
///
/// Builders never validate; length limits are enforced when the document
/// is turned into XML.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal_macros::dec;
/// use sepa_pain::core::*;
///
/// let doc = SepaDocumentBuilder::new("MSG-2024-001", Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(), "ACME GmbH")
///     .pain_version(PainVersion::Pain001_001_03)
///     .add_batch(
///         PaymentBatchBuilder::new(
///             "BATCH-1",
///             NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
///             CounterpartyBuilder::new("ACME GmbH", "DE89370400440532013000", "COBADEFFXXX").build(),
///         )
///         .add_payment(
///             PaymentBuilder::new("PAY-1", "Kunde AG", "DE02120300000000202051", "BYLADEM1001", dec!(150))
///                 .remittance_information("Invoice RE-2024-001")
///                 .build(),
///         )
///         .build(),
///     )
///     .build();
///
/// assert_eq!(doc.number_of_transactions(), 1);
/// assert_eq!(doc.control_sum().unwrap(), dec!(150));
/// ```
pub struct SepaDocumentBuilder {
    id: String,
    creation_date_time: DateTime<Utc>,
    initiator_name: String,
    batches: Vec<PaymentBatch>,
    xml_options: XmlOptions,
    batch_booking: Option<bool>,
    local_instrument: Option<LocalInstrument>,
    sequence_type: Option<SequenceType>,
}

impl SepaDocumentBuilder {
    pub fn new(
        id: impl Into<String>,
        creation_date_time: DateTime<Utc>,
        initiator_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            creation_date_time,
            initiator_name: initiator_name.into(),
            batches: Vec::new(),
            xml_options: XmlOptions::default(),
            batch_booking: None,
            local_instrument: None,
            sequence_type: None,
        }
    }

    pub fn pain_version(mut self, version: PainVersion) -> Self {
        self.xml_options.pain_version = Some(version);
        self
    }

    pub fn xml_version(mut self, version: impl Into<String>) -> Self {
        self.xml_options.xml_version = Some(version.into());
        self
    }

    pub fn xml_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.xml_options.xml_encoding = Some(encoding.into());
        self
    }

    pub fn xsi_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.xml_options.xsi_namespace = Some(namespace.into());
        self
    }

    pub fn xsi_xmlns(mut self, prefix: impl Into<String>) -> Self {
        self.xml_options.xsi_xmlns = Some(prefix.into());
        self
    }

    pub fn xml_options(mut self, options: XmlOptions) -> Self {
        self.xml_options = options;
        self
    }

    pub fn batch_booking(mut self, batch_booking: bool) -> Self {
        self.batch_booking = Some(batch_booking);
        self
    }

    pub fn local_instrument(mut self, instrument: LocalInstrument) -> Self {
        self.local_instrument = Some(instrument);
        self
    }

    pub fn sequence_type(mut self, sequence_type: SequenceType) -> Self {
        self.sequence_type = Some(sequence_type);
        self
    }

    pub fn add_batch(mut self, batch: PaymentBatch) -> Self {
        self.batches.push(batch);
        self
    }

    pub fn build(self) -> SepaDocument {
        SepaDocument {
            id: self.id,
            creation_date_time: self.creation_date_time,
            initiator_name: self.initiator_name,
            batches: self.batches,
            xml_options: self.xml_options,
            batch_booking: self.batch_booking,
            local_instrument: self.local_instrument,
            sequence_type: self.sequence_type,
        }
    }
}

/// Builder for [`PaymentBatch`].
pub struct PaymentBatchBuilder {
    id: String,
    batch_booking: Option<bool>,
    requested_execution_date: NaiveDate,
    collection_date: Option<NaiveDate>,
    counterparty: Counterparty,
    payments: Vec<Payment>,
}

impl PaymentBatchBuilder {
    pub fn new(
        id: impl Into<String>,
        requested_execution_date: NaiveDate,
        counterparty: Counterparty,
    ) -> Self {
        Self {
            id: id.into(),
            batch_booking: None,
            requested_execution_date,
            collection_date: None,
            counterparty,
            payments: Vec::new(),
        }
    }

    pub fn batch_booking(mut self, batch_booking: bool) -> Self {
        self.batch_booking = Some(batch_booking);
        self
    }

    pub fn collection_date(mut self, date: NaiveDate) -> Self {
        self.collection_date = Some(date);
        self
    }

    pub fn add_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    pub fn payments(mut self, payments: impl IntoIterator<Item = Payment>) -> Self {
        self.payments.extend(payments);
        self
    }

    pub fn build(self) -> PaymentBatch {
        PaymentBatch {
            id: self.id,
            batch_booking: self.batch_booking,
            requested_execution_date: self.requested_execution_date,
            collection_date: self.collection_date,
            counterparty: self.counterparty,
            payments: self.payments,
        }
    }
}

/// Builder for [`Counterparty`].
pub struct CounterpartyBuilder {
    id: Option<String>,
    name: String,
    iban: String,
    bic: String,
}

impl CounterpartyBuilder {
    pub fn new(name: impl Into<String>, iban: impl Into<String>, bic: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            iban: iban.into(),
            bic: bic.into(),
        }
    }

    /// Creditor scheme identifier (e.g. "DE98ZZZ09999999999").
    pub fn creditor_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn build(self) -> Counterparty {
        Counterparty {
            id: self.id,
            name: self.name,
            iban: self.iban,
            bic: self.bic,
        }
    }
}

/// Builder for [`Payment`].
pub struct PaymentBuilder {
    id: String,
    name: String,
    iban: String,
    bic: String,
    amount: Decimal,
    remittance_information: String,
    end_to_end_reference: Option<String>,
    mandate_id: Option<String>,
    mandate_signature_date: Option<NaiveDate>,
}

impl PaymentBuilder {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        iban: impl Into<String>,
        bic: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            iban: iban.into(),
            bic: bic.into(),
            amount,
            remittance_information: String::new(),
            end_to_end_reference: None,
            mandate_id: None,
            mandate_signature_date: None,
        }
    }

    pub fn remittance_information(mut self, text: impl Into<String>) -> Self {
        self.remittance_information = text.into();
        self
    }

    pub fn end_to_end_reference(mut self, reference: impl Into<String>) -> Self {
        self.end_to_end_reference = Some(reference.into());
        self
    }

    pub fn mandate(mut self, id: impl Into<String>, signature_date: NaiveDate) -> Self {
        self.mandate_id = Some(id.into());
        self.mandate_signature_date = Some(signature_date);
        self
    }

    pub fn mandate_id(mut self, id: impl Into<String>) -> Self {
        self.mandate_id = Some(id.into());
        self
    }

    pub fn mandate_signature_date(mut self, date: NaiveDate) -> Self {
        self.mandate_signature_date = Some(date);
        self
    }

    pub fn build(self) -> Payment {
        Payment {
            id: self.id,
            name: self.name,
            iban: self.iban,
            bic: self.bic,
            amount: self.amount,
            remittance_information: self.remittance_information,
            end_to_end_reference: self.end_to_end_reference,
            mandate_id: self.mandate_id,
            mandate_signature_date: self.mandate_signature_date,
        }
    }
}
