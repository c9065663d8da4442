//! ISO 20022 pain XML generation (pain.001 credit transfers, pain.008
//! direct debits).
//!
//! A [`SepaDocument`](crate::core::SepaDocument) is first turned into a
//! declarative [`Element`] tree ([`build_pain_document`]) and then
//! serialized with quick-xml ([`PainDocument::to_xml`]).
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use rust_decimal_macros::dec;
//! use sepa_pain::core::*;
//! use sepa_pain::pain;
//!
//! let creditor = CounterpartyBuilder::new("Sportverein e.V.", "DE89370400440532013000", "COBADEFFXXX")
//!     .creditor_id("DE98ZZZ09999999999")
//!     .build();
//! let document = SepaDocumentBuilder::new("MSG-DD-1", Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(), "Sportverein e.V.")
//!     .pain_version(PainVersion::Pain008_003_02)
//!     .local_instrument(LocalInstrument::Core)
//!     .sequence_type(SequenceType::Recurring)
//!     .add_batch(
//!         PaymentBatchBuilder::new("BATCH-1", NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(), creditor)
//!             .collection_date(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap())
//!             .add_payment(
//!                 PaymentBuilder::new("PAY-1", "Erika Mustermann", "DE02120300000000202051", "BYLADEM1001", dec!(25))
//!                     .mandate("MNDT-1", NaiveDate::from_ymd_opt(2022, 5, 1).unwrap())
//!                     .remittance_information("Beitrag 2024")
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let xml = pain::to_pain_xml(&document, false).unwrap();
//! assert!(xml.contains("<PmtMtd>DD</PmtMtd>"));
//! assert!(xml.contains("<SeqTp>RCUR</SeqTp>"));
//! assert!(xml.contains("<MndtId>MNDT-1</MndtId>"));
//! ```

mod batch;
mod document;
mod transaction;
mod tree;
mod writer;

pub use document::{PainDocument, build_pain_document, to_pain_xml};
pub use tree::{Element, Node};
pub use writer::{Declaration, XmlWriter, write_document};

/// Currency of every amount.
pub const CURRENCY: &str = "EUR";
/// Service level code (`SvcLvl/Cd`).
pub const SERVICE_LEVEL: &str = "SEPA";
/// Charge bearer code (`ChrgBr`): shared charges.
pub const CHARGE_BEARER: &str = "SLEV";
/// Proprietary scheme name of the creditor scheme identifier.
pub const PROPRIETARY_SCHEME: &str = "SEPA";
/// Grouping mode (`Grpg`) of revision 2 group headers.
pub const GROUPING: &str = "MIXD";

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Namespace prefix the pain version is appended to.
pub const XSI_XMLS: &str = "urn:iso:std:iso:20022:tech:xsd:";
pub const XML_VERSION: &str = "1.0";
pub const XML_ENCODING: &str = "UTF-8";

fn party(name: &str) -> Element {
    Element::new().child("Nm", name)
}

fn account(iban: &str) -> Element {
    Element::new().child("Id", Element::new().child("IBAN", iban))
}

fn agent(bic: &str) -> Element {
    Element::new().child("FinInstnId", Element::new().child("BIC", bic))
}
