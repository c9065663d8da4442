//! # sepa-pain
//!
//! SEPA payment file generation: turns a batch of credit transfer or
//! direct debit instructions into an ISO 20022 pain.001 / pain.008 XML
//! document for one of eight supported schema versions.
//!
//! All monetary values use [`rust_decimal::Decimal`] and are rendered with
//! exactly two decimals, rounding half-up.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use rust_decimal_macros::dec;
//! use sepa_pain::core::*;
//! use sepa_pain::pain;
//!
//! let doc = SepaDocumentBuilder::new("MSG-001", Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap(), "ACME GmbH")
//!     .add_batch(
//!         PaymentBatchBuilder::new(
//!             "BATCH-001",
//!             NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
//!             CounterpartyBuilder::new("ACME GmbH", "DE89370400440532013000", "COBADEFFXXX").build(),
//!         )
//!         .add_payment(
//!             PaymentBuilder::new("PAY-001", "Kunde AG", "DE02120300000000202051", "BYLADEM1001", dec!(100))
//!                 .remittance_information("RE-2024-001")
//!                 .build(),
//!         )
//!         .build(),
//!     )
//!     .build();
//!
//! let xml = pain::to_pain_xml(&doc, false).unwrap();
//! assert!(xml.contains("<PmtMtd>TRF</PmtMtd>"));
//! assert!(xml.contains(r#"<InstdAmt Ccy="EUR">100.00</InstdAmt>"#));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Input types, builders, version resolution, length validation |
//! | `pain` (default) | XML tree assembly and quick-xml serialization |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pain")]
pub mod pain;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
