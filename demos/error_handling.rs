use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sepa_pain::core::*;
use sepa_pain::pain;

fn main() {
    // ── 1. Unknown schema selector ────────────────────────────────────
    println!("=== Configuration Error ===");
    match resolve_str("pain.001.001.09") {
        Ok(schema) => println!("  Resolved: {schema:?}"),
        Err(e) => println!("  {e}"),
    }

    // ── 2. Length violation on a payment name ─────────────────────────
    println!("\n=== Length Error ===");
    let doc = SepaDocumentBuilder::new("MSG-1", Utc::now(), "ACME GmbH")
        .add_batch(
            PaymentBatchBuilder::new(
                "BATCH-1",
                NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
                CounterpartyBuilder::new("ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
                    .build(),
            )
            .add_payment(
                PaymentBuilder::new(
                    "PAY-1",
                    "Internationale Handelsgesellschaft für Maschinenbau mbH",
                    "DE02120300000000202051",
                    "BYLADEM1001",
                    dec!(10),
                )
                .build(),
            )
            .build(),
        )
        .build();

    match pain::to_pain_xml(&doc, false) {
        Ok(_) => println!("  Generated"),
        Err(SepaError::Length {
            field,
            max_length,
            actual_length,
        }) => println!("  {field}: {actual_length} characters, at most {max_length} allowed"),
        Err(e) => println!("  {e}"),
    }
}
