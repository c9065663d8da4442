use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sepa_pain::core::*;
use sepa_pain::pain;

fn main() {
    // Pay two suppliers from the company account in one batch
    let doc = SepaDocumentBuilder::new("MSG-2024-06-15-001", Utc::now(), "ACME GmbH")
        .pain_version(PainVersion::Pain001_001_03)
        .add_batch(
            PaymentBatchBuilder::new(
                "PMTINF-2024-06-15-001",
                NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
                CounterpartyBuilder::new("ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
                    .build(),
            )
            .batch_booking(true)
            .add_payment(
                PaymentBuilder::new(
                    "PAY-001",
                    "Bürobedarf Schmidt",
                    "DE02120300000000202051",
                    "BYLADEM1001",
                    dec!(249.90),
                )
                .remittance_information("RE-2024-0815")
                .end_to_end_reference("E2E-2024-0815")
                .build(),
            )
            .add_payment(
                PaymentBuilder::new(
                    "PAY-002",
                    "Hosting AG",
                    "DE02100100109307118603",
                    "PBNKDEFFXXX",
                    dec!(49.00),
                )
                .remittance_information("Server Juni 2024")
                .build(),
            )
            .build(),
        )
        .build();

    println!("Transactions: {}", doc.number_of_transactions());
    let control_sum = doc.control_sum().and_then(format_amount).unwrap();
    println!("Control sum:  {control_sum}");

    let xml = pain::to_pain_xml(&doc, true).unwrap();
    println!("\n{xml}");
}
