use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sepa_pain::core::*;
use sepa_pain::pain;

fn main() {
    let collection = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

    // Collect membership fees under SEPA Core, recurring mandates
    let doc = SepaDocumentBuilder::new("DD-2024-07", Utc::now(), "Sportverein Musterstadt e.V.")
        .pain_version(PainVersion::Pain008_003_02)
        .local_instrument(LocalInstrument::Core)
        .sequence_type(SequenceType::Recurring)
        .add_batch(
            PaymentBatchBuilder::new(
                "DD-2024-07-BATCH-1",
                collection,
                CounterpartyBuilder::new(
                    "Sportverein Musterstadt e.V.",
                    "DE89370400440532013000",
                    "COBADEFFXXX",
                )
                .creditor_id("DE98ZZZ09999999999")
                .build(),
            )
            .collection_date(collection)
            .add_payment(
                PaymentBuilder::new(
                    "MEMBER-0042",
                    "Erika Mustermann",
                    "DE02120300000000202051",
                    "BYLADEM1001",
                    dec!(36),
                )
                .remittance_information("Mitgliedsbeitrag Q3 2024")
                .mandate("MNDT-0042", NaiveDate::from_ymd_opt(2021, 3, 14).unwrap())
                .build(),
            )
            .add_payment(
                // Mandate data missing: elements are still emitted, empty
                PaymentBuilder::new(
                    "MEMBER-0043",
                    "Max Mustermann",
                    "DE02100100109307118603",
                    "PBNKDEFFXXX",
                    dec!(36),
                )
                .remittance_information("Mitgliedsbeitrag Q3 2024")
                .build(),
            )
            .build(),
        )
        .build();

    match pain::build_pain_document(&doc) {
        Ok(pain_doc) => {
            println!(
                "{} (revision {})",
                pain_doc.schema.version, pain_doc.schema.revision
            );
            println!("{}", pain_doc.to_xml(true).unwrap());
        }
        Err(e) => eprintln!("Generation failed: {e}"),
    }
}
