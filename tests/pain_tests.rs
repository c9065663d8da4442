#![cfg(feature = "pain")]

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sepa_pain::core::*;
use sepa_pain::pain::{self, Element, Node, PainDocument};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn account_holder() -> Counterparty {
    CounterpartyBuilder::new("ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
        .creditor_id("DE98ZZZ09999999999")
        .build()
}

fn payment(id: &str, amount: Decimal) -> Payment {
    PaymentBuilder::new(id, "Kunde AG", "DE02120300000000202051", "BYLADEM1001", amount)
        .remittance_information(format!("Invoice {id}"))
        .build()
}

fn document(version: PainVersion, batches: Vec<PaymentBatch>) -> SepaDocument {
    let mut builder = SepaDocumentBuilder::new(
        "MSG-2024-001",
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 45).unwrap(),
        "ACME GmbH",
    )
    .pain_version(version);
    for batch in batches {
        builder = builder.add_batch(batch);
    }
    builder.build()
}

fn batch(id: &str, payments: Vec<Payment>) -> PaymentBatch {
    PaymentBatchBuilder::new(id, date(2024, 6, 17), account_holder())
        .collection_date(date(2024, 6, 20))
        .payments(payments)
        .build()
}

fn single_payment(version: PainVersion) -> SepaDocument {
    document(version, vec![batch("BATCH-1", vec![payment("PAY-1", dec!(100.00))])])
}

fn message(doc: &PainDocument) -> &Element {
    doc.message().expect("message element")
}

fn header(doc: &PainDocument) -> &Element {
    message(doc).get("GrpHdr").and_then(Node::as_element).unwrap()
}

fn first_batch(doc: &PainDocument) -> &Element {
    message(doc)
        .get("PmtInf")
        .and_then(|n| n.entries().first().copied())
        .and_then(Node::as_element)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Credit transfer
// ---------------------------------------------------------------------------

#[test]
fn credit_transfer_single_payment_shape() {
    let doc = pain::build_pain_document(&single_payment(PainVersion::Pain001_001_03)).unwrap();

    assert_eq!(doc.schema.family, MessageFamily::CreditTransfer);
    assert_eq!(doc.root.count("CstmrCdtTrfInitn"), 1);
    assert_eq!(doc.root.count("PmtMtd"), 1);
    assert_eq!(doc.root.count("CdtTrfTxInf"), 1);
    assert_eq!(doc.root.count("DrctDbtTxInf"), 0);

    let pmt_inf = first_batch(&doc);
    assert_eq!(pmt_inf.text_of("PmtMtd"), Some("TRF"));
    assert_eq!(pmt_inf.text_of("ChrgBr"), Some("SLEV"));
    assert_eq!(
        pmt_inf.path(&["PmtTpInf", "SvcLvl", "Cd"]).and_then(Node::as_text),
        Some("SEPA")
    );
    assert_eq!(pmt_inf.text_of("ReqdExctnDt"), Some("2024-06-17"));
    assert_eq!(pmt_inf.path(&["Dbtr", "Nm"]).and_then(Node::as_text), Some("ACME GmbH"));
    assert_eq!(
        pmt_inf.path(&["DbtrAgt", "FinInstnId", "BIC"]).and_then(Node::as_text),
        Some("COBADEFFXXX")
    );
    assert!(pmt_inf.get("ReqdColltnDt").is_none());
    assert!(pmt_inf.get("CdtrSchmeId").is_none());

    let amount = pmt_inf
        .path(&["CdtTrfTxInf", "Amt", "InstdAmt"])
        .and_then(Node::as_element)
        .unwrap();
    assert_eq!(amount.text(), Some("100.00"));
    assert_eq!(amount.attribute("Ccy"), Some("EUR"));
}

#[test]
fn credit_transfer_xml_text() {
    let xml = pain::to_pain_xml(&single_payment(PainVersion::Pain001_001_03), false).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(
        r#"<Document xmlns="urn:iso:std:iso:20022:tech:xsd:pain.001.001.03" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="urn:iso:std:iso:20022:tech:xsd:pain.001.001.03 pain.001.001.03.xsd">"#
    ));
    assert!(xml.contains("<MsgId>MSG-2024-001</MsgId><CreDtTm>2024-06-15T09:30:45</CreDtTm>"));
    assert!(xml.contains("<NbOfTxs>1</NbOfTxs><CtrlSum>100.00</CtrlSum>"));
    assert!(xml.contains("<InitgPty><Nm>ACME GmbH</Nm></InitgPty>"));
    assert!(xml.contains(r#"<Amt><InstdAmt Ccy="EUR">100.00</InstdAmt></Amt>"#));
    assert!(xml.contains("<PmtId><InstrId>PAY-1</InstrId></PmtId>"));
    assert!(xml.contains("<RmtInf><Ustrd>Invoice PAY-1</Ustrd></RmtInf>"));
    assert_eq!(xml.matches("<PmtMtd>TRF</PmtMtd>").count(), 1);
    assert!(!xml.contains('\n'));
}

#[test]
fn pretty_print_indents_two_spaces() {
    let xml = pain::to_pain_xml(&single_payment(PainVersion::Pain001_001_03), true).unwrap();
    assert!(xml.contains("\n  <CstmrCdtTrfInitn>\n    <GrpHdr>\n      <MsgId>MSG-2024-001</MsgId>"));
}

#[test]
fn group_header_element_order_revision_3() {
    let doc = pain::build_pain_document(&single_payment(PainVersion::Pain001_003_03)).unwrap();
    let tags: Vec<&str> = header(&doc).children().iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tags, vec!["MsgId", "CreDtTm", "NbOfTxs", "CtrlSum", "InitgPty"]);
}

#[test]
fn group_header_element_order_revision_2() {
    let doc = pain::build_pain_document(&single_payment(PainVersion::Pain001_001_02)).unwrap();
    let tags: Vec<&str> = header(&doc).children().iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        tags,
        vec!["MsgId", "CreDtTm", "BtchBookg", "NbOfTxs", "CtrlSum", "Grpg", "InitgPty"]
    );
    assert_eq!(header(&doc).text_of("BtchBookg"), Some("false"));
    assert_eq!(header(&doc).text_of("Grpg"), Some("MIXD"));
}

#[test]
fn global_batch_booking_only_at_revision_2() {
    for version in PainVersion::ALL {
        let mut doc = single_payment(version);
        doc.batch_booking = Some(true);
        let pain_doc = pain::build_pain_document(&doc).unwrap();
        let hdr = header(&pain_doc);
        if pain_doc.schema.revision == 2 {
            assert_eq!(hdr.text_of("BtchBookg"), Some("true"), "{version}");
            assert_eq!(hdr.text_of("Grpg"), Some("MIXD"), "{version}");
        } else {
            assert!(hdr.get("BtchBookg").is_none(), "{version}");
            assert!(hdr.get("Grpg").is_none(), "{version}");
        }
    }
}

#[test]
fn batch_totals_only_at_revision_3() {
    for version in PainVersion::ALL {
        let pain_doc = pain::build_pain_document(&single_payment(version)).unwrap();
        let pmt_inf = first_batch(&pain_doc);
        let present = [
            pmt_inf.get("BtchBookg").is_some(),
            pmt_inf.get("NbOfTxs").is_some(),
            pmt_inf.get("CtrlSum").is_some(),
        ];
        let expected = pain_doc.schema.revision == 3;
        assert_eq!(present, [expected; 3], "{version}");
    }
}

#[test]
fn batch_totals_values() {
    let mut b = batch(
        "BATCH-1",
        vec![payment("P1", dec!(10.10)), payment("P2", dec!(5.005))],
    );
    b.batch_booking = Some(true);
    let doc = document(PainVersion::Pain001_001_03, vec![b]);
    let pain_doc = pain::build_pain_document(&doc).unwrap();
    let pmt_inf = first_batch(&pain_doc);
    assert_eq!(pmt_inf.text_of("BtchBookg"), Some("true"));
    assert_eq!(pmt_inf.text_of("NbOfTxs"), Some("2"));
    assert_eq!(pmt_inf.text_of("CtrlSum"), Some("15.11"));

    let tags: Vec<&str> = pmt_inf.children().iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        tags,
        vec![
            "PmtInfId",
            "PmtMtd",
            "BtchBookg",
            "NbOfTxs",
            "CtrlSum",
            "PmtTpInf",
            "ReqdExctnDt",
            "Dbtr",
            "DbtrAcct",
            "DbtrAgt",
            "ChrgBr",
            "CdtTrfTxInf",
        ]
    );
}

// ---------------------------------------------------------------------------
// Direct debit
// ---------------------------------------------------------------------------

fn direct_debit(version: PainVersion) -> SepaDocument {
    let mut doc = document(
        version,
        vec![batch(
            "DD-BATCH-1",
            vec![
                PaymentBuilder::new("DD-1", "Erika Mustermann", "DE02120300000000202051", "BYLADEM1001", dec!(25))
                    .remittance_information("Beitrag")
                    .mandate("MNDT-2023-01", date(2023, 1, 9))
                    .end_to_end_reference("E2E-1")
                    .build(),
                payment("DD-2", dec!(30)),
            ],
        )],
    );
    doc.local_instrument = Some(LocalInstrument::Core);
    doc.sequence_type = Some(SequenceType::Recurring);
    doc
}

#[test]
fn direct_debit_batch_shape() {
    let doc = pain::build_pain_document(&direct_debit(PainVersion::Pain008_003_02)).unwrap();
    assert_eq!(doc.schema.family, MessageFamily::DirectDebit);
    assert_eq!(doc.root.count("CstmrDrctDbtInitn"), 1);
    assert_eq!(doc.root.count("DrctDbtTxInf"), 2);
    assert_eq!(doc.root.count("CdtTrfTxInf"), 0);

    let pmt_inf = first_batch(&doc);
    assert_eq!(pmt_inf.text_of("PmtMtd"), Some("DD"));
    assert_eq!(
        pmt_inf.path(&["PmtTpInf", "LclInstrm", "Cd"]).and_then(Node::as_text),
        Some("CORE")
    );
    assert_eq!(
        pmt_inf.path(&["PmtTpInf", "SeqTp"]).and_then(Node::as_text),
        Some("RCUR")
    );
    assert_eq!(pmt_inf.text_of("ReqdColltnDt"), Some("2024-06-20"));
    assert!(pmt_inf.get("ReqdExctnDt").is_none());
    assert_eq!(pmt_inf.path(&["Cdtr", "Nm"]).and_then(Node::as_text), Some("ACME GmbH"));
    assert_eq!(
        pmt_inf.path(&["CdtrAcct", "Id", "IBAN"]).and_then(Node::as_text),
        Some("DE89370400440532013000")
    );
    assert_eq!(
        pmt_inf
            .path(&["CdtrSchmeId", "Id", "PrvtId", "Othr", "Id"])
            .and_then(Node::as_text),
        Some("DE98ZZZ09999999999")
    );
    assert_eq!(
        pmt_inf
            .path(&["CdtrSchmeId", "Id", "PrvtId", "Othr", "SchmeNm", "Prtry"])
            .and_then(Node::as_text),
        Some("SEPA")
    );
    assert!(pmt_inf.get("Dbtr").is_none());
}

#[test]
fn direct_debit_totals_follow_revision() {
    let high = pain::build_pain_document(&direct_debit(PainVersion::Pain008_001_02)).unwrap();
    let pmt_inf = first_batch(&high);
    assert_eq!(pmt_inf.text_of("NbOfTxs"), Some("2"));
    assert_eq!(pmt_inf.text_of("CtrlSum"), Some("55.00"));
    assert_eq!(pmt_inf.text_of("BtchBookg"), Some("false"));

    let low = pain::build_pain_document(&direct_debit(PainVersion::Pain008_001_01)).unwrap();
    let pmt_inf = first_batch(&low);
    assert!(pmt_inf.get("NbOfTxs").is_none());
    assert!(pmt_inf.get("CtrlSum").is_none());
    assert!(pmt_inf.get("BtchBookg").is_none());
}

#[test]
fn direct_debit_transactions() {
    let xml = pain::to_pain_xml(&direct_debit(PainVersion::Pain008_003_02), false).unwrap();
    assert!(xml.contains(
        "<PmtId><InstrId>DD-1</InstrId><EndToEndId>E2E-1</EndToEndId></PmtId>"
    ));
    assert!(xml.contains(r#"<InstdAmt Ccy="EUR">25.00</InstdAmt>"#));
    assert!(xml.contains(
        "<DrctDbtTx><MndtRltdInf><MndtId>MNDT-2023-01</MndtId><DtOfSgntr>2023-01-09</DtOfSgntr></MndtRltdInf></DrctDbtTx>"
    ));
    // Missing mandate data keeps the elements with empty content.
    assert!(xml.contains(
        "<DrctDbtTx><MndtRltdInf><MndtId></MndtId><DtOfSgntr></DtOfSgntr></MndtRltdInf></DrctDbtTx>"
    ));
    assert!(xml.contains("<Dbtr><Nm>Erika Mustermann</Nm></Dbtr>"));
    assert!(!xml.contains("<Amt>"));
    assert!(xml.contains("<CstmrDrctDbtInitn>"));
}

#[test]
fn direct_debit_optional_classifiers_absent() {
    let mut doc = direct_debit(PainVersion::Pain008_003_01);
    doc.local_instrument = None;
    doc.sequence_type = None;
    doc.batches[0].collection_date = None;
    doc.batches[0].counterparty.id = None;

    let pain_doc = pain::build_pain_document(&doc).unwrap();
    let pmt_inf = first_batch(&pain_doc);
    assert_eq!(
        pmt_inf.path(&["PmtTpInf", "LclInstrm", "Cd"]).and_then(Node::as_text),
        Some("")
    );
    assert!(pmt_inf.path(&["PmtTpInf", "SeqTp"]).is_none());
    assert!(pmt_inf.get("ReqdColltnDt").is_none());
    assert_eq!(
        pmt_inf
            .path(&["CdtrSchmeId", "Id", "PrvtId", "Othr", "Id"])
            .and_then(Node::as_text),
        Some("")
    );
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[test]
fn grand_totals_span_all_batches() {
    let doc = document(
        PainVersion::Pain001_001_03,
        vec![
            batch("B1", vec![payment("P1", dec!(10.005)), payment("P2", dec!(0.005))]),
            batch("B2", vec![]),
            batch("B3", vec![payment("P3", dec!(0.00))]),
        ],
    );
    let pain_doc = pain::build_pain_document(&doc).unwrap();
    let hdr = header(&pain_doc);
    assert_eq!(hdr.text_of("NbOfTxs"), Some("3"));
    assert_eq!(hdr.text_of("CtrlSum"), Some("10.01"));

    let batches = message(&pain_doc).get("PmtInf").unwrap().entries();
    assert_eq!(batches.len(), 3);
    let empty = batches[1].as_element().unwrap();
    assert_eq!(empty.text_of("NbOfTxs"), Some("0"));
    assert_eq!(empty.text_of("CtrlSum"), Some("0.00"));
    assert_eq!(empty.count("CdtTrfTxInf"), 0);
}

#[test]
fn transactions_keep_input_order() {
    let doc = document(
        PainVersion::Pain001_001_03,
        vec![batch(
            "B1",
            vec![payment("C", dec!(1)), payment("A", dec!(2)), payment("B", dec!(3))],
        )],
    );
    let pain_doc = pain::build_pain_document(&doc).unwrap();
    let ids: Vec<&str> = first_batch(&pain_doc)
        .get("CdtTrfTxInf")
        .unwrap()
        .entries()
        .into_iter()
        .filter_map(|n| n.as_element()?.path(&["PmtId", "InstrId"])?.as_text())
        .collect();
    assert_eq!(ids, vec!["C", "A", "B"]);
}

// ---------------------------------------------------------------------------
// Length validation
// ---------------------------------------------------------------------------

#[test]
fn document_id_too_long() {
    let mut doc = single_payment(PainVersion::Pain001_001_03);
    doc.id = "M".repeat(36);
    doc.batches[0].id = "B".repeat(40);
    let err = pain::build_pain_document(&doc).unwrap_err();
    assert_eq!(
        err,
        SepaError::Length {
            field: "id".into(),
            max_length: 35,
            actual_length: 36,
        }
    );
}

#[test]
fn initiator_name_too_long() {
    let mut doc = single_payment(PainVersion::Pain008_001_02);
    doc.initiator_name = "I".repeat(71);
    doc.batches[0].payments[0].name = "N".repeat(50);
    let err = pain::to_pain_xml(&doc, false).unwrap_err();
    assert_eq!(err.field(), Some("initiator_name"));
}

#[test]
fn first_violation_in_document_order_wins() {
    let mut doc = document(
        PainVersion::Pain001_001_03,
        vec![
            batch("B1", vec![payment("P1", dec!(1)), payment("P2", dec!(1))]),
            batch("B2", vec![payment("P3", dec!(1))]),
        ],
    );
    doc.batches[0].payments[1].name = "N".repeat(36);
    doc.batches[1].counterparty.name = "C".repeat(71);
    let err = pain::build_pain_document(&doc).unwrap_err();
    assert_eq!(err.field(), Some("batches[0].payments[1].name"));

    doc.batches[0].payments[1].name = "ok".into();
    let err = pain::build_pain_document(&doc).unwrap_err();
    assert_eq!(err.field(), Some("batches[1].counterparty.name"));
}

#[test]
fn batch_id_checked_before_counterparty_and_payments() {
    let mut doc = single_payment(PainVersion::Pain001_001_03);
    doc.batches[0].id = "B".repeat(36);
    doc.batches[0].counterparty.name = "C".repeat(71);
    doc.batches[0].payments[0].id = "P".repeat(36);
    let err = pain::build_pain_document(&doc).unwrap_err();
    assert_eq!(err.field(), Some("batches[0].id"));
}

#[test]
fn counterparty_name_allows_70_but_payment_name_only_35() {
    let mut doc = single_payment(PainVersion::Pain001_001_03);
    doc.batches[0].counterparty.name = "C".repeat(70);
    doc.batches[0].payments[0].name = "N".repeat(35);
    assert!(pain::build_pain_document(&doc).is_ok());

    doc.batches[0].payments[0].name = "N".repeat(36);
    let err = pain::build_pain_document(&doc).unwrap_err();
    assert_eq!(
        err,
        SepaError::Length {
            field: "batches[0].payments[0].name".into(),
            max_length: 35,
            actual_length: 36,
        }
    );
}
