use super::transaction::build_transaction;
use super::tree::{Element, Node};
use super::{CHARGE_BEARER, PROPRIETARY_SCHEME, SERVICE_LEVEL, account, agent, party};
use crate::core::*;

/// Build one `PmtInf` block and its transactions.
///
/// Batch id and counterparty name are validated before any transaction
/// is built.
pub(crate) fn build_payment_information(
    document: &SepaDocument,
    batch: &PaymentBatch,
    batch_index: usize,
    schema: SchemaVersion,
) -> Result<Element, SepaError> {
    check_length(&batch.id, &format!("batches[{batch_index}].id"), MAX_ID_LENGTH)?;
    check_length(
        &batch.counterparty.name,
        &format!("batches[{batch_index}].counterparty.name"),
        MAX_PARTY_NAME_LENGTH,
    )?;

    let family = schema.family;
    let mut pmt_inf = Element::new()
        .child("PmtInfId", batch.id.as_str())
        .child("PmtMtd", family.payment_method());

    if schema.has_batch_totals() {
        pmt_inf = pmt_inf
            .child("BtchBookg", batch.batch_booking.unwrap_or(false).to_string())
            .child("NbOfTxs", batch.payments.len().to_string())
            .child("CtrlSum", format_amount(batch.control_sum()?)?);
    }

    let service_level = Element::new().child("Cd", SERVICE_LEVEL);
    let counterparty = &batch.counterparty;

    pmt_inf = match family {
        MessageFamily::CreditTransfer => pmt_inf
            .child("PmtTpInf", Element::new().child("SvcLvl", service_level))
            .child("ReqdExctnDt", format_date(batch.requested_execution_date))
            .child("Dbtr", party(&counterparty.name))
            .child("DbtrAcct", account(&counterparty.iban))
            .child("DbtrAgt", agent(&counterparty.bic))
            .child("ChrgBr", CHARGE_BEARER),
        MessageFamily::DirectDebit => {
            let local_instrument = document
                .local_instrument
                .map(|i| i.code())
                .unwrap_or_default();
            let payment_type = Element::new()
                .child("SvcLvl", service_level)
                .child("LclInstrm", Element::new().child("Cd", local_instrument))
                .child_opt("SeqTp", document.sequence_type.map(|s| s.code()));
            let scheme_id = Element::new().child(
                "Id",
                Element::new().child(
                    "PrvtId",
                    Element::new().child(
                        "Othr",
                        Element::new()
                            .child("Id", counterparty.id.clone().unwrap_or_default())
                            .child(
                                "SchmeNm",
                                Element::new().child("Prtry", PROPRIETARY_SCHEME),
                            ),
                    ),
                ),
            );

            pmt_inf
                .child("PmtTpInf", payment_type)
                .child_opt("ReqdColltnDt", batch.collection_date.map(format_date))
                .child("Cdtr", party(&counterparty.name))
                .child("CdtrAcct", account(&counterparty.iban))
                .child("CdtrAgt", agent(&counterparty.bic))
                .child("ChrgBr", CHARGE_BEARER)
                .child("CdtrSchmeId", scheme_id)
        }
    };

    let transactions = batch
        .payments
        .iter()
        .enumerate()
        .map(|(i, payment)| build_transaction(payment, batch_index, i, family).map(Node::from))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(
        batch = batch.id.as_str(),
        transactions = transactions.len(),
        "built payment information block"
    );

    Ok(pmt_inf.child(family.transaction_element(), Node::Repeated(transactions)))
}
