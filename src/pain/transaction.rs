use super::tree::Element;
use super::{CURRENCY, account, agent, party};
use crate::core::*;

/// Build one `CdtTrfTxInf` / `DrctDbtTxInf` record.
///
/// Payment id and name are validated first; a violation names the batch
/// and payment index and no record is produced.
pub(crate) fn build_transaction(
    payment: &Payment,
    batch_index: usize,
    payment_index: usize,
    family: MessageFamily,
) -> Result<Element, SepaError> {
    let path = format!("batches[{batch_index}].payments[{payment_index}]");
    check_length(&payment.id, &format!("{path}.id"), MAX_ID_LENGTH)?;
    check_length(&payment.name, &format!("{path}.name"), MAX_PAYMENT_NAME_LENGTH)?;

    let end_to_end = payment
        .end_to_end_reference
        .as_deref()
        .filter(|r| !r.is_empty());
    let payment_id = Element::new()
        .child("InstrId", payment.id.as_str())
        .child_opt("EndToEndId", end_to_end);

    let amount = format_amount(payment.amount)?;
    let remittance = Element::new().child("Ustrd", payment.remittance_information.as_str());

    let tx = match family {
        MessageFamily::CreditTransfer => Element::new()
            .child("PmtId", payment_id)
            .child(
                "Amt",
                Element::new().child(
                    "InstdAmt",
                    Element::new().attr("Ccy", CURRENCY).with_text(amount),
                ),
            )
            .child("CdtrAgt", agent(&payment.bic))
            .child("Cdtr", party(&payment.name))
            .child("CdtrAcct", account(&payment.iban))
            .child("RmtInf", remittance),
        MessageFamily::DirectDebit => {
            let signature_date = payment
                .mandate_signature_date
                .map(format_date)
                .unwrap_or_default();
            let mandate = Element::new()
                .child("MndtId", payment.mandate_id.clone().unwrap_or_default())
                .child("DtOfSgntr", signature_date);

            Element::new()
                .child("PmtId", payment_id)
                .child(
                    "InstdAmt",
                    Element::new().attr("Ccy", CURRENCY).with_text(amount),
                )
                .child("DrctDbtTx", Element::new().child("MndtRltdInf", mandate))
                .child("DbtrAgt", agent(&payment.bic))
                .child("Dbtr", party(&payment.name))
                .child("DbtrAcct", account(&payment.iban))
                .child("RmtInf", remittance)
        }
    };

    Ok(tx)
}
