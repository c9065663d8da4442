use super::error::SepaError;

/// Maximum length of message, batch and payment identifiers.
pub const MAX_ID_LENGTH: usize = 35;
/// Maximum length of the initiating party and batch counterparty names.
pub const MAX_PARTY_NAME_LENGTH: usize = 70;
/// Maximum length of the debtor/creditor name on a single payment.
pub const MAX_PAYMENT_NAME_LENGTH: usize = 35;

/// Check that `value` is at most `max_length` characters long.
///
/// Length is counted in Unicode scalar values, so "Müller" is six
/// characters regardless of its UTF-8 byte length.
pub fn check_length(value: &str, field: &str, max_length: usize) -> Result<(), SepaError> {
    let actual_length = value.chars().count();
    if actual_length > max_length {
        return Err(SepaError::Length {
            field: field.to_string(),
            max_length,
            actual_length,
        });
    }
    Ok(())
}
