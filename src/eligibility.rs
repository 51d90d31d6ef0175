// ✅ Eligibility - can this user send/receive wallet payments at all?

use crate::entities::{BankAccountRecord, CardRecord};

/// True when the user holds a default-credit bank account or a P2P debit card
///
/// Billing cards that aren't P2P debit cards don't count: they can't be made
/// the default method. Missing nested flags read as false.
pub fn has_expensify_payment_method(
    cards: &[CardRecord],
    bank_accounts: &[BankAccountRecord],
) -> bool {
    let valid_bank_account = bank_accounts.iter().any(BankAccountRecord::is_default_credit);
    let valid_debit_card = cards.iter().any(CardRecord::is_p2p_debit_card);

    valid_bank_account || valid_debit_card
}
