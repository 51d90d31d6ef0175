// 🧩 Method Aggregator - many record shapes → one ordered payment method list
//
// Order is fixed:
//   pending bank account (0 or 1)
//   → bank accounts in input order, wallet excluded
//   → cards in input order
//   → PayPal.me alias (0 or 1)
//
// Inputs are only borrowed; every entry is a fresh copy.

use crate::entities::bank_account::last_four;
use crate::entities::{
    AccountData, BankAccountRecord, CardRecord, PayPalMeAlias, PaymentMethod, PaymentMethodType,
    PendingBankAccount, PersonalBankAccountState, PAYPAL_ME_KEY, PAYPAL_ME_METHOD_ID,
    PENDING_BANK_ACCOUNT_KEY, PENDING_BANK_ACCOUNT_METHOD_ID,
};
use crate::error::InputError;
use crate::icons::{BankIconRegistry, Icon, IconResolver};
use crate::localize::{EnglishPhrases, Localizer, ACCOUNT_LAST_FOUR, PAYPAL_ME_TITLE};

pub struct MethodAggregator<I = BankIconRegistry, L = EnglishPhrases> {
    icons: I,
    localizer: L,
}

impl MethodAggregator {
    /// Aggregator backed by the built-in icon registry and English phrases
    pub fn new() -> Self {
        MethodAggregator {
            icons: BankIconRegistry::new(),
            localizer: EnglishPhrases::new(),
        }
    }
}

impl Default for MethodAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IconResolver, L: Localizer> MethodAggregator<I, L> {
    pub fn with_collaborators(icons: I, localizer: L) -> Self {
        MethodAggregator { icons, localizer }
    }

    /// Build the display list from everything the user has linked
    ///
    /// Fails only when a caller precondition is broken (see `InputError`);
    /// in that case nothing is returned, never a partial list.
    pub fn format_payment_methods(
        &self,
        bank_accounts: &[BankAccountRecord],
        cards: &[CardRecord],
        paypal_me: Option<&PayPalMeAlias>,
        personal_bank_account: Option<&PersonalBankAccountState>,
    ) -> Result<Vec<PaymentMethod>, InputError> {
        let mut methods = Vec::with_capacity(bank_accounts.len() + cards.len() + 2);

        if let Some(state) = personal_bank_account {
            if let Some(pending) = state.pending_bank_account() {
                methods.push(self.pending_bank_account_method(pending, state)?);
            }
        }

        for bank_account in bank_accounts {
            // Add all bank accounts besides the wallet
            if bank_account.is_wallet() {
                continue;
            }
            methods.push(self.bank_account_method(bank_account)?);
        }

        for card in cards {
            methods.push(self.card_method(card)?);
        }

        if let Some(alias) = paypal_me.filter(|alias| !alias.is_empty()) {
            methods.push(self.paypal_me_method(alias));
        }

        tracing::debug!(
            bank_accounts = bank_accounts.len(),
            cards = cards.len(),
            methods = methods.len(),
            "Formatted payment methods"
        );

        Ok(methods)
    }

    fn pending_bank_account_method(
        &self,
        pending: &PendingBankAccount,
        state: &PersonalBankAccountState,
    ) -> Result<PaymentMethod, InputError> {
        if pending.account_number.trim().is_empty() {
            tracing::warn!(
                address_name = %pending.address_name,
                "Pending bank account has no account number"
            );
            return Err(InputError::MissingAccountNumber {
                address_name: pending.address_name.clone(),
            });
        }

        let icon = self.icons.resolve(pending.bank_name(), false);
        let description = format!(
            "{} {}",
            self.localizer.translate(ACCOUNT_LAST_FOUR),
            last_four(&pending.account_number)
        );

        Ok(PaymentMethod {
            account_type: PaymentMethodType::BankAccount,
            key: PENDING_BANK_ACCOUNT_KEY.to_string(),
            method_id: PENDING_BANK_ACCOUNT_METHOD_ID,
            title: pending.address_name.clone(),
            description,
            icon: icon.icon,
            icon_size: icon.icon_size,
            is_default: false,
            is_pending: true,
            errors: state.errors.messages(),
            pending_action: pending.pending_action,
            account_data: AccountData::PendingBankAccount(pending.clone()),
        })
    }

    fn bank_account_method(&self, bank_account: &BankAccountRecord) -> Result<PaymentMethod, InputError> {
        let method_id = confirmed_method_id(bank_account.method_id, "Bank account", &bank_account.title)?;
        let icon = self.icons.resolve(bank_account.bank_name(), false);

        Ok(PaymentMethod {
            account_type: PaymentMethodType::BankAccount,
            key: format!("bankAccount-{}", method_id),
            method_id,
            title: bank_account.title.clone(),
            description: bank_account.description.clone(),
            icon: icon.icon,
            icon_size: icon.icon_size,
            is_default: bank_account.is_default,
            is_pending: false,
            errors: bank_account.errors.messages(),
            pending_action: bank_account.pending_action,
            account_data: AccountData::BankAccount(bank_account.clone()),
        })
    }

    fn card_method(&self, card: &CardRecord) -> Result<PaymentMethod, InputError> {
        let method_id = confirmed_method_id(card.card_id, "Card", &card.title)?;
        let icon = self.icons.resolve(card.bank_name(), true);

        Ok(PaymentMethod {
            account_type: PaymentMethodType::DebitCard,
            key: format!("card-{}", method_id),
            method_id,
            title: card.title.clone(),
            description: card.description.clone(),
            icon: icon.icon,
            icon_size: icon.icon_size,
            is_default: card.is_default,
            is_pending: false,
            errors: card.errors.messages(),
            pending_action: card.pending_action,
            account_data: AccountData::Card(card.clone()),
        })
    }

    fn paypal_me_method(&self, alias: &PayPalMeAlias) -> PaymentMethod {
        let title = alias
            .title
            .clone()
            .unwrap_or_else(|| self.localizer.translate(PAYPAL_ME_TITLE));

        PaymentMethod {
            account_type: PaymentMethodType::PayPalMe,
            key: PAYPAL_ME_KEY.to_string(),
            method_id: PAYPAL_ME_METHOD_ID,
            title,
            description: alias.username.clone(),
            icon: Icon::PayPal,
            icon_size: None,
            is_default: alias.is_default,
            is_pending: false,
            errors: Vec::new(),
            pending_action: None,
            account_data: AccountData::PayPalMe(alias.clone()),
        }
    }
}

/// Id of a confirmed bank account or card
///
/// It must be present, and 0 belongs to the pending bank account only.
fn confirmed_method_id(id: Option<u64>, kind: &'static str, title: &str) -> Result<u64, InputError> {
    match id {
        None => {
            tracing::warn!(kind, title, "Payment method has no id");
            Err(InputError::MissingMethodId {
                kind,
                title: title.to_string(),
            })
        }
        Some(PENDING_BANK_ACCOUNT_METHOD_ID) => {
            tracing::warn!(kind, title, "Payment method uses the reserved method id");
            Err(InputError::ReservedMethodId {
                kind,
                title: title.to_string(),
            })
        }
        Some(id) => Ok(id),
    }
}

// ============================================================================
// TESTS
// ============================================================================
