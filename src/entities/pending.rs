// ⏳ Pending Bank Account - still inside the add-bank-account flow
//
// Not yet in the confirmed list. Shown with the placeholder identity
// (method id 0) until the server confirms it.

use serde::{Deserialize, Serialize};

use super::bank_account::BankAdditionalData;
use super::fields::{ErrorFields, PendingAction};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingBankAccount {
    /// Account holder name shown as the title
    pub address_name: String,

    pub account_number: String,

    pub routing_number: String,

    pub additional_data: BankAdditionalData,

    pub pending_action: Option<PendingAction>,

    /// Fields storage sent that aren't modelled above; kept so a selection
    /// made only of them still counts as present
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PendingBankAccount {
    /// An all-default record (JSON `{}`) carries nothing worth showing
    pub fn is_empty(&self) -> bool {
        *self == PendingBankAccount::default()
    }

    pub fn bank_name(&self) -> &str {
        self.additional_data.bank_name.as_deref().unwrap_or("")
    }
}

/// State of the personal bank account flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalBankAccountState {
    pub selected_bank_account: Option<PendingBankAccount>,

    /// Errors raised by the flow, keyed by microsecond timestamp
    pub errors: ErrorFields,
}

impl PersonalBankAccountState {
    /// The selected account, if there is one worth showing
    pub fn pending_bank_account(&self) -> Option<&PendingBankAccount> {
        self.selected_bank_account
            .as_ref()
            .filter(|account| !account.is_empty())
    }
}
