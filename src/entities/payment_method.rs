// 📋 Payment Method - the flattened, display-ready list entry
//
// Every source record (pending bank account, bank account, card, PayPal.me)
// is lowered into this one shape. The source record rides along in
// `account_data` so nothing the caller sent is lost.

use serde::Serialize;

use super::bank_account::BankAccountRecord;
use super::card::CardRecord;
use super::fields::PendingAction;
use super::paypal::PayPalMeAlias;
use super::pending::PendingBankAccount;
use crate::icons::{Icon, IconSize};

pub const PENDING_BANK_ACCOUNT_KEY: &str = "bankAccount-0";
pub const PENDING_BANK_ACCOUNT_METHOD_ID: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethodType {
    #[serde(rename = "bankAccount")]
    BankAccount,

    #[serde(rename = "debitCard")]
    DebitCard,

    #[serde(rename = "payPalMe")]
    PayPalMe,
}

impl PaymentMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::BankAccount => "bankAccount",
            PaymentMethodType::DebitCard => "debitCard",
            PaymentMethodType::PayPalMe => "payPalMe",
        }
    }
}

/// Copy of the record an entry was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "record")]
pub enum AccountData {
    PendingBankAccount(PendingBankAccount),
    BankAccount(BankAccountRecord),
    Card(CardRecord),
    PayPalMe(PayPalMeAlias),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub account_type: PaymentMethodType,

    /// Unique within one aggregation
    pub key: String,

    #[serde(rename = "methodID")]
    pub method_id: u64,

    pub title: String,

    pub description: String,

    pub icon: Icon,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<IconSize>,

    pub is_default: bool,

    pub is_pending: bool,

    pub errors: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_action: Option<PendingAction>,

    pub account_data: AccountData,
}

impl PaymentMethod {
    /// Entry for the bank account still in the linking flow
    pub fn is_pending_bank_account(&self) -> bool {
        matches!(self.account_data, AccountData::PendingBankAccount(_))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Optimistically deleted, still waiting on the server
    pub fn is_pending_delete(&self) -> bool {
        self.pending_action == Some(PendingAction::Delete)
    }
}
