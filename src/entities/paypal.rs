// PayPal.me alias - the single peer-to-peer payment handle

use serde::{Deserialize, Serialize};

pub const PAYPAL_ME_KEY: &str = "payPalMePaymentMethod";

/// Placeholder id for the alias; server bank/card ids never reach it,
/// and 0 stays reserved for the pending bank account.
pub const PAYPAL_ME_METHOD_ID: u64 = u64::MAX;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayPalMeAlias {
    pub username: String,

    /// Display title; the localized "PayPal.me" label is used when absent
    pub title: Option<String>,

    pub is_default: bool,
}

impl PayPalMeAlias {
    pub fn new(username: String) -> Self {
        PayPalMeAlias {
            username,
            ..Default::default()
        }
    }

    /// A blank username means there is no alias
    pub fn is_empty(&self) -> bool {
        self.username.trim().is_empty()
    }
}
