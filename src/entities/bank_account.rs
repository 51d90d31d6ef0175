// 🏦 Bank Account Record - a confirmed, linked bank account
//
// Shape mirrors what storage hands us: sparse JSON where any nested field
// may be missing. Every optional path resolves to a documented default.

use serde::{Deserialize, Serialize};

use super::fields::{ErrorFields, PendingAction};

// ============================================================================
// BANK ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankAccountType {
    /// Personal checking/savings account
    Personal,

    /// Business account
    Business,

    /// The internal wallet balance; never shown as a payment method
    Wallet,

    /// Anything storage sends that we don't know about
    #[serde(other)]
    Other,
}

impl BankAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankAccountType::Personal => "PERSONAL",
            BankAccountType::Business => "BUSINESS",
            BankAccountType::Wallet => "WALLET",
            BankAccountType::Other => "OTHER",
        }
    }
}

impl Default for BankAccountType {
    fn default() -> Self {
        BankAccountType::Other
    }
}

// ============================================================================
// ADDITIONAL DATA
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAdditionalData {
    /// Bank name as reported by the aggregator (e.g., "Chase")
    pub bank_name: Option<String>,
}

// ============================================================================
// BANK ACCOUNT RECORD
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccountRecord {
    /// Server-issued bank account id; None when storage sent none
    #[serde(rename = "methodID")]
    pub method_id: Option<u64>,

    /// Display title (usually the account holder's address name)
    pub title: String,

    /// Display description (usually the masked account number)
    pub description: String,

    /// Marked as the user's default payment method
    pub is_default: bool,

    pub account_number: String,

    #[serde(rename = "type")]
    pub account_type: BankAccountType,

    /// Validated and usable as the default funds-receiving account
    pub is_default_credit: bool,

    pub additional_data: BankAdditionalData,

    pub errors: ErrorFields,

    pub pending_action: Option<PendingAction>,
}

impl BankAccountRecord {
    /// Create a record with the fields every caller needs
    pub fn new(method_id: u64, title: String, account_number: String) -> Self {
        BankAccountRecord {
            method_id: Some(method_id),
            title,
            description: Self::mask_account_number(&account_number),
            account_number,
            account_type: BankAccountType::Personal,
            ..Default::default()
        }
    }

    pub fn is_default_credit(&self) -> bool {
        self.is_default_credit
    }

    pub fn is_wallet(&self) -> bool {
        self.account_type == BankAccountType::Wallet
    }

    /// Bank name, or "" when storage didn't send one
    pub fn bank_name(&self) -> &str {
        self.additional_data.bank_name.as_deref().unwrap_or("")
    }

    /// Mask account number (show only last 4 digits)
    ///
    /// Example: "1234567890" → "*7890"
    pub fn mask_account_number(full_number: &str) -> String {
        if full_number.chars().count() <= 4 {
            return full_number.to_string();
        }
        format!("*{}", last_four(full_number))
    }
}

/// Last four characters of an account number (the whole string if shorter)
pub fn last_four(account_number: &str) -> &str {
    let count = account_number.chars().count();
    if count <= 4 {
        return account_number;
    }

    // Byte offset of the 4th char from the end
    let start = account_number
        .char_indices()
        .nth(count - 4)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &account_number[start..]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_account_creation() {
        let account = BankAccountRecord::new(
            42,
            "Alice Smith".to_string(),
            "1234567890".to_string(),
        );

        assert_eq!(account.method_id, Some(42));
        assert_eq!(account.title, "Alice Smith");
        assert_eq!(account.description, "*7890");
        assert_eq!(account.account_type, BankAccountType::Personal);
        assert!(!account.is_default_credit());
        assert!(!account.is_wallet());
    }

    #[test]
    fn test_sparse_json_uses_defaults() {
        let account: BankAccountRecord = serde_json::from_str(r#"{"methodID": 7}"#).unwrap();

        assert_eq!(account.method_id, Some(7));
        assert_eq!(account.bank_name(), "");
        assert_eq!(account.account_type, BankAccountType::Other);
        assert!(account.errors.is_empty());
        assert_eq!(account.pending_action, None);
        assert!(!account.is_default_credit());
    }

    #[test]
    fn test_full_json_record() {
        let account: BankAccountRecord = serde_json::from_str(
            r#"{
                "methodID": 9,
                "title": "Joint Checking",
                "type": "WALLET",
                "isDefaultCredit": true,
                "additionalData": {"bankName": "Chase"},
                "errors": {"1": "Could not verify"},
                "pendingAction": "update"
            }"#,
        )
        .unwrap();

        assert!(account.is_wallet());
        assert!(account.is_default_credit());
        assert_eq!(account.bank_name(), "Chase");
        assert_eq!(account.errors.messages(), vec!["Could not verify".to_string()]);
        assert_eq!(account.pending_action, Some(PendingAction::Update));
    }

    #[test]
    fn test_missing_method_id_stays_missing() {
        let account: BankAccountRecord = serde_json::from_str(r#"{"title": "Checking"}"#).unwrap();

        assert_eq!(account.method_id, None);
        assert_eq!(account.title, "Checking");
    }

    #[test]
    fn test_unknown_account_type() {
        let account: BankAccountRecord =
            serde_json::from_str(r#"{"type": "SOMETHING_NEW"}"#).unwrap();
        assert_eq!(account.account_type, BankAccountType::Other);
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("1234567890"), "7890");
        assert_eq!(last_four("XXXXXX1111"), "1111");
        assert_eq!(last_four("123"), "123");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn test_mask_short_account_number() {
        assert_eq!(BankAccountRecord::mask_account_number("1234"), "1234");
    }
}
