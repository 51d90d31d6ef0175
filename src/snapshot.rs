// Wallet Snapshot - everything the caller read from storage, in one place

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::aggregator::MethodAggregator;
use crate::eligibility::has_expensify_payment_method;
use crate::entities::{
    BankAccountRecord, CardRecord, PayPalMeAlias, PaymentMethod, PersonalBankAccountState,
};
use crate::error::InputError;
use crate::icons::IconResolver;
use crate::localize::Localizer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletSnapshot {
    pub bank_account_list: Vec<BankAccountRecord>,
    pub card_list: Vec<CardRecord>,
    pub pay_pal_me: Option<PayPalMeAlias>,
    pub personal_bank_account: Option<PersonalBankAccountState>,
}

impl WalletSnapshot {
    /// Load snapshot from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read wallet snapshot: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse wallet snapshot JSON")
    }

    pub fn has_expensify_payment_method(&self) -> bool {
        has_expensify_payment_method(&self.card_list, &self.bank_account_list)
    }

    pub fn payment_methods<I: IconResolver, L: Localizer>(
        &self,
        aggregator: &MethodAggregator<I, L>,
    ) -> Result<Vec<PaymentMethod>, InputError> {
        aggregator.format_payment_methods(
            &self.bank_account_list,
            &self.card_list,
            self.pay_pal_me.as_ref(),
            self.personal_bank_account.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "bankAccountList": [
            {"methodID": 1, "type": "WALLET"},
            {"methodID": 2, "title": "Checking", "isDefaultCredit": true,
             "additionalData": {"bankName": "Chase"}}
        ],
        "cardList": [
            {"cardID": 3, "accountData": {"bank": "Discover"}}
        ],
        "payPalMe": {"username": "alice"},
        "personalBankAccount": {
            "selectedBankAccount": {"addressName": "Alice", "accountNumber": "987654321"},
            "errors": {"1690000000000002": "b", "1690000000000001": "a"}
        }
    }"#;

    #[test]
    fn test_snapshot_feeds_engine() {
        let snapshot: WalletSnapshot = serde_json::from_str(SNAPSHOT).unwrap();

        assert!(snapshot.has_expensify_payment_method());

        let methods = snapshot.payment_methods(&MethodAggregator::new()).unwrap();
        let keys: Vec<&str> = methods.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["bankAccount-0", "bankAccount-2", "card-3", "payPalMePaymentMethod"]
        );
        assert_eq!(methods[0].errors, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(methods[0].description, "Account ending in 4321");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: WalletSnapshot = serde_json::from_str("{}").unwrap();

        assert!(!snapshot.has_expensify_payment_method());
        assert!(snapshot.payment_methods(&MethodAggregator::new()).unwrap().is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = WalletSnapshot::from_file(file.path()).unwrap();
        assert_eq!(snapshot.bank_account_list.len(), 2);
        assert_eq!(snapshot.card_list.len(), 1);
    }

    #[test]
    fn test_from_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = WalletSnapshot::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse wallet snapshot JSON"));
    }
}
