// 💳 Card Record - a linked payment card

use serde::{Deserialize, Serialize};

use super::fields::{ErrorFields, PendingAction};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardAdditionalData {
    /// Card can move money person-to-person (the only cards usable as a default method)
    #[serde(rename = "isP2PDebitCard")]
    pub is_p2p_debit_card: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardAccountData {
    /// Issuing bank name
    pub bank: Option<String>,

    /// Masked card number, e.g. "XXXXXXXXXXXX1111"
    pub card_number: String,

    pub additional_data: CardAdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRecord {
    /// Server-issued card id; None when storage sent none
    #[serde(rename = "cardID")]
    pub card_id: Option<u64>,

    pub title: String,

    pub description: String,

    pub is_default: bool,

    pub account_data: CardAccountData,

    pub errors: ErrorFields,

    pub pending_action: Option<PendingAction>,
}

impl CardRecord {
    pub fn new(card_id: u64, title: String, bank: Option<String>) -> Self {
        CardRecord {
            card_id: Some(card_id),
            title,
            account_data: CardAccountData {
                bank,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn is_p2p_debit_card(&self) -> bool {
        self.account_data.additional_data.is_p2p_debit_card
    }

    /// Issuing bank, or "" when unknown
    pub fn bank_name(&self) -> &str {
        self.account_data.bank.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults() {
        let card: CardRecord = serde_json::from_str(r#"{"cardID": 3}"#).unwrap();

        assert_eq!(card.card_id, Some(3));
        assert_eq!(card.bank_name(), "");
        assert!(!card.is_p2p_debit_card());
    }

    #[test]
    fn test_p2p_flag_from_json() {
        let card: CardRecord = serde_json::from_str(
            r#"{
                "cardID": 5,
                "accountData": {
                    "bank": "American Express",
                    "additionalData": {"isP2PDebitCard": true}
                }
            }"#,
        )
        .unwrap();

        assert!(card.is_p2p_debit_card());
        assert_eq!(card.bank_name(), "American Express");
    }

    #[test]
    fn test_missing_card_id_stays_missing() {
        let card: CardRecord = serde_json::from_str(r#"{"accountData": {"bank": "Chase"}}"#).unwrap();

        assert_eq!(card.card_id, None);
        assert_eq!(card.bank_name(), "Chase");
    }
}
