// Localization lookup - phrase key → display string
//
// The engine only needs a handful of phrases; callers plug in their own
// translator, EnglishPhrases is the built-in fallback.

use std::collections::HashMap;

pub const ACCOUNT_LAST_FOUR: &str = "paymentMethodList.accountLastFour";
pub const PAYPAL_ME_TITLE: &str = "common.payPalMe";

pub trait Localizer {
    /// Display string for `key`; unknown keys come back as the key itself
    fn translate(&self, key: &str) -> String;
}

pub struct EnglishPhrases {
    phrases: HashMap<&'static str, String>,
}

impl EnglishPhrases {
    pub fn new() -> Self {
        let mut phrases = HashMap::new();
        phrases.insert(ACCOUNT_LAST_FOUR, "Account ending in".to_string());
        phrases.insert(PAYPAL_ME_TITLE, "PayPal.me".to_string());
        EnglishPhrases { phrases }
    }

    /// Replace or add a phrase
    pub fn with_phrase(mut self, key: &'static str, text: &str) -> Self {
        self.phrases.insert(key, text.to_string());
        self
    }
}

impl Default for EnglishPhrases {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for EnglishPhrases {
    fn translate(&self, key: &str) -> String {
        self.phrases
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_phrase() {
        let phrases = EnglishPhrases::new();
        assert_eq!(phrases.translate(ACCOUNT_LAST_FOUR), "Account ending in");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let phrases = EnglishPhrases::new();
        assert_eq!(phrases.translate("missing.key"), "missing.key");
    }

    #[test]
    fn test_override_phrase() {
        let phrases = EnglishPhrases::new().with_phrase(ACCOUNT_LAST_FOUR, "Cuenta terminada en");
        assert_eq!(phrases.translate(ACCOUNT_LAST_FOUR), "Cuenta terminada en");
    }
}
