// 🎨 Bank Icons - bank name → display icon descriptor
//
// Problem solved:
// - "Chase", "JPMorgan Chase Bank, N.A.", "CHASE" → same Chase icon
// - Unknown or missing bank names still get a defined (generic) icon
//
// Callers inject an IconResolver; BankIconRegistry is the default one.

use serde::{Deserialize, Serialize};

// ============================================================================
// ICON DESCRIPTORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BankBrand {
    AmericanExpress,
    BankOfAmerica,
    Bbt,
    CapitalOne,
    Chase,
    CharlesSchwab,
    Citibank,
    Citizens,
    Discover,
    Fidelity,
    Huntington,
    NavyFederal,
    Pnc,
    Regions,
    SunTrust,
    TdBank,
    UsBank,
    Usaa,
    WellsFargo,

    /// Fallback when the bank is unknown
    Generic,
}

/// Opaque icon handle handed back to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    /// Bank-account style asset
    Bank(BankBrand),

    /// Card style asset
    Card(BankBrand),

    /// Fixed icon for the PayPal.me alias
    PayPal,
}

impl Icon {
    pub fn is_generic(&self) -> bool {
        matches!(self, Icon::Bank(BankBrand::Generic) | Icon::Card(BankBrand::Generic))
    }
}

/// Icon size in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSize(pub u16);

impl IconSize {
    pub const EXTRA_LARGE: IconSize = IconSize(40);
}

/// Icon plus its size; generic icons carry no size and render at the default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankIcon {
    pub icon: Icon,
    pub icon_size: Option<IconSize>,
}

impl BankIcon {
    pub fn generic(is_card: bool) -> Self {
        let icon = if is_card {
            Icon::Card(BankBrand::Generic)
        } else {
            Icon::Bank(BankBrand::Generic)
        };
        BankIcon {
            icon,
            icon_size: None,
        }
    }

    fn for_brand(brand: BankBrand, is_card: bool) -> Self {
        if brand == BankBrand::Generic {
            return BankIcon::generic(is_card);
        }
        let icon = if is_card {
            Icon::Card(brand)
        } else {
            Icon::Bank(brand)
        };
        BankIcon {
            icon,
            icon_size: Some(IconSize::EXTRA_LARGE),
        }
    }
}

// ============================================================================
// RESOLVER CONTRACT
// ============================================================================

/// Resolves a bank name to its icon
///
/// Must be deterministic for the same (name, style) pair and must return a
/// defined default for unknown or empty names.
pub trait IconResolver {
    fn resolve(&self, bank_name: &str, is_card: bool) -> BankIcon;
}

// ============================================================================
// DEFAULT REGISTRY
// ============================================================================

struct BrandEntry {
    brand: BankBrand,
    /// Normalized name prefixes that map to this brand
    aliases: Vec<String>,
}

/// Registry of known bank brands and the name prefixes that identify them
pub struct BankIconRegistry {
    brands: Vec<BrandEntry>,
}

impl BankIconRegistry {
    /// Create registry with the known brands
    pub fn new() -> Self {
        let mut registry = BankIconRegistry { brands: Vec::new() };
        registry.register_default_brands();
        registry
    }

    /// Create registry with no brands; everything resolves to the generic icon
    pub fn empty() -> Self {
        BankIconRegistry { brands: Vec::new() }
    }

    fn register_default_brands(&mut self) {
        let defaults: [(BankBrand, &[&str]); 19] = [
            (BankBrand::AmericanExpress, &["American Express", "Amex"]),
            (BankBrand::BankOfAmerica, &["Bank of America", "BofA"]),
            (BankBrand::Bbt, &["BB&T", "Branch Banking and Trust"]),
            (BankBrand::CapitalOne, &["Capital One"]),
            (BankBrand::Chase, &["Chase", "JPMorgan Chase"]),
            (BankBrand::CharlesSchwab, &["Charles Schwab", "Schwab"]),
            (BankBrand::Citibank, &["Citibank", "Citi"]),
            (BankBrand::Citizens, &["Citizens Bank", "Citizens"]),
            (BankBrand::Discover, &["Discover"]),
            (BankBrand::Fidelity, &["Fidelity"]),
            (BankBrand::Huntington, &["Huntington"]),
            (BankBrand::NavyFederal, &["Navy Federal"]),
            (BankBrand::Pnc, &["PNC"]),
            (BankBrand::Regions, &["Regions"]),
            (BankBrand::SunTrust, &["SunTrust"]),
            (BankBrand::TdBank, &["TD Bank"]),
            (BankBrand::UsBank, &["US Bank", "U.S. Bank"]),
            (BankBrand::Usaa, &["USAA"]),
            (BankBrand::WellsFargo, &["Wells Fargo"]),
        ];

        for (brand, aliases) in defaults {
            for alias in aliases {
                self.register_alias(brand, alias);
            }
        }
    }

    /// Map another name prefix to a brand
    pub fn register_alias(&mut self, brand: BankBrand, alias: &str) {
        let normalized = normalize(alias);
        if normalized.is_empty() {
            return;
        }

        match self.brands.iter_mut().find(|entry| entry.brand == brand) {
            Some(entry) => {
                if !entry.aliases.contains(&normalized) {
                    entry.aliases.push(normalized);
                }
            }
            None => self.brands.push(BrandEntry {
                brand,
                aliases: vec![normalized],
            }),
        }
    }

    /// Find the brand for a bank name
    ///
    /// The longest matching prefix wins, so "Citizens Bank" is never
    /// claimed by the shorter "Citi".
    pub fn find_brand(&self, bank_name: &str) -> Option<BankBrand> {
        let normalized = normalize(bank_name);
        if normalized.is_empty() {
            return None;
        }

        self.brands
            .iter()
            .flat_map(|entry| entry.aliases.iter().map(move |alias| (entry.brand, alias)))
            .filter(|(_, alias)| normalized.starts_with(alias.as_str()))
            .max_by_key(|(_, alias)| alias.len())
            .map(|(brand, _)| brand)
    }

    /// Number of registered brands
    pub fn count(&self) -> usize {
        self.brands.len()
    }
}

impl IconResolver for BankIconRegistry {
    fn resolve(&self, bank_name: &str, is_card: bool) -> BankIcon {
        match self.find_brand(bank_name) {
            Some(brand) => BankIcon::for_brand(brand, is_card),
            None => {
                if !bank_name.is_empty() {
                    tracing::debug!(bank_name, is_card, "No icon for bank, using generic");
                }
                BankIcon::generic(is_card)
            }
        }
    }
}

impl Default for BankIconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, alphanumerics only: "U.S. Bank" → "usbank"
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_initialization() {
        let registry = BankIconRegistry::new();
        assert_eq!(registry.count(), 19);
    }

    #[test]
    fn test_find_brand_by_name_and_alias() {
        let registry = BankIconRegistry::new();

        assert_eq!(registry.find_brand("Chase"), Some(BankBrand::Chase));
        assert_eq!(registry.find_brand("CHASE"), Some(BankBrand::Chase));
        assert_eq!(registry.find_brand("JPMorgan Chase Bank, N.A."), Some(BankBrand::Chase));
        assert_eq!(registry.find_brand("U.S. Bank"), Some(BankBrand::UsBank));
        assert_eq!(registry.find_brand("us bank"), Some(BankBrand::UsBank));
        assert_eq!(registry.find_brand("BofA"), Some(BankBrand::BankOfAmerica));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let registry = BankIconRegistry::new();

        assert_eq!(registry.find_brand("Citizens Bank"), Some(BankBrand::Citizens));
        assert_eq!(registry.find_brand("Citibank N.A."), Some(BankBrand::Citibank));
    }

    #[test]
    fn test_unknown_bank_is_generic() {
        let registry = BankIconRegistry::new();

        let icon = registry.resolve("First Bank of Nowhere", false);
        assert_eq!(icon, BankIcon::generic(false));
        assert!(icon.icon.is_generic());
        assert_eq!(icon.icon_size, None);

        let empty = registry.resolve("", true);
        assert_eq!(empty.icon, Icon::Card(BankBrand::Generic));
        assert_eq!(empty.icon_size, None);
    }

    #[test]
    fn test_known_brand_has_size() {
        let registry = BankIconRegistry::new();

        let bank = registry.resolve("Wells Fargo", false);
        assert_eq!(bank.icon, Icon::Bank(BankBrand::WellsFargo));
        assert_eq!(bank.icon_size, Some(IconSize::EXTRA_LARGE));

        let card = registry.resolve("Wells Fargo", true);
        assert_eq!(card.icon, Icon::Card(BankBrand::WellsFargo));
    }

    #[test]
    fn test_register_alias() {
        let mut registry = BankIconRegistry::new();
        assert_eq!(registry.find_brand("Truist"), None);

        registry.register_alias(BankBrand::SunTrust, "Truist");
        registry.register_alias(BankBrand::SunTrust, "Truist"); // Duplicate - no-op

        assert_eq!(registry.find_brand("Truist Bank"), Some(BankBrand::SunTrust));
        assert_eq!(registry.count(), 19);
    }

    #[test]
    fn test_empty_registry_resolves_generic() {
        let registry = BankIconRegistry::empty();
        assert_eq!(registry.resolve("Chase", false), BankIcon::generic(false));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let registry = BankIconRegistry::new();
        assert_eq!(registry.resolve("Capital One", true), registry.resolve("Capital One", true));
    }
}
