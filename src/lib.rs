// Wallet Payment Methods - Core Library
// Aggregation, eligibility and transfer-fee engine used by the CLI and tests

pub mod entities;
pub mod error;
pub mod icons;
pub mod localize;
pub mod eligibility;
pub mod aggregator;
pub mod fees;
pub mod snapshot;

// Re-export commonly used types
pub use entities::{
    AccountData, BankAccountRecord, BankAccountType, CardRecord, ErrorFields,
    PayPalMeAlias, PaymentMethod, PaymentMethodType, PendingAction,
    PendingBankAccount, PersonalBankAccountState,
};
pub use error::InputError;
pub use icons::{BankBrand, BankIcon, BankIconRegistry, Icon, IconResolver, IconSize};
pub use localize::{EnglishPhrases, Localizer};
pub use eligibility::has_expensify_payment_method;
pub use aggregator::MethodAggregator;
pub use fees::{
    calculate_wallet_transfer_balance_fee, FeeCalculator, FeeSchedule, FeeTier,
    TransferMethodType, TransferQuote,
};
pub use snapshot::WalletSnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
