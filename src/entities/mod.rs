// Record Models
//
// Input records mirror the sparse JSON storage hands us; every optional
// path has a default so parsing never fails on missing data.
// PaymentMethod is the one output shape every record is lowered into.

pub mod fields;
pub mod bank_account;
pub mod card;
pub mod pending;
pub mod paypal;
pub mod payment_method;

pub use fields::{ErrorFields, PendingAction};
pub use bank_account::{BankAccountRecord, BankAccountType, BankAdditionalData};
pub use card::{CardAccountData, CardAdditionalData, CardRecord};
pub use pending::{PendingBankAccount, PersonalBankAccountState};
pub use paypal::{PayPalMeAlias, PAYPAL_ME_KEY, PAYPAL_ME_METHOD_ID};
pub use payment_method::{
    AccountData, PaymentMethod, PaymentMethodType,
    PENDING_BANK_ACCOUNT_KEY, PENDING_BANK_ACCOUNT_METHOD_ID,
};
