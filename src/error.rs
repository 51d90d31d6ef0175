// Input errors - caller preconditions the engine refuses to guess around
//
// Everything else degrades to a safe default; these would produce a broken
// list (no description, or a clashing/absent identity), so aggregation fails
// as a whole instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Pending bank account '{address_name}' has no account number")]
    MissingAccountNumber { address_name: String },

    #[error("{kind} '{title}' has no id")]
    MissingMethodId { kind: &'static str, title: String },

    #[error("{kind} '{title}' uses method id 0, which is reserved for the pending bank account")]
    ReservedMethodId { kind: &'static str, title: String },
}
