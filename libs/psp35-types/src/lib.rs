#![no_std]

mod error;
mod id;
mod ledger;
mod receiver;

pub use error::*;
pub use id::*;
pub use ledger::*;
pub use receiver::*;

/// Allowance value that is never consumed by `transfer_from`.
/// A blanket approval under the default policy is stored as this value.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

/// Pairs of (token id, amount) moved by a batch operation
pub type IdAmounts = soroban_sdk::Vec<(Id, u128)>;
