use soroban_sdk::contracterror;

/// Failures of ledger operations.
///
/// Returning any of these from a contract function rolls back every write
/// made during the call, including writes made by nested receiver calls.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Psp35Error {
    /// Source balance does not cover the amount
    InsufficientBalance = 1,
    /// Neither the per-id nor the blanket allowance covers the amount
    InsufficientAllowance = 2,
    /// The destination's receiver hook refused the transfer
    TransferRejected = 3,
    /// A balance or supply would exceed u128::MAX
    Overflow = 4,
}

/// Failures a receiver hook may report back to the ledger
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ReceiverError {
    TransferRejected = 1,
}
