use soroban_sdk::{contracttype, Bytes};

/// Token identifier.
///
/// Every distinct value is an independent sub-ledger. Aggregate queries take
/// `Option<Id>`, where `None` means "all ids" and is never a concrete id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Id {
    U32(u32),
    U64(u64),
    U128(u128),
    Bytes(Bytes),
}
