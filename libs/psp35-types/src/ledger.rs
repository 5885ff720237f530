use soroban_sdk::contracttype;

/// How blanket (`None` id) allowances are granted and consumed
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlanketPolicy {
    /// Any nonzero blanket approval is stored as `UNLIMITED_ALLOWANCE` and is
    /// never decremented. A zero approval revokes it.
    Unlimited,
    /// Blanket approvals keep the approved amount and are decremented when a
    /// transfer is not covered by the per-id allowance.
    Metered,
}

/// Ledger configuration - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub blanket_policy: BlanketPolicy,
}
