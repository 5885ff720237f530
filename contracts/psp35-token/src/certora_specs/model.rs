// ============================================================================
// SKOLEM STATE AND MODEL INITIALIZATION
// ============================================================================

/// Skolem variable for a token id - proving a property for an arbitrary id
/// proves it for all ids
#[cfg(feature = "certora")]
static mut SKOLEM_TOKEN_ID: u32 = 0;

#[cfg(feature = "certora")]
pub fn skolem_token_id() -> psp35_types::Id {
    unsafe { psp35_types::Id::U32(SKOLEM_TOKEN_ID) }
}

/// Initialize model state with nondeterministic values
#[cfg(feature = "certora")]
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        SKOLEM_TOKEN_ID = nondet();
    }
}

// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures the balances of two accounts and the supply of one id
#[cfg(feature = "certora")]
#[derive(Clone)]
pub struct LedgerSnapshot {
    pub from_balance: u128,
    pub to_balance: u128,
    pub from_count: u128,
    pub to_count: u128,
    pub supply: u128,
}

#[cfg(feature = "certora")]
impl LedgerSnapshot {
    pub fn capture(
        env: &soroban_sdk::Env,
        from: &soroban_sdk::Address,
        to: &soroban_sdk::Address,
        id: &psp35_types::Id,
    ) -> Self {
        use crate::Psp35Token;

        Self {
            from_balance: Psp35Token::balance_of(env.clone(), from.clone(), Some(id.clone())),
            to_balance: Psp35Token::balance_of(env.clone(), to.clone(), Some(id.clone())),
            from_count: Psp35Token::balance_of(env.clone(), from.clone(), None),
            to_count: Psp35Token::balance_of(env.clone(), to.clone(), None),
            supply: Psp35Token::total_supply(env.clone(), Some(id.clone())),
        }
    }
}
