// ============================================================================
// LEDGER ACCOUNTING SPECIFICATIONS
// ============================================================================
//
// These specifications call the contract entry points directly and compare
// snapshots taken before and after.
//
// KEY INVARIANTS:
// 1. Mint and burn move balance and supply by the same amount
// 2. Transfer conserves the sum of the two balances
// 3. A failed transfer changes nothing
// 4. Held-id counts move only on zero crossings
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Bytes, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::certora_specs::model::{self, LedgerSnapshot};

#[cfg(feature = "certora")]
use crate::invariants;

#[cfg(feature = "certora")]
use crate::Psp35Token;

/// RULE: Mint increases balance and supply by exactly the minted amount
#[cfg(feature = "certora")]
#[rule]
pub fn mint_increases_balance_and_supply(env: Env, to: Address, other: Address, amount: u128) {
    model::init();
    let id = model::skolem_token_id();

    let before = LedgerSnapshot::capture(&env, &other, &to, &id);
    let result = Psp35Token::mint(env.clone(), to.clone(), id.clone(), amount);
    cvlr_assume!(result.is_ok());
    let after = LedgerSnapshot::capture(&env, &other, &to, &id);

    cvlr_assert!(invariants::mint_accounted(
        before.to_balance,
        after.to_balance,
        before.supply,
        after.supply,
        amount,
    ));
    cvlr_assert!(invariants::count_tracks_zero_crossings(
        before.to_count,
        after.to_count,
        before.to_balance,
        after.to_balance,
    ));
}

/// RULE: Burn lowers balance and supply by exactly the burned amount
#[cfg(feature = "certora")]
#[rule]
pub fn burn_decreases_balance_and_supply(env: Env, from: Address, other: Address, amount: u128) {
    model::init();
    let id = model::skolem_token_id();

    let before = LedgerSnapshot::capture(&env, &from, &other, &id);
    let ids_amounts = soroban_sdk::vec![&env, (id.clone(), amount)];
    let result = Psp35Token::burn(env.clone(), from.clone(), ids_amounts);
    cvlr_assume!(result.is_ok());
    let after = LedgerSnapshot::capture(&env, &from, &other, &id);

    cvlr_assert!(invariants::burn_accounted(
        before.from_balance,
        after.from_balance,
        before.supply,
        after.supply,
        amount,
    ));
    cvlr_assert!(invariants::count_tracks_zero_crossings(
        before.from_count,
        after.from_count,
        before.from_balance,
        after.from_balance,
    ));
}

/// RULE: Transfer between distinct accounts conserves balances and supply
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_conserves_balances(env: Env, from: Address, to: Address, amount: u128) {
    model::init();
    cvlr_assume!(from != to);
    let id = model::skolem_token_id();

    let before = LedgerSnapshot::capture(&env, &from, &to, &id);
    let result = Psp35Token::transfer(
        env.clone(),
        from.clone(),
        to.clone(),
        id.clone(),
        amount,
        Bytes::new(&env),
    );
    cvlr_assume!(result.is_ok());
    let after = LedgerSnapshot::capture(&env, &from, &to, &id);

    cvlr_assert!(invariants::transfer_conserves(
        before.from_balance,
        before.to_balance,
        after.from_balance,
        after.to_balance,
        amount,
    ));
    cvlr_assert!(before.supply == after.supply);
}

/// RULE: Transfer above the balance fails
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_above_balance_fails(env: Env, from: Address, to: Address, amount: u128) {
    model::init();
    let id = model::skolem_token_id();

    let before = LedgerSnapshot::capture(&env, &from, &to, &id);
    cvlr_assume!(amount > before.from_balance);

    let result = Psp35Token::transfer(env.clone(), from, to, id, amount, Bytes::new(&env));
    cvlr_assert!(result.is_err());
}

/// RULE: Sanity - a successful transfer is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_sanity(env: Env, from: Address, to: Address, amount: u128) {
    model::init();
    let id = model::skolem_token_id();
    let result = Psp35Token::transfer(env.clone(), from, to, id, amount, Bytes::new(&env));
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{count_tracks_zero_crossings, transfer_conserves};

    #[test]
    fn test_full_transfer_empties_sender() {
        let (from_before, to_before) = (10u128, 0u128);
        let (from_after, to_after) = (0u128, 10u128);

        assert!(transfer_conserves(from_before, to_before, from_after, to_after, 10));
        // Sender loses the id, recipient gains it
        assert!(count_tracks_zero_crossings(1, 0, from_before, from_after));
        assert!(count_tracks_zero_crossings(0, 1, to_before, to_after));
    }

    #[test]
    fn test_partial_transfer_keeps_counts() {
        assert!(transfer_conserves(10, 5, 9, 6, 1));
        assert!(count_tracks_zero_crossings(2, 2, 10, 9));
        assert!(count_tracks_zero_crossings(1, 1, 5, 6));
    }
}
