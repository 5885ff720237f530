// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Pure predicates over ledger values. They are used by the unit tests and by
// the Certora rules in `certora_specs`, which feed them values read before
// and after a contract call.
//
// INVARIANT CATEGORIES:
//
// 1. SUPPLY INVARIANTS
//    - Balances of an id sum to its supply
//    - Mint and burn move balance and supply by the same amount
//
// 2. TRANSFER INVARIANTS
//    - A transfer conserves the sum of both balances
//    - A failed transfer leaves both balances untouched
//
// 3. COUNT INVARIANTS
//    - `None` queries count ids, not amounts
//
// 4. ALLOWANCE INVARIANTS
//    - Consumption never exceeds the amount moved
//    - The unlimited value is never consumed
//
// ============================================================================

use psp35_types::UNLIMITED_ALLOWANCE;

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Invariant: balances of an id sum to its supply
///
/// Property:
///   sum(balance_of(a, id) for all a) == total_supply(id)
pub fn balances_match_supply(balance_sum: u128, supply: u128) -> bool {
    balance_sum == supply
}

/// Invariant: mint moves balance and supply by exactly `amount`
pub fn mint_accounted(
    balance_before: u128,
    balance_after: u128,
    supply_before: u128,
    supply_after: u128,
    amount: u128,
) -> bool {
    balance_before.checked_add(amount) == Some(balance_after)
        && supply_before.checked_add(amount) == Some(supply_after)
}

/// Invariant: burn moves balance and supply by exactly `amount`
pub fn burn_accounted(
    balance_before: u128,
    balance_after: u128,
    supply_before: u128,
    supply_after: u128,
    amount: u128,
) -> bool {
    balance_before.checked_sub(amount) == Some(balance_after)
        && supply_before.checked_sub(amount) == Some(supply_after)
}

// ============================================================================
// TRANSFER INVARIANTS
// ============================================================================

/// Invariant: a transfer between two distinct accounts conserves their sum
/// and moves exactly `amount`
pub fn transfer_conserves(
    from_before: u128,
    to_before: u128,
    from_after: u128,
    to_after: u128,
    amount: u128,
) -> bool {
    from_before.checked_sub(amount) == Some(from_after)
        && to_before.checked_add(amount) == Some(to_after)
}

/// Invariant: a failed call leaves balances bit-identical
pub fn balances_unchanged(
    from_before: u128,
    to_before: u128,
    from_after: u128,
    to_after: u128,
) -> bool {
    from_before == from_after && to_before == to_after
}

// ============================================================================
// COUNT INVARIANTS
// ============================================================================

/// Invariant: the held-id count changes only when a balance crosses zero
///
/// Property:
///   count_after == count_before + (0 -> nonzero) - (nonzero -> 0)
pub fn count_tracks_zero_crossings(
    count_before: u128,
    count_after: u128,
    balance_before: u128,
    balance_after: u128,
) -> bool {
    match (balance_before == 0, balance_after == 0) {
        (true, false) => count_after == count_before + 1,
        (false, true) => count_before > 0 && count_after == count_before - 1,
        _ => count_after == count_before,
    }
}

// ============================================================================
// ALLOWANCE INVARIANTS
// ============================================================================

/// Invariant: consumption never exceeds the amount moved, and the unlimited
/// value is left untouched
pub fn allowance_consumed_correctly(before: u128, after: u128, amount: u128) -> bool {
    if before == UNLIMITED_ALLOWANCE {
        after == UNLIMITED_ALLOWANCE
    } else {
        before.checked_sub(amount) == Some(after)
    }
}

// ============================================================================
// TESTS
// ============================================================================
