// ============================================================================
// ALLOWANCE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. approve overwrites, it never adds
// 2. transfer_from without any allowance fails for a non-owner
// 3. Consumption matches the amount moved; unlimited is never consumed
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Bytes, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::certora_specs::model;

#[cfg(feature = "certora")]
use crate::Psp35Token;

#[cfg(feature = "certora")]
use psp35_types::BlanketPolicy;

/// RULE: A per-id approve overwrites the previous value
#[cfg(feature = "certora")]
#[rule]
pub fn approve_overwrites(env: Env, owner: Address, spender: Address, first: u128, second: u128) {
    model::init();
    Psp35Token::initialize(env.clone(), BlanketPolicy::Unlimited);
    let id = Some(model::skolem_token_id());

    Psp35Token::approve(env.clone(), owner.clone(), spender.clone(), id.clone(), first);
    Psp35Token::approve(env.clone(), owner.clone(), spender.clone(), id.clone(), second);

    let blanket = Psp35Token::allowance(env.clone(), owner.clone(), spender.clone(), None);
    cvlr_assume!(blanket == 0);
    cvlr_assert!(Psp35Token::allowance(env, owner, spender, id) == second);
}

/// RULE: transfer_from by a non-owner without allowance fails
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_from_requires_allowance(
    env: Env,
    operator: Address,
    from: Address,
    to: Address,
    amount: u128,
) {
    model::init();
    Psp35Token::initialize(env.clone(), BlanketPolicy::Unlimited);
    cvlr_assume!(operator != from);
    cvlr_assume!(amount > 0);
    let id = model::skolem_token_id();

    let allowance = Psp35Token::allowance(
        env.clone(),
        from.clone(),
        operator.clone(),
        Some(id.clone()),
    );
    cvlr_assume!(allowance < amount);

    let result = Psp35Token::transfer_from(env.clone(), operator, from, to, id, amount, Bytes::new(&env));
    cvlr_assert!(result.is_err());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
