use crate::allowance::{approved_value, effective_allowance, plan_spend, AllowanceSource};
use crate::receiver::check_receiver;
use crate::storage::{
    get_allowance, get_balance, get_config, get_owner_token_count, get_supply, get_token_count,
    set_allowance, set_balance, set_supply, MAX_BATCH_SIZE,
};
use psp35_types::{Id, IdAmounts, Psp35Error};
use soroban_sdk::{Address, Bytes, Env, Symbol};

/// Balance of one id, or the number of ids held when `id` is `None`
pub fn balance_of(env: &Env, owner: &Address, id: &Option<Id>) -> u128 {
    match id {
        Some(id) => get_balance(env, owner, id),
        None => get_owner_token_count(env, owner) as u128,
    }
}

/// Supply of one id, or the number of ids with nonzero supply when `id` is `None`
pub fn total_supply(env: &Env, id: &Option<Id>) -> u128 {
    match id {
        Some(id) => get_supply(env, id),
        None => get_token_count(env) as u128,
    }
}

/// Stored blanket allowance for `None`, effective allowance for a concrete id
pub fn allowance(env: &Env, owner: &Address, spender: &Address, id: &Option<Id>) -> u128 {
    let blanket = get_allowance(env, owner, spender, &None);
    match id {
        Some(_) => effective_allowance(get_allowance(env, owner, spender, id), blanket),
        None => blanket,
    }
}

/// Overwrite the allowance of `spender` over `owner`'s tokens
pub fn approve(env: &Env, owner: &Address, spender: &Address, id: &Option<Id>, amount: u128) {
    let policy = get_config(env).blanket_policy;
    let value = approved_value(policy, id.is_none(), amount);
    set_allowance(env, owner, spender, id, value);

    env.events().publish(
        (Symbol::new(env, "approval"),),
        (owner.clone(), spender.clone(), id.clone(), value),
    );
}

/// Create `amount` of `id` in `to`'s balance
pub fn mint(env: &Env, to: &Address, id: &Id, amount: u128) -> Result<(), Psp35Error> {
    let supply = get_supply(env, id)
        .checked_add(amount)
        .ok_or(Psp35Error::Overflow)?;
    let balance = get_balance(env, to, id)
        .checked_add(amount)
        .ok_or(Psp35Error::Overflow)?;

    set_supply(env, id, supply);
    set_balance(env, to, id, balance);

    env.events().publish(
        (Symbol::new(env, "mint"),),
        (to.clone(), id.clone(), amount),
    );

    Ok(())
}

/// Destroy every (id, amount) pair from `from`'s balances
pub fn burn(env: &Env, from: &Address, ids_amounts: &IdAmounts) -> Result<(), Psp35Error> {
    check_batch_size(ids_amounts);

    for (id, amount) in ids_amounts.iter() {
        let balance = get_balance(env, from, &id);
        if balance < amount {
            return Err(Psp35Error::InsufficientBalance);
        }

        // supply >= balance always holds, so this cannot underflow
        let supply = get_supply(env, &id);
        set_balance(env, from, &id, balance - amount);
        set_supply(env, &id, supply - amount);

        env.events().publish(
            (Symbol::new(env, "burn"),),
            (from.clone(), id, amount),
        );
    }

    Ok(())
}

/// Move every (id, amount) pair from `from` to `to` on behalf of `operator`.
///
/// Allowances are checked and consumed for the whole batch before any
/// balance is looked at, so an unauthorized call always reports
/// `InsufficientAllowance`. The receiver hook runs last; the host rolls back
/// every write made here if this returns an error.
pub fn transfer(
    env: &Env,
    operator: &Address,
    from: &Address,
    to: &Address,
    ids_amounts: &IdAmounts,
    data: &Bytes,
) -> Result<(), Psp35Error> {
    check_batch_size(ids_amounts);

    if operator != from {
        spend_allowances(env, operator, from, ids_amounts)?;
    }

    for (id, amount) in ids_amounts.iter() {
        move_balance(env, from, to, &id, amount)?;

        env.events().publish(
            (Symbol::new(env, "transfer"),),
            (operator.clone(), from.clone(), to.clone(), id, amount),
        );
    }

    check_receiver(env, operator, from, to, ids_amounts, data)
}

fn spend_allowances(
    env: &Env,
    operator: &Address,
    from: &Address,
    ids_amounts: &IdAmounts,
) -> Result<(), Psp35Error> {
    let policy = get_config(env).blanket_policy;

    for (id, amount) in ids_amounts.iter() {
        let id = Some(id);
        // Re-read per pair so a batch repeating an id sees earlier consumption
        let specific = get_allowance(env, from, operator, &id);
        let blanket = get_allowance(env, from, operator, &None);

        let spend = plan_spend(policy, false, specific, blanket, amount)?;
        match spend.source {
            AllowanceSource::Specific => set_allowance(env, from, operator, &id, spend.remaining),
            AllowanceSource::Blanket => set_allowance(env, from, operator, &None, spend.remaining),
            AllowanceSource::Owner => {}
        }
    }

    Ok(())
}

fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    id: &Id,
    amount: u128,
) -> Result<(), Psp35Error> {
    let from_balance = get_balance(env, from, id);
    if from_balance < amount {
        return Err(Psp35Error::InsufficientBalance);
    }
    set_balance(env, from, id, from_balance - amount);

    // Read after the debit so a self-transfer nets to zero
    let to_balance = get_balance(env, to, id)
        .checked_add(amount)
        .ok_or(Psp35Error::Overflow)?;
    set_balance(env, to, id, to_balance);

    Ok(())
}

fn check_batch_size(ids_amounts: &IdAmounts) {
    if ids_amounts.len() > MAX_BATCH_SIZE {
        panic!("Batch too large");
    }
}
