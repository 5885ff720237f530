#![no_std]

mod allowance;
mod certora_specs;
mod invariants;
mod ledger;
mod receiver;
mod storage;

use psp35_types::{BlanketPolicy, Id, IdAmounts, LedgerConfig, Psp35Error};
use soroban_sdk::{contract, contractimpl, vec, Address, Bytes, Env, Symbol};
use storage::{get_config, get_owner_token_at, get_token_at, has_config, set_config, set_receiver};

#[contract]
pub struct Psp35Token;

#[contractimpl]
impl Psp35Token {
    /// Fix the blanket allowance policy for the lifetime of the ledger.
    /// Must be called before any allowance operation.
    pub fn initialize(env: Env, blanket_policy: BlanketPolicy) {
        if has_config(&env) {
            panic!("Already initialized");
        }
        set_config(&env, &LedgerConfig { blanket_policy });
    }

    /// Mint `amount` of `id` to `to`
    pub fn mint(env: Env, to: Address, id: Id, amount: u128) -> Result<(), Psp35Error> {
        to.require_auth();
        ledger::mint(&env, &to, &id, amount)
    }

    /// Burn every (id, amount) pair from `from`
    pub fn burn(env: Env, from: Address, ids_amounts: IdAmounts) -> Result<(), Psp35Error> {
        from.require_auth();
        ledger::burn(&env, &from, &ids_amounts)
    }

    /// Transfer `amount` of `id` from `from` to `to`
    ///
    /// # Errors
    /// * `InsufficientBalance` - `from` holds less than `amount`
    /// * `TransferRejected` - `to` is a registered receiver and refused
    /// * `Overflow` - `to`'s balance would exceed u128::MAX
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        id: Id,
        amount: u128,
        data: Bytes,
    ) -> Result<(), Psp35Error> {
        from.require_auth();
        let ids_amounts = vec![&env, (id, amount)];
        ledger::transfer(&env, &from, &from, &to, &ids_amounts, &data)
    }

    /// Transfer `amount` of `id` from `from` to `to`, spending `operator`'s
    /// allowance unless `operator` is `from`
    ///
    /// # Errors
    /// * `InsufficientAllowance` - no allowance of `operator` covers `amount`
    /// * `InsufficientBalance` - `from` holds less than `amount`
    /// * `TransferRejected` - `to` is a registered receiver and refused
    /// * `Overflow` - `to`'s balance would exceed u128::MAX
    pub fn transfer_from(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        id: Id,
        amount: u128,
        data: Bytes,
    ) -> Result<(), Psp35Error> {
        operator.require_auth();
        let ids_amounts = vec![&env, (id, amount)];
        ledger::transfer(&env, &operator, &from, &to, &ids_amounts, &data)
    }

    /// Transfer several ids at once; the receiver hook sees the whole batch
    pub fn batch_transfer(
        env: Env,
        from: Address,
        to: Address,
        ids_amounts: IdAmounts,
        data: Bytes,
    ) -> Result<(), Psp35Error> {
        from.require_auth();
        ledger::transfer(&env, &from, &from, &to, &ids_amounts, &data)
    }

    /// Batch form of `transfer_from`
    pub fn batch_transfer_from(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        ids_amounts: IdAmounts,
        data: Bytes,
    ) -> Result<(), Psp35Error> {
        operator.require_auth();
        ledger::transfer(&env, &operator, &from, &to, &ids_amounts, &data)
    }

    /// Set the allowance of `spender` over `owner`'s tokens of `id`,
    /// or over all of them when `id` is `None`
    pub fn approve(env: Env, owner: Address, spender: Address, id: Option<Id>, amount: u128) {
        owner.require_auth();
        ledger::approve(&env, &owner, &spender, &id, amount);
    }

    /// Opt in to the `before_received` hook
    pub fn register_receiver(env: Env, receiver: Address) {
        receiver.require_auth();
        set_receiver(&env, &receiver, true);

        env.events().publish(
            (Symbol::new(&env, "receiver_registered"),),
            (receiver,),
        );
    }

    /// Opt out of the `before_received` hook
    pub fn unregister_receiver(env: Env, receiver: Address) {
        receiver.require_auth();
        set_receiver(&env, &receiver, false);

        env.events().publish(
            (Symbol::new(&env, "receiver_unregistered"),),
            (receiver,),
        );
    }

    // === View Functions ===

    /// Balance of `id`, or the number of ids held when `id` is `None`
    pub fn balance_of(env: Env, owner: Address, id: Option<Id>) -> u128 {
        ledger::balance_of(&env, &owner, &id)
    }

    /// Supply of `id`, or the number of ids with nonzero supply when `id` is `None`
    pub fn total_supply(env: Env, id: Option<Id>) -> u128 {
        ledger::total_supply(&env, &id)
    }

    /// Allowance of `spender` over `owner`'s tokens
    pub fn allowance(env: Env, owner: Address, spender: Address, id: Option<Id>) -> u128 {
        ledger::allowance(&env, &owner, &spender, &id)
    }

    /// Get the blanket allowance policy
    pub fn blanket_policy(env: Env) -> BlanketPolicy {
        get_config(&env).blanket_policy
    }

    /// Check if `address` receives the `before_received` hook
    pub fn is_receiver(env: Env, address: Address) -> bool {
        storage::is_receiver(&env, &address)
    }

    /// Get the id at `index` among ids with nonzero supply
    pub fn token_by_index(env: Env, index: u32) -> Option<Id> {
        get_token_at(&env, index)
    }

    /// Get the id at `index` among ids `owner` holds
    pub fn owners_token_by_index(env: Env, owner: Address, index: u32) -> Option<Id> {
        get_owner_token_at(&env, &owner, index)
    }
}
