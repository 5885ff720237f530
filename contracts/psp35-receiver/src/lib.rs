#![no_std]

use psp35_types::{Id, ReceiverError};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env, IntoVal, Symbol, Vec};

/// Receiver contract that can be told to refuse incoming transfers
#[contract]
pub struct Psp35ReceiverMock;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger this receiver registered with
    Ledger,
    /// Refuse transfers while set
    RevertNext,
    /// Call back into the ledger from the hook while set
    Reenter,
    /// Id -> total amount accepted, saturating at u128::MAX
    Received(Id),
    /// Number of accepted hook calls
    HookCalls,
    /// Data attached to the last accepted transfer
    LastData,
}

#[contractimpl]
impl Psp35ReceiverMock {
    /// Store the ledger and register for its `before_received` hook
    pub fn initialize(env: Env, ledger: Address) {
        if env.storage().instance().has(&DataKey::Ledger) {
            panic!("Already initialized");
        }
        env.storage().instance().set(&DataKey::Ledger, &ledger);

        env.invoke_contract::<()>(
            &ledger,
            &Symbol::new(&env, "register_receiver"),
            (env.current_contract_address(),).into_val(&env),
        );
    }

    /// Refuse transfers until `accept_transfers` is called.
    ///
    /// A refusal is rolled back together with the transfer, so the flag
    /// cannot clear itself from inside the hook.
    pub fn revert_next_transfer(env: Env) {
        env.storage().instance().set(&DataKey::RevertNext, &true);
    }

    /// Accept transfers again
    pub fn accept_transfers(env: Env) {
        env.storage().instance().remove(&DataKey::RevertNext);
    }

    /// Make the hook query the ledger while a transfer is pending
    pub fn set_reenter(env: Env, enabled: bool) {
        env.storage().instance().set(&DataKey::Reenter, &enabled);
    }

    /// Hook invoked by the ledger before a transfer into this contract commits
    pub fn before_received(
        env: Env,
        operator: Address,
        from: Address,
        ids_amounts: Vec<(Id, u128)>,
        data: Bytes,
    ) -> Result<(), ReceiverError> {
        let revert: bool = env
            .storage()
            .instance()
            .get(&DataKey::RevertNext)
            .unwrap_or(false);
        if revert {
            return Err(ReceiverError::TransferRejected);
        }

        let reenter: bool = env
            .storage()
            .instance()
            .get(&DataKey::Reenter)
            .unwrap_or(false);
        if reenter {
            let ledger = get_ledger(&env);
            let _count: u128 = env.invoke_contract(
                &ledger,
                &Symbol::new(&env, "balance_of"),
                (env.current_contract_address(), Option::<Id>::None).into_val(&env),
            );
        }

        for (id, amount) in ids_amounts.iter() {
            let key = DataKey::Received(id);
            let total: u128 = env.storage().persistent().get(&key).unwrap_or(0);
            env.storage()
                .persistent()
                .set(&key, &total.saturating_add(amount));
        }

        let calls: u32 = env
            .storage()
            .instance()
            .get(&DataKey::HookCalls)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::HookCalls, &calls.saturating_add(1));
        env.storage().instance().set(&DataKey::LastData, &data);

        env.events().publish(
            (Symbol::new(&env, "received"),),
            (operator, from, ids_amounts),
        );

        Ok(())
    }

    // === View Functions ===

    /// Get the ledger address
    pub fn ledger(env: Env) -> Address {
        get_ledger(&env)
    }

    /// Get the total amount of `id` accepted so far
    pub fn received(env: Env, id: Id) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::Received(id))
            .unwrap_or(0)
    }

    /// Get the number of accepted hook calls
    pub fn hook_calls(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::HookCalls)
            .unwrap_or(0)
    }

    /// Get the data attached to the last accepted transfer
    pub fn last_data(env: Env) -> Option<Bytes> {
        env.storage().instance().get(&DataKey::LastData)
    }
}

fn get_ledger(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Ledger)
        .expect("Not initialized")
}
