use psp35_types::{Id, LedgerConfig};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints for ledger operations:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Each (owner, id) balance is a separate entry
// - Allowances are keyed per (owner, spender, id); the blanket allowance has
//   its own key variant so it can never collide with a concrete id
// - Held ids per owner and ids with supply use indexed storage
//   (count + indexed entries) instead of a Vec, removal is swap-and-pop
// - Zero entries are removed instead of stored
//
// A single-id transfer touches 2 balances, up to 8 owner index entries,
// 2 allowance entries and the receiver flag. A batch touches that per pair,
// so batches are capped at MAX_BATCH_SIZE pairs.
// ============================================================================

/// Maximum number of (id, amount) pairs in a batch operation
pub const MAX_BATCH_SIZE: u32 = 5;

/// Storage keys for the ledger contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger configuration (Instance storage)
    Config,
    /// (owner, id) -> u128 balance (Persistent storage)
    Balance(Address, Id),
    /// (owner, spender, id) -> u128 allowance (Persistent storage)
    Allowance(Address, Address, Id),
    /// (owner, spender) -> u128 blanket allowance (Persistent storage)
    BlanketAllowance(Address, Address),
    /// id -> u128 total supply (Persistent storage)
    Supply(Id),
    /// owner -> number of ids held with nonzero balance
    OwnerTokenCount(Address),
    /// (owner, index) -> id
    OwnerTokenAt(Address, u32),
    /// (owner, id) -> index in the owner's list
    OwnerTokenIndex(Address, Id),
    /// Number of ids with nonzero supply (Instance storage)
    TokenCount,
    /// index -> id
    TokenAt(u32),
    /// id -> index in the global list
    TokenIndex(Id),
    /// Address registered for the before_received hook
    Receiver(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn read_amount(env: &Env, key: &DataKey) -> u128 {
    env.storage().persistent().get(key).unwrap_or(0u128)
}

fn write_amount(env: &Env, key: &DataKey, amount: u128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        extend_persistent_ttl(env, key);
    }
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> LedgerConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn get_balance(env: &Env, owner: &Address, id: &Id) -> u128 {
    read_amount(env, &DataKey::Balance(owner.clone(), id.clone()))
}

/// Write a balance, keeping the owner's held-id index in step
pub fn set_balance(env: &Env, owner: &Address, id: &Id, amount: u128) {
    let previous = get_balance(env, owner, id);
    write_amount(env, &DataKey::Balance(owner.clone(), id.clone()), amount);

    if previous == 0 && amount != 0 {
        add_token_to_owner(env, owner, id);
    } else if previous != 0 && amount == 0 {
        remove_token_from_owner(env, owner, id);
    }
}

// === Allowance ===

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address, id: &Option<Id>) -> u128 {
    read_amount(env, &allowance_key(owner, spender, id))
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, id: &Option<Id>, amount: u128) {
    write_amount(env, &allowance_key(owner, spender, id), amount);
}

fn allowance_key(owner: &Address, spender: &Address, id: &Option<Id>) -> DataKey {
    match id {
        Some(id) => DataKey::Allowance(owner.clone(), spender.clone(), id.clone()),
        None => DataKey::BlanketAllowance(owner.clone(), spender.clone()),
    }
}

// === Supply ===

pub fn get_supply(env: &Env, id: &Id) -> u128 {
    read_amount(env, &DataKey::Supply(id.clone()))
}

/// Write a supply, keeping the global id index in step
pub fn set_supply(env: &Env, id: &Id, amount: u128) {
    let previous = get_supply(env, id);
    write_amount(env, &DataKey::Supply(id.clone()), amount);

    if previous == 0 && amount != 0 {
        add_token(env, id);
    } else if previous != 0 && amount == 0 {
        remove_token(env, id);
    }
}

// === Enumeration ===

pub fn get_owner_token_count(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerTokenCount(owner.clone()))
        .unwrap_or(0)
}

pub fn get_owner_token_at(env: &Env, owner: &Address, index: u32) -> Option<Id> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerTokenAt(owner.clone(), index))
}

pub fn get_token_count(env: &Env) -> u32 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TokenCount)
        .unwrap_or(0)
}

pub fn get_token_at(env: &Env, index: u32) -> Option<Id> {
    env.storage().persistent().get(&DataKey::TokenAt(index))
}

/// Append id to owner's indexed list - O(1) operation
fn add_token_to_owner(env: &Env, owner: &Address, id: &Id) {
    let count = get_owner_token_count(env, owner);

    let at_key = DataKey::OwnerTokenAt(owner.clone(), count);
    env.storage().persistent().set(&at_key, id);
    extend_persistent_ttl(env, &at_key);

    let index_key = DataKey::OwnerTokenIndex(owner.clone(), id.clone());
    env.storage().persistent().set(&index_key, &count);
    extend_persistent_ttl(env, &index_key);

    let count_key = DataKey::OwnerTokenCount(owner.clone());
    env.storage().persistent().set(&count_key, &(count + 1));
    extend_persistent_ttl(env, &count_key);
}

/// Remove id from owner's indexed list using swap-and-pop - O(1) operation
fn remove_token_from_owner(env: &Env, owner: &Address, id: &Id) {
    let count = get_owner_token_count(env, owner);
    if count == 0 {
        return;
    }

    let index_key = DataKey::OwnerTokenIndex(owner.clone(), id.clone());
    let index_to_remove: u32 = env.storage().persistent().get(&index_key).unwrap_or(0);
    let last_index = count - 1;

    // Move the last id into the freed slot
    if index_to_remove != last_index {
        if let Some(last_id) = get_owner_token_at(env, owner, last_index) {
            env.storage()
                .persistent()
                .set(&DataKey::OwnerTokenAt(owner.clone(), index_to_remove), &last_id);
            env.storage()
                .persistent()
                .set(&DataKey::OwnerTokenIndex(owner.clone(), last_id), &index_to_remove);
        }
    }

    env.storage()
        .persistent()
        .remove(&DataKey::OwnerTokenAt(owner.clone(), last_index));
    env.storage().persistent().remove(&index_key);

    let count_key = DataKey::OwnerTokenCount(owner.clone());
    if count > 1 {
        env.storage().persistent().set(&count_key, &(count - 1));
    } else {
        env.storage().persistent().remove(&count_key);
    }
}

fn add_token(env: &Env, id: &Id) {
    let count = get_token_count(env);

    let at_key = DataKey::TokenAt(count);
    env.storage().persistent().set(&at_key, id);
    extend_persistent_ttl(env, &at_key);

    let index_key = DataKey::TokenIndex(id.clone());
    env.storage().persistent().set(&index_key, &count);
    extend_persistent_ttl(env, &index_key);

    env.storage()
        .instance()
        .set(&DataKey::TokenCount, &(count + 1));
}

fn remove_token(env: &Env, id: &Id) {
    let count = get_token_count(env);
    if count == 0 {
        return;
    }

    let index_key = DataKey::TokenIndex(id.clone());
    let index_to_remove: u32 = env.storage().persistent().get(&index_key).unwrap_or(0);
    let last_index = count - 1;

    if index_to_remove != last_index {
        if let Some(last_id) = get_token_at(env, last_index) {
            env.storage()
                .persistent()
                .set(&DataKey::TokenAt(index_to_remove), &last_id);
            env.storage()
                .persistent()
                .set(&DataKey::TokenIndex(last_id), &index_to_remove);
        }
    }

    env.storage()
        .persistent()
        .remove(&DataKey::TokenAt(last_index));
    env.storage().persistent().remove(&index_key);

    env.storage()
        .instance()
        .set(&DataKey::TokenCount, &(count - 1));
}

// === Receiver registry ===

pub fn is_receiver(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Receiver(address.clone()))
        .unwrap_or(false)
}

pub fn set_receiver(env: &Env, address: &Address, registered: bool) {
    let key = DataKey::Receiver(address.clone());
    if registered {
        env.storage().persistent().set(&key, &true);
        extend_persistent_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
