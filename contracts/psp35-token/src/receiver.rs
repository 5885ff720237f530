use crate::storage;
use psp35_types::{IdAmounts, Psp35Error, Psp35ReceiverClient};
use soroban_sdk::{Address, Bytes, Env};

/// Run the destination's `before_received` hook if it registered one.
///
/// Unregistered destinations accept without any call. For registered ones,
/// an error, a trap (including an attempt to re-enter this contract) or an
/// unreadable return value all reject the transfer.
pub fn check_receiver(
    env: &Env,
    operator: &Address,
    from: &Address,
    to: &Address,
    ids_amounts: &IdAmounts,
    data: &Bytes,
) -> Result<(), Psp35Error> {
    if !storage::is_receiver(env, to) {
        return Ok(());
    }

    let client = Psp35ReceiverClient::new(env, to);
    match client.try_before_received(operator, from, ids_amounts, data) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Psp35Error::TransferRejected),
    }
}
