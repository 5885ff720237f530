use crate::{Id, ReceiverError};
use soroban_sdk::{contractclient, Address, Bytes, Env, Vec};

/// Interface a contract exposes to vet incoming transfers.
///
/// The ledger only calls contracts that registered themselves with
/// `register_receiver`; everything else accepts transfers unconditionally.
#[contractclient(name = "Psp35ReceiverClient")]
pub trait Psp35Receiver {
    /// Called before a transfer into the receiver commits.
    /// Any error or trap rejects the transfer and rolls it back.
    fn before_received(
        env: Env,
        operator: Address,
        from: Address,
        ids_amounts: Vec<(Id, u128)>,
        data: Bytes,
    ) -> Result<(), ReceiverError>;
}
