// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification specifications for the PSP35 multi-token ledger.
//
// STRUCTURE:
//
// - model.rs          : Skolem variables, state snapshots
// - ledger_specs.rs   : Mint, burn and transfer accounting
// - allowance_specs.rs: Approve and allowance consumption
//
// PATTERNS USED:
//
// 1. State snapshots - Before/after comparisons around one contract call
// 2. Skolem variables - Prove properties for an arbitrary token id
// 3. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p psp35-token
// - Certora build: cargo build --features certora -p psp35-token
// - Verification: certoraSorobanProver psp35_token.conf
//
// ============================================================================

// Model initialization
#[cfg(feature = "certora")]
pub mod model;

// Spec modules
pub mod allowance_specs;
pub mod ledger_specs;
