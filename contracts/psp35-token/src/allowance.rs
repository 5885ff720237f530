// Pure allowance resolution, kept free of storage so it can be unit tested
// and used from formal verification rules.

use psp35_types::{BlanketPolicy, Psp35Error, UNLIMITED_ALLOWANCE};

/// Which allowance entry pays for a `transfer_from`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllowanceSource {
    /// The operator is the owner; nothing is consumed
    Owner,
    /// The per-id allowance
    Specific,
    /// The blanket (`None` id) allowance
    Blanket,
}

/// Result of resolving an allowance spend
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AllowanceSpend {
    pub source: AllowanceSource,
    /// Value to store back into the consumed entry
    pub remaining: u128,
}

impl AllowanceSpend {
    fn owner() -> Self {
        Self {
            source: AllowanceSource::Owner,
            remaining: 0,
        }
    }
}

/// Value stored for an `approve` under the given policy
pub fn approved_value(policy: BlanketPolicy, blanket: bool, amount: u128) -> u128 {
    match (blanket, policy) {
        (true, BlanketPolicy::Unlimited) if amount > 0 => UNLIMITED_ALLOWANCE,
        _ => amount,
    }
}

/// Allowance reported for a concrete id: the larger of both entries,
/// since either one alone may pay for a transfer
pub fn effective_allowance(specific: u128, blanket: u128) -> u128 {
    specific.max(blanket)
}

/// Decrement an allowance; the unlimited value is never consumed
pub fn consume(allowance: u128, amount: u128) -> u128 {
    if allowance == UNLIMITED_ALLOWANCE {
        allowance
    } else {
        allowance - amount
    }
}

/// Decide which allowance covers `amount` and what it is left at.
///
/// Under `Unlimited` a present blanket allowance wins and is never consumed.
/// Under `Metered` the per-id allowance is tried first, then the blanket one.
pub fn plan_spend(
    policy: BlanketPolicy,
    is_owner: bool,
    specific: u128,
    blanket: u128,
    amount: u128,
) -> Result<AllowanceSpend, Psp35Error> {
    if is_owner {
        return Ok(AllowanceSpend::owner());
    }

    let use_specific = |specific: u128| AllowanceSpend {
        source: AllowanceSource::Specific,
        remaining: consume(specific, amount),
    };
    let use_blanket = |blanket: u128| AllowanceSpend {
        source: AllowanceSource::Blanket,
        remaining: consume(blanket, amount),
    };

    match policy {
        BlanketPolicy::Unlimited => {
            if blanket > 0 && blanket >= amount {
                Ok(use_blanket(blanket))
            } else if specific >= amount {
                Ok(use_specific(specific))
            } else {
                Err(Psp35Error::InsufficientAllowance)
            }
        }
        BlanketPolicy::Metered => {
            if specific >= amount {
                Ok(use_specific(specific))
            } else if blanket >= amount {
                Ok(use_blanket(blanket))
            } else {
                Err(Psp35Error::InsufficientAllowance)
            }
        }
    }
}
