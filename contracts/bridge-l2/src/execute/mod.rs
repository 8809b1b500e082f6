//! Execute handlers for the destination-chain LST bridge.
//!
//! - `finalize` - Relayed deposits that credit the recipient
//! - `withdraw` - Redemptions relayed back to the source bridge
//! - `admin` - Counterpart and pause management

use cosmwasm_std::{Coin, Uint128};

use crate::error::ContractError;

mod admin;
mod finalize;
mod withdraw;

pub use admin::*;
pub use finalize::*;
pub use withdraw::*;

/// Amount of `denom` attached to the call. Any other denom is rejected.
fn native_payment(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    match funds {
        [] => Ok(Uint128::zero()),
        [coin] if coin.denom == denom => Ok(coin.amount),
        _ => Err(ContractError::InvalidFunds {
            reason: format!("only {} accepted", denom),
        }),
    }
}
