use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use common::{AccessError, LedgerError, PricingError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    Pricing(#[from] PricingError),

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Counterpart bridge not configured")]
    CounterpartNotSet,

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Unauthorized: only the deposit holder {holder} can redeem")]
    NotHolder { holder: String },

    #[error("Exceeds redeemable value: requested {requested}, redeemable {redeemable}")]
    ExceedsRedeemable {
        requested: Uint128,
        redeemable: Uint128,
    },

    #[error("Payment too small: converts to zero tokens")]
    ZeroConverted,
}
