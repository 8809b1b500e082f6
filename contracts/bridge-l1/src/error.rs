use cosmwasm_std::StdError;
use thiserror::Error;

use common::{AccessError, LedgerError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Counterpart bridge not configured")]
    CounterpartNotSet,

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },
}
