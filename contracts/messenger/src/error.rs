use cosmwasm_std::StdError;
use thiserror::Error;

use common::AccessError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("Counterpart messenger not configured")]
    CounterpartNotSet,

    #[error("Relay out of order: expected nonce {expected}, got {got}")]
    OutOfOrder { expected: u64, got: u64 },

    #[error("Message {nonce} has no failed delivery to replay")]
    NotFailed { nonce: u64 },

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },
}
