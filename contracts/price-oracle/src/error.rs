use cosmwasm_std::StdError;
use thiserror::Error;

use common::AccessError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("Unknown token: {token}")]
    UnknownToken { token: String },

    #[error("Exchange rate manager not configured")]
    RateManagerNotSet,

    #[error("Exchange rate manager reports zero supply")]
    EmptySupply,

    #[error("Price arithmetic overflow")]
    Overflow,
}
