//! Access guards.
//!
//! Each guard is a plain function returning `Ok(())` or an `AccessError`; the
//! handlers call the ones they need at the top, before touching state.

use cosmwasm_std::{Addr, QuerierWrapper};
use thiserror::Error;

use crate::relay::{MessengerQueryMsg, XDomainMessageSenderResponse};

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("Unauthorized: only owner can perform this action")]
    NotOwner,

    #[error("Unauthorized: caller is not the messenger")]
    NotMessenger,

    #[error("Unauthorized: cross-domain sender {sender} is not the counterpart bridge")]
    NotCounterpart { sender: String },

    #[error("Unauthorized: cross-domain sender unavailable: {reason}")]
    CounterpartUnknown { reason: String },

    #[error("Unauthorized: account {account} is a contract, not an externally-owned account")]
    NotExternallyOwned { account: String },
}

/// Caller must be the configured owner.
pub fn only_owner(sender: &Addr, owner: &Addr) -> Result<(), AccessError> {
    if sender != owner {
        return Err(AccessError::NotOwner);
    }
    Ok(())
}

/// Caller must be the messenger, relaying a message sent by `counterpart`.
pub fn only_counterpart(
    querier: &QuerierWrapper,
    sender: &Addr,
    messenger: &Addr,
    counterpart: &str,
) -> Result<(), AccessError> {
    if sender != messenger {
        return Err(AccessError::NotMessenger);
    }

    let response: XDomainMessageSenderResponse = querier
        .query_wasm_smart(messenger, &MessengerQueryMsg::XDomainMessageSender {})
        .map_err(|e| AccessError::CounterpartUnknown {
            reason: e.to_string(),
        })?;

    if response.sender != counterpart {
        return Err(AccessError::NotCounterpart {
            sender: response.sender,
        });
    }
    Ok(())
}

/// `account` must not be a contract.
pub fn only_eoa(querier: &QuerierWrapper, account: &Addr) -> Result<(), AccessError> {
    if querier.query_wasm_contract_info(account).is_ok() {
        return Err(AccessError::NotExternallyOwned {
            account: account.to_string(),
        });
    }
    Ok(())
}
