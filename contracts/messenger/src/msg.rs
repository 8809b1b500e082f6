use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use common::relay::XDomainMessageSenderResponse;

use crate::state::SentMessage;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Native denom used to deliver message value on this domain
    pub denom: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Queue a message for the other domain.
    /// Same wire shape as `common::relay::MessengerExecuteMsg::SendMessage`.
    SendMessage {
        target: String,
        message: Binary,
        value: Uint128,
        min_gas_limit: u32,
    },
    /// Relay the counterpart's message `nonce`. Anyone may relay. Nonces are
    /// processed strictly in order; a delivery that fails is recorded and the
    /// queue moves on.
    RelayMessage { nonce: u64 },
    /// Retry a message whose delivery failed. Reverts if it fails again.
    ReplayMessage { nonce: u64 },
    /// Owner: pair with the messenger on the other domain
    SetCounterpart { counterpart: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(XDomainMessageSenderResponse)]
    XDomainMessageSender {},
    /// An outbox entry
    #[returns(SentMessage)]
    Message { nonce: u64 },
    #[returns(StatusResponse)]
    Status {},
    /// Whether a relayed counterpart message is waiting for replay
    #[returns(FailedMessageResponse)]
    FailedMessage { nonce: u64 },
}

#[cw_serde]
pub struct StatusResponse {
    pub denom: String,
    pub counterpart: Option<Addr>,
    pub next_send_nonce: u64,
    pub next_relay_nonce: u64,
}

#[cw_serde]
pub struct FailedMessageResponse {
    pub nonce: u64,
    /// Error of the last failed delivery; `None` if not failed
    pub reason: Option<String>,
}
