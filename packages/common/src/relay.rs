//! Cross-domain message types.
//!
//! The transport itself is an external collaborator. The bridges only need to
//! hand it a message for the counterpart and ask it who sent the message
//! currently being relayed.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Binary, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Execute interface of the cross-domain messenger.
#[cw_serde]
pub enum MessengerExecuteMsg {
    /// Queue `message` for execution on `target` in the other domain.
    ///
    /// Funds attached to this call are taken out of circulation on the sending
    /// domain; `value` units of the receiving domain's native denom are
    /// delivered to `target` along with the message.
    SendMessage {
        target: String,
        message: Binary,
        value: Uint128,
        min_gas_limit: u32,
    },
}

/// Query interface of the cross-domain messenger.
#[cw_serde]
#[derive(QueryResponses)]
pub enum MessengerQueryMsg {
    /// Sender on the other domain of the message currently being relayed.
    /// Fails when no relay is in progress.
    #[returns(XDomainMessageSenderResponse)]
    XDomainMessageSender {},
}

#[cw_serde]
pub struct XDomainMessageSenderResponse {
    pub sender: String,
}

/// Payload relayed L1 → L2 after a lock is recorded.
#[cw_serde]
pub struct FinalizeLstDeposit {
    /// 32-byte deposit identifier computed on L1
    pub deposit_hash: Binary,
    /// LST contract address on L1
    pub token: String,
    /// Depositor on L1
    pub from: String,
    /// Recipient and future holder on L2
    pub to: String,
    /// Locked LST amount
    pub amount: Uint128,
    pub extra_data: Binary,
}

/// Payload relayed L2 → L1 after a redemption is initiated.
#[cw_serde]
pub struct FinalizeLstWithdrawal {
    pub deposit_hash: Binary,
    /// LST contract address on L1, as recorded in the mirror
    pub token: String,
    /// Holder who paid on L2
    pub from: String,
    /// Receiver of the released LST on L1
    pub to: String,
    /// LST units to release (already converted at the mirror price)
    pub amount: Uint128,
    pub extra_data: Binary,
}

/// Execute variants the L2 bridge accepts from its counterpart.
#[cw_serde]
pub enum DestinationBridgeMsg {
    FinalizeLstDeposit(FinalizeLstDeposit),
}

/// Execute variants the L1 bridge accepts from its counterpart.
#[cw_serde]
pub enum SourceBridgeMsg {
    FinalizeLstWithdrawal(FinalizeLstWithdrawal),
}

/// Build the messenger call that relays `message` to `counterpart`.
pub fn send_to_counterpart<T: serde::Serialize>(
    messenger: &str,
    counterpart: &str,
    message: &T,
    value: Uint128,
    min_gas_limit: u32,
    funds: Vec<Coin>,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: messenger.to_string(),
        msg: to_json_binary(&MessengerExecuteMsg::SendMessage {
            target: counterpart.to_string(),
            message: to_json_binary(message)?,
            value,
            min_gas_limit,
        })?,
        funds,
    }))
}
