//! Lock handler (CW20 receive hook).

use cosmwasm_std::{from_json, Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use common::access::only_eoa;
use common::hash::bytes32_to_hex;
use common::ledger::Ledger;
use common::oracle::{PriceQuery, PriceResponse};
use common::relay::{send_to_counterpart, DestinationBridgeMsg, FinalizeLstDeposit};

use crate::error::ContractError;
use crate::ledger::{DepositLedger, LstDeposit};
use crate::msg::ReceiveMsg;
use crate::state::CONFIG;

/// Entry for tokens arriving through CW20 `Send`.
///
/// `info.sender` is the token contract; the depositor is `cw20_msg.sender`.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let from = deps.api.addr_validate(&cw20_msg.sender)?;
    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::DepositLst {
            min_gas_limit,
            extra_data,
        } => {
            only_eoa(&deps.querier, &from)?;
            let to = from.to_string();
            deposit_lst(
                deps,
                env,
                info.sender.to_string(),
                from.to_string(),
                to,
                cw20_msg.amount,
                min_gas_limit,
                extra_data,
            )
        }
        ReceiveMsg::DepositLstTo {
            to,
            min_gas_limit,
            extra_data,
        } => {
            // Both domains share an address scheme; a recipient the
            // destination would reject is refused before anything locks.
            let to = deps
                .api
                .addr_validate(to.trim())
                .map_err(|e| ContractError::InvalidRecipient {
                    reason: e.to_string(),
                })?;
            deposit_lst(
                deps,
                env,
                info.sender.to_string(),
                from.to_string(),
                to.to_string(),
                cw20_msg.amount,
                min_gas_limit,
                extra_data,
            )
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn deposit_lst(
    deps: DepsMut,
    env: Env,
    token: String,
    from: String,
    to: String,
    amount: Uint128,
    min_gas_limit: u32,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    let counterpart = config
        .counterpart
        .ok_or(ContractError::CounterpartNotSet)?;

    let PriceResponse { value } = deps.querier.query_wasm_smart(
        &config.oracle,
        &PriceQuery::Price {
            token: token.clone(),
            share_amount: amount,
        },
    )?;

    let deposit_hash = DepositLedger.deposit(
        deps.storage,
        &env.block,
        LstDeposit {
            token: token.clone(),
            from: from.clone(),
            to: to.clone(),
            amount,
            value,
        },
    )?;

    let event = Event::new("lst_deposit_initiated")
        .add_attribute("deposit_hash", bytes32_to_hex(&deposit_hash))
        .add_attribute("token", &token)
        .add_attribute("from", &from)
        .add_attribute("to", &to)
        .add_attribute("amount", amount)
        .add_attribute("value", value)
        .add_attribute("extra_data", extra_data.to_base64());

    let relay = send_to_counterpart(
        config.messenger.as_str(),
        &counterpart,
        &DestinationBridgeMsg::FinalizeLstDeposit(FinalizeLstDeposit {
            deposit_hash: Binary::from(deposit_hash.to_vec()),
            token,
            from,
            to,
            amount,
            extra_data,
        }),
        value,
        min_gas_limit,
        vec![],
    )?;

    Ok(Response::new()
        .add_message(relay)
        .add_event(event)
        .add_attribute("action", "deposit_lst")
        .add_attribute("deposit_hash", bytes32_to_hex(&deposit_hash))
        .add_attribute("amount", amount)
        .add_attribute("value", value))
}
