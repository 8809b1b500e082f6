//! Redemption handler, relayed from the destination bridge.

use cosmwasm_std::{to_json_binary, DepsMut, Event, MessageInfo, Response, WasmMsg};
use cw20::Cw20ExecuteMsg;

use common::access::only_counterpart;
use common::hash::{bytes32_to_hex, parse_deposit_hash};
use common::ledger::Ledger;
use common::relay::FinalizeLstWithdrawal;

use crate::error::ContractError;
use crate::ledger::DepositLedger;
use crate::state::CONFIG;

/// Release `amount` of the locked token to `to`.
///
/// The ledger is decremented before the transfer message is emitted; an
/// over-withdrawal fails the whole relay.
pub fn execute_finalize_lst_withdrawal(
    deps: DepsMut,
    info: MessageInfo,
    msg: FinalizeLstWithdrawal,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let counterpart = config
        .counterpart
        .as_deref()
        .ok_or(ContractError::CounterpartNotSet)?;
    only_counterpart(&deps.querier, &info.sender, &config.messenger, counterpart)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let deposit_hash = parse_deposit_hash(&msg.deposit_hash)?;
    let recipient = deps.api.addr_validate(&msg.to)?;
    let remaining = DepositLedger.withdraw(deps.storage, &deposit_hash, msg.amount)?;

    let event = Event::new("lst_withdrawal_finalized")
        .add_attribute("deposit_hash", bytes32_to_hex(&deposit_hash))
        .add_attribute("token", &msg.token)
        .add_attribute("from", &msg.from)
        .add_attribute("to", recipient.as_str())
        .add_attribute("amount", msg.amount)
        .add_attribute("extra_data", msg.extra_data.to_base64());

    let transfer = WasmMsg::Execute {
        contract_addr: msg.token,
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount: msg.amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_event(event)
        .add_attribute("action", "finalize_lst_withdrawal")
        .add_attribute("deposit_hash", bytes32_to_hex(&deposit_hash))
        .add_attribute("amount", msg.amount)
        .add_attribute("remaining", remaining))
}
