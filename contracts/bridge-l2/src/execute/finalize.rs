//! Deposit finalization, relayed from the source bridge.

use cosmwasm_std::{coins, BankMsg, DepsMut, Env, Event, MessageInfo, Response};

use common::access::only_counterpart;
use common::hash::{bytes32_to_hex, parse_deposit_hash};
use common::ledger::Ledger;
use common::relay::FinalizeLstDeposit;

use super::native_payment;
use crate::error::ContractError;
use crate::mirror::{DepositMirror, RelayedDeposit};
use crate::state::CONFIG;

/// Mirror the lock at the price implied by the attached value and credit that
/// value to the recipient.
pub fn execute_finalize_lst_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: FinalizeLstDeposit,
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

    let recipient = deps.api.addr_validate(&msg.to)?;
    if recipient == env.contract.address {
        return Err(ContractError::InvalidRecipient {
            reason: "cannot credit the bridge itself".to_string(),
        });
    }
    if recipient == config.messenger {
        return Err(ContractError::InvalidRecipient {
            reason: "cannot credit the messenger".to_string(),
        });
    }

    let value = native_payment(&info.funds, &config.denom)?;
    if value.is_zero() {
        return Err(ContractError::InvalidFunds {
            reason: "deposit value must be greater than zero".to_string(),
        });
    }

    let deposit_hash = DepositMirror.deposit(
        deps.storage,
        &env.block,
        RelayedDeposit {
            deposit_hash: parse_deposit_hash(&msg.deposit_hash)?,
            token: msg.token.clone(),
            holder: recipient.clone(),
            amount: msg.amount,
            value,
        },
    )?;

    let event = Event::new("deposit_finalized")
        .add_attribute("deposit_hash", bytes32_to_hex(&deposit_hash))
        .add_attribute("token", &msg.token)
        .add_attribute("from", &msg.from)
        .add_attribute("to", recipient.as_str())
        .add_attribute("amount", msg.amount)
        .add_attribute("value", value)
        .add_attribute("extra_data", msg.extra_data.to_base64());

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(value.u128(), &config.denom),
        })
        .add_event(event)
        .add_attribute("action", "finalize_lst_deposit")
        .add_attribute("deposit_hash", bytes32_to_hex(&deposit_hash))
        .add_attribute("recipient", recipient)
        .add_attribute("value", value))
}
