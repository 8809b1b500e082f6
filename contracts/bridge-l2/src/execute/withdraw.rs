//! Redemption handlers.

use cosmwasm_std::{coins, Binary, DepsMut, Event, MessageInfo, Response, Uint128};

use common::access::only_eoa;
use common::hash::{bytes32_to_hex, parse_deposit_hash};
use common::ledger::Ledger;
use common::pricing::{converted_amount, redeemable_value};
use common::relay::{send_to_counterpart, FinalizeLstWithdrawal, SourceBridgeMsg};

use super::native_payment;
use crate::error::ContractError;
use crate::mirror::DepositMirror;
use crate::state::CONFIG;

/// Redeem for the caller's own address on the source chain.
pub fn execute_withdraw_lst(
    deps: DepsMut,
    info: MessageInfo,
    deposit_hash: Binary,
    amount: Uint128,
    min_gas_limit: u32,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    only_eoa(&deps.querier, &info.sender)?;
    let to = info.sender.to_string();
    withdraw_lst(deps, info, deposit_hash, to, amount, min_gas_limit, extra_data)
}

pub fn execute_withdraw_lst_to(
    deps: DepsMut,
    info: MessageInfo,
    deposit_hash: Binary,
    to: String,
    amount: Uint128,
    min_gas_limit: u32,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    // Validated here so the mirror is never debited for a release the
    // source bridge would refuse.
    let to = deps
        .api
        .addr_validate(to.trim())
        .map_err(|e| ContractError::InvalidRecipient {
            reason: e.to_string(),
        })?;
    withdraw_lst(
        deps,
        info,
        deposit_hash,
        to.to_string(),
        amount,
        min_gas_limit,
        extra_data,
    )
}

/// Convert the payment at the mirror price, debit the mirror and relay the
/// release. The payment travels with the message.
fn withdraw_lst(
    deps: DepsMut,
    info: MessageInfo,
    deposit_hash: Binary,
    to: String,
    amount: Uint128,
    min_gas_limit: u32,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let counterpart = config
        .counterpart
        .ok_or(ContractError::CounterpartNotSet)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidFunds {
            reason: "withdraw amount must be greater than zero".to_string(),
        });
    }
    let paid = native_payment(&info.funds, &config.denom)?;
    if paid != amount {
        return Err(ContractError::InvalidFunds {
            reason: format!(
                "expected {}{}, received {}{}",
                amount, config.denom, paid, config.denom
            ),
        });
    }

    let hash = parse_deposit_hash(&deposit_hash)?;
    let entry = DepositMirror.get_deposit(deps.storage, &hash)?;
    if entry.holder != info.sender {
        return Err(ContractError::NotHolder {
            holder: entry.holder.to_string(),
        });
    }

    let redeemable = redeemable_value(entry.locked, entry.price)?;
    if amount > redeemable {
        return Err(ContractError::ExceedsRedeemable {
            requested: amount,
            redeemable,
        });
    }

    let converted = converted_amount(amount, entry.price)?;
    if converted.is_zero() {
        return Err(ContractError::ZeroConverted);
    }
    let remaining = DepositMirror.withdraw(deps.storage, &hash, converted)?;

    let event = Event::new("withdrawal_initiated")
        .add_attribute("deposit_hash", bytes32_to_hex(&hash))
        .add_attribute("token", &entry.token)
        .add_attribute("from", info.sender.as_str())
        .add_attribute("to", &to)
        .add_attribute("amount", amount)
        .add_attribute("converted", converted)
        .add_attribute("extra_data", extra_data.to_base64());

    let relay = send_to_counterpart(
        config.messenger.as_str(),
        &counterpart,
        &SourceBridgeMsg::FinalizeLstWithdrawal(FinalizeLstWithdrawal {
            deposit_hash,
            token: entry.token,
            from: info.sender.to_string(),
            to,
            amount: converted,
            extra_data,
        }),
        Uint128::zero(),
        min_gas_limit,
        coins(amount.u128(), &config.denom),
    )?;

    Ok(Response::new()
        .add_message(relay)
        .add_event(event)
        .add_attribute("action", "withdraw_lst")
        .add_attribute("deposit_hash", bytes32_to_hex(&hash))
        .add_attribute("amount", amount)
        .add_attribute("converted", converted)
        .add_attribute("remaining", remaining))
}
