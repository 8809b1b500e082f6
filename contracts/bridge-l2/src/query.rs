//! Query handlers for the destination-chain LST bridge.

use cosmwasm_std::{Binary, Deps, StdError, StdResult};

use common::hash::parse_deposit_hash;
use common::pricing::redeemable_value;

use crate::mirror::DepositMirror;
use crate::msg::{ConfigResponse, DepositResponse, RedeemableValueResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        messenger: config.messenger,
        counterpart: config.counterpart,
        denom: config.denom,
        paused: config.paused,
    })
}

pub fn query_deposit(deps: Deps, deposit_hash: Binary) -> StdResult<DepositResponse> {
    let hash = parse_deposit_hash(&deposit_hash)?;
    let entry = DepositMirror
        .get_deposit(deps.storage, &hash)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(DepositResponse {
        deposit_hash,
        sequence_marker: entry.sequence_marker,
        token: entry.token,
        holder: entry.holder,
        locked: entry.locked,
        price: entry.price,
    })
}

pub fn query_redeemable_value(
    deps: Deps,
    deposit_hash: Binary,
) -> StdResult<RedeemableValueResponse> {
    let hash = parse_deposit_hash(&deposit_hash)?;
    let entry = DepositMirror
        .get_deposit(deps.storage, &hash)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let value = redeemable_value(entry.locked, entry.price)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(RedeemableValueResponse { value })
}
