//! Query handlers for the source-chain LST bridge.

use cosmwasm_std::{Binary, Deps, StdResult, Uint128};

use common::hash::{compute_deposit_hash, parse_deposit_hash};
use common::ledger::Ledger;

use crate::ledger::DepositLedger;
use crate::msg::{
    ComputeHashResponse, ConfigResponse, DepositHashEntry, DepositHashesResponse,
    DepositsCountResponse, IsWhitelistedResponse, LockedResponse,
};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        messenger: config.messenger,
        oracle: config.oracle,
        counterpart: config.counterpart,
        paused: config.paused,
    })
}

pub fn query_locked(deps: Deps, deposit_hash: Binary) -> StdResult<LockedResponse> {
    let hash = parse_deposit_hash(&deposit_hash)?;
    let locked = DepositLedger.locked(deps.storage, &hash)?;
    Ok(LockedResponse {
        deposit_hash,
        locked,
    })
}

pub fn query_deposits_count(
    deps: Deps,
    token: String,
    holder: String,
) -> StdResult<DepositsCountResponse> {
    let count = DepositLedger.deposits_count(deps.storage, &token, &holder)?;
    Ok(DepositsCountResponse { count })
}

pub fn query_deposit_hashes(
    deps: Deps,
    token: String,
    holder: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DepositHashesResponse> {
    let deposits = DepositLedger
        .deposit_hashes(deps.storage, &token, &holder, start_after, limit)?
        .into_iter()
        .map(|(index, hash)| DepositHashEntry {
            index,
            deposit_hash: Binary::from(hash.to_vec()),
        })
        .collect();
    Ok(DepositHashesResponse { deposits })
}

pub fn query_is_whitelisted(deps: Deps, token: String) -> StdResult<IsWhitelistedResponse> {
    let whitelisted = DepositLedger.is_whitelisted(deps.storage, &token)?;
    Ok(IsWhitelistedResponse { whitelisted })
}

pub fn query_compute_deposit_hash(
    height: u64,
    token: String,
    from: String,
    to: String,
    amount: Uint128,
    value: Uint128,
) -> ComputeHashResponse {
    let hash = compute_deposit_hash(height, &token, &from, &to, amount, value);
    ComputeHashResponse {
        deposit_hash: Binary::from(hash.to_vec()),
    }
}
