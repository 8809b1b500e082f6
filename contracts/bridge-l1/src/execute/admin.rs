//! Admin operations handlers.
//!
//! - Token whitelist/blacklist
//! - Counterpart configuration
//! - Pause/unpause

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use common::access::only_owner;

use crate::error::ContractError;
use crate::ledger::DepositLedger;
use crate::state::CONFIG;

// ============================================================================
// Whitelist
// ============================================================================

pub fn execute_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    set_listing(deps, info, token, true)
}

pub fn execute_blacklist(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    set_listing(deps, info, token, false)
}

fn set_listing(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    whitelisted: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    DepositLedger.set_whitelisted(deps.storage, &token, whitelisted)?;

    let (event, action) = if whitelisted {
        ("token_whitelisted", "whitelist")
    } else {
        ("token_blacklisted", "blacklist")
    };

    Ok(Response::new()
        .add_event(Event::new(event).add_attribute("token", &token))
        .add_attribute("action", action)
        .add_attribute("token", token))
}

// ============================================================================
// Counterpart
// ============================================================================

pub fn execute_set_counterpart(
    deps: DepsMut,
    info: MessageInfo,
    counterpart: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    config.counterpart = Some(counterpart.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_counterpart")
        .add_attribute("counterpart", counterpart))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the bridge (stops locks and releases).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", if paused { "pause" } else { "unpause" }))
}
