//! Admin operations handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use common::access::only_owner;

use crate::error::ContractError;
use crate::state::CONFIG;

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

/// Pause the bridge (stops deposit finalization).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}
