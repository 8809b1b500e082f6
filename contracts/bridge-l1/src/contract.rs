//! LST Bridge (source chain) - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_blacklist, execute_finalize_lst_withdrawal, execute_pause, execute_receive,
    execute_set_counterpart, execute_unpause, execute_whitelist,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_deposit_hash, query_config, query_deposit_hashes, query_deposits_count,
    query_is_whitelisted, query_locked,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        oracle: deps.api.addr_validate(&msg.oracle)?,
        counterpart: msg.counterpart,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("messenger", config.messenger)
        .add_attribute("oracle", config.oracle))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::FinalizeLstWithdrawal(msg) => {
            execute_finalize_lst_withdrawal(deps, info, msg)
        }
        ExecuteMsg::Whitelist { token } => execute_whitelist(deps, info, token),
        ExecuteMsg::Blacklist { token } => execute_blacklist(deps, info, token),
        ExecuteMsg::SetCounterpart { counterpart } => {
            execute_set_counterpart(deps, info, counterpart)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Locked { deposit_hash } => to_json_binary(&query_locked(deps, deposit_hash)?),
        QueryMsg::DepositsCount { token, holder } => {
            to_json_binary(&query_deposits_count(deps, token, holder)?)
        }
        QueryMsg::DepositHashes {
            token,
            holder,
            start_after,
            limit,
        } => to_json_binary(&query_deposit_hashes(
            deps,
            token,
            holder,
            start_after,
            limit,
        )?),
        QueryMsg::IsWhitelisted { token } => to_json_binary(&query_is_whitelisted(deps, token)?),
        QueryMsg::ComputeDepositHash {
            height,
            token,
            from,
            to,
            amount,
            value,
        } => to_json_binary(&query_compute_deposit_hash(
            height, token, from, to, amount, value,
        )),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
