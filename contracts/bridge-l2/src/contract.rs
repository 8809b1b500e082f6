//! LST Bridge (destination chain) - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_finalize_lst_deposit, execute_pause, execute_set_counterpart, execute_unpause,
    execute_withdraw_lst, execute_withdraw_lst_to,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_deposit, query_redeemable_value};
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
        counterpart: msg.counterpart,
        denom: msg.denom,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("messenger", config.messenger)
        .add_attribute("denom", config.denom))
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
        ExecuteMsg::FinalizeLstDeposit(msg) => execute_finalize_lst_deposit(deps, env, info, msg),
        ExecuteMsg::WithdrawLst {
            deposit_hash,
            amount,
            min_gas_limit,
            extra_data,
        } => execute_withdraw_lst(deps, info, deposit_hash, amount, min_gas_limit, extra_data),
        ExecuteMsg::WithdrawLstTo {
            deposit_hash,
            to,
            amount,
            min_gas_limit,
            extra_data,
        } => execute_withdraw_lst_to(
            deps,
            info,
            deposit_hash,
            to,
            amount,
            min_gas_limit,
            extra_data,
        ),
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
        QueryMsg::Deposit { deposit_hash } => to_json_binary(&query_deposit(deps, deposit_hash)?),
        QueryMsg::RedeemableValue { deposit_hash } => {
            to_json_binary(&query_redeemable_value(deps, deposit_hash)?)
        }
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
