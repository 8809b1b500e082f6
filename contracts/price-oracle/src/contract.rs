//! LST Price Oracle - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CheckedMultiplyRatioError, Deps, DepsMut, Env,
    MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::access::only_owner;
use common::oracle::{
    ExchangeRateQuery, ExchangeRateResponse, PooledSharesQuery, PriceResponse, TokenType,
    ValueResponse, VaultQuery,
};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, TokenTypeEntry,
    TokenTypeResponse,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, ONE_TO_ONE_PRICE, TOKEN_TYPES,
};

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

    let owner = deps.api.addr_validate(&msg.owner)?;
    let rate_manager = msg
        .rate_manager
        .map(|m| deps.api.addr_validate(&m))
        .transpose()?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            rate_manager,
        },
    )?;

    let count = store_token_types(deps, &msg.token_types)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("token_count", count.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetTokenTypes { entries } => execute_set_token_types(deps, info, entries),
        ExecuteMsg::SetRateManager { manager } => execute_set_rate_manager(deps, info, manager),
    }
}

/// Classify tokens. No duplicate detection: the last entry for a token wins.
fn execute_set_token_types(
    deps: DepsMut,
    info: MessageInfo,
    entries: Vec<TokenTypeEntry>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    let attributes: Vec<(String, String)> = entries
        .iter()
        .map(|e| (e.token.clone(), e.token_type.to_string()))
        .collect();
    let count = store_token_types(deps, &entries)?;

    Ok(Response::new()
        .add_attribute("action", "set_token_types")
        .add_attribute("count", count.to_string())
        .add_attributes(attributes))
}

fn execute_set_rate_manager(
    deps: DepsMut,
    info: MessageInfo,
    manager: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    config.rate_manager = manager.map(|m| deps.api.addr_validate(&m)).transpose()?;
    CONFIG.save(deps.storage, &config)?;

    let manager_attr = config
        .rate_manager
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "none".to_string());

    Ok(Response::new()
        .add_attribute("action", "set_rate_manager")
        .add_attribute("rate_manager", manager_attr))
}

fn store_token_types(deps: DepsMut, entries: &[TokenTypeEntry]) -> Result<usize, ContractError> {
    for entry in entries {
        let token = deps.api.addr_validate(&entry.token)?;
        TOKEN_TYPES.save(deps.storage, token.as_str(), &entry.token_type)?;
    }
    Ok(entries.len())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Price {
            token,
            share_amount,
        } => Ok(to_json_binary(&PriceResponse {
            value: get_price(deps, &token, share_amount)?,
        })?),
        QueryMsg::TokenType { token } => Ok(to_json_binary(&query_token_type(deps, token)?)?),
        QueryMsg::Config {} => Ok(to_json_binary(&query_config(deps)?)?),
    }
}

/// Value `share_amount` of `token` by its classification.
pub fn get_price(deps: Deps, token: &str, share_amount: Uint128) -> Result<Uint128, ContractError> {
    let token_type = TOKEN_TYPES.may_load(deps.storage, token)?.unwrap_or_default();

    match token_type {
        TokenType::Unclassified => Err(ContractError::UnknownToken {
            token: token.to_string(),
        }),
        TokenType::OneToOne => Ok(Uint128::new(ONE_TO_ONE_PRICE)),
        TokenType::PooledShares => {
            let res: ValueResponse = deps.querier.query_wasm_smart(
                token,
                &PooledSharesQuery::PooledValueByShares {
                    shares: share_amount,
                },
            )?;
            Ok(res.value)
        }
        TokenType::ExchangeRate => {
            let manager = CONFIG
                .load(deps.storage)?
                .rate_manager
                .ok_or(ContractError::RateManagerNotSet)?;
            let rate: ExchangeRateResponse = deps
                .querier
                .query_wasm_smart(manager, &ExchangeRateQuery::ExchangeRate {})?;
            redeem_amount(share_amount, &rate)
        }
        TokenType::Vault => {
            let res: ValueResponse = deps.querier.query_wasm_smart(
                token,
                &VaultQuery::PreviewRedeem {
                    shares: share_amount,
                },
            )?;
            Ok(res.value)
        }
    }
}

/// `shares * total_value / total_supply`, truncating.
fn redeem_amount(shares: Uint128, rate: &ExchangeRateResponse) -> Result<Uint128, ContractError> {
    shares
        .checked_multiply_ratio(rate.total_value, rate.total_supply)
        .map_err(|e| match e {
            CheckedMultiplyRatioError::DivideByZero => ContractError::EmptySupply,
            CheckedMultiplyRatioError::Overflow => ContractError::Overflow,
        })
}

fn query_token_type(deps: Deps, token: String) -> StdResult<TokenTypeResponse> {
    let token_type = TOKEN_TYPES
        .may_load(deps.storage, &token)?
        .unwrap_or_default();
    Ok(TokenTypeResponse { token, token_type })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        rate_manager: config.rate_manager,
    })
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
