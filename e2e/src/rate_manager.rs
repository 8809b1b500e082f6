//! Adjustable exchange-rate source for the oracle's `ExchangeRate` policy.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Item;

use common::oracle::{ExchangeRateQuery, ExchangeRateResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub total_value: Uint128,
    pub total_supply: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    SetRate {
        total_value: Uint128,
        total_supply: Uint128,
    },
}

const TOTALS: Item<(Uint128, Uint128)> = Item::new("totals");

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    TOTALS.save(deps.storage, &(msg.total_value, msg.total_supply))?;
    Ok(Response::new())
}

fn execute(deps: DepsMut, _env: Env, _info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetRate {
            total_value,
            total_supply,
        } => {
            TOTALS.save(deps.storage, &(total_value, total_supply))?;
            Ok(Response::new().add_attribute("action", "set_rate"))
        }
    }
}

fn query(deps: Deps, _env: Env, msg: ExchangeRateQuery) -> StdResult<Binary> {
    match msg {
        ExchangeRateQuery::ExchangeRate {} => {
            let (total_value, total_supply) = TOTALS.load(deps.storage)?;
            to_json_binary(&ExchangeRateResponse {
                total_value,
                total_supply,
            })
        }
    }
}

pub fn contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
