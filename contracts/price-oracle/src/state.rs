use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::oracle::TokenType;
use common::PRICE_PRECISION;

pub const CONTRACT_NAME: &str = "crates.io:lst-price-oracle";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returned for every `OneToOne` lookup, whatever the share amount.
pub const ONE_TO_ONE_PRICE: u128 = PRICE_PRECISION;

#[cw_serde]
pub struct Config {
    /// Owner allowed to classify tokens
    pub owner: Addr,
    /// Manager read by the `ExchangeRate` policy
    pub rate_manager: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// token address => pricing policy
pub const TOKEN_TYPES: Map<&str, TokenType> = Map::new("token_types");
