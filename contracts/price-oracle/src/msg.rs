use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use common::oracle::{PriceResponse, TokenType};

#[cw_serde]
pub struct TokenTypeEntry {
    /// LST contract address
    pub token: String,
    pub token_type: TokenType,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Manager read by the `ExchangeRate` policy
    pub rate_manager: Option<String>,
    /// Initial classifications
    pub token_types: Vec<TokenTypeEntry>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: classify tokens. Later entries overwrite earlier ones;
    /// `unclassified` removes a token from pricing.
    SetTokenTypes { entries: Vec<TokenTypeEntry> },
    /// Owner: set or clear the exchange rate manager
    SetRateManager { manager: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Value of `share_amount` shares of `token` in base currency.
    /// Same wire shape as `common::oracle::PriceQuery::Price`.
    #[returns(PriceResponse)]
    Price {
        token: String,
        share_amount: Uint128,
    },
    #[returns(TokenTypeResponse)]
    TokenType { token: String },
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct TokenTypeResponse {
    pub token: String,
    pub token_type: TokenType,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub rate_manager: Option<Addr>,
}
