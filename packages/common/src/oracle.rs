//! Price oracle read interface and the external price sources it reads from.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Pricing policy assigned to a token by the oracle owner.
#[cw_serde]
#[derive(Copy, Default, Eq)]
pub enum TokenType {
    /// Not priced; lookups fail.
    #[default]
    Unclassified,
    /// Fixed 1e18 per lookup.
    OneToOne,
    /// Token is a staking pool exposing a share → pooled value conversion.
    PooledShares,
    /// Value derived from a manager's total value and total supply.
    ExchangeRate,
    /// Token is a vault exposing a redeem preview.
    Vault,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenType::Unclassified => "unclassified",
            TokenType::OneToOne => "one_to_one",
            TokenType::PooledShares => "pooled_shares",
            TokenType::ExchangeRate => "exchange_rate",
            TokenType::Vault => "vault",
        };
        f.write_str(name)
    }
}

/// The fixed read interface the bridge uses to value a lock.
#[cw_serde]
#[derive(QueryResponses)]
pub enum PriceQuery {
    #[returns(PriceResponse)]
    Price {
        token: String,
        share_amount: Uint128,
    },
}

#[cw_serde]
pub struct PriceResponse {
    pub value: Uint128,
}

// ============================================================================
// External price sources
// ============================================================================

/// Query exposed by `PooledShares` tokens.
#[cw_serde]
#[derive(QueryResponses)]
pub enum PooledSharesQuery {
    #[returns(ValueResponse)]
    PooledValueByShares { shares: Uint128 },
}

/// Query exposed by the `ExchangeRate` manager.
#[cw_serde]
#[derive(QueryResponses)]
pub enum ExchangeRateQuery {
    #[returns(ExchangeRateResponse)]
    ExchangeRate {},
}

/// Query exposed by `Vault` tokens.
#[cw_serde]
#[derive(QueryResponses)]
pub enum VaultQuery {
    #[returns(ValueResponse)]
    PreviewRedeem { shares: Uint128 },
}

#[cw_serde]
pub struct ValueResponse {
    pub value: Uint128,
}

#[cw_serde]
pub struct ExchangeRateResponse {
    /// Total base-currency value held by the protocol
    pub total_value: Uint128,
    /// Circulating share supply
    pub total_supply: Uint128,
}
