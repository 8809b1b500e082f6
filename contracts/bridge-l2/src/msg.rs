use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Decimal, Uint128};

use common::relay::FinalizeLstDeposit;

// ============================================================================
// Instantiate / Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub messenger: String,
    /// Source bridge, if already deployed
    pub counterpart: Option<String>,
    pub denom: String,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Relayed from the source bridge, with the lock's value attached
    FinalizeLstDeposit(FinalizeLstDeposit),

    /// Redeem against a deposit, releasing tokens to the caller on the
    /// source chain. Attach exactly `amount` of the native denom.
    /// The caller must not be a contract.
    WithdrawLst {
        deposit_hash: Binary,
        amount: Uint128,
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Redeem against a deposit, releasing tokens to `to` on the source chain
    WithdrawLstTo {
        deposit_hash: Binary,
        to: String,
        amount: Uint128,
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Owner: set the source bridge address
    SetCounterpart { counterpart: String },

    Pause {},

    Unpause {},
}

// ============================================================================
// Query
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(DepositResponse)]
    Deposit { deposit_hash: Binary },

    /// Native value still redeemable against a deposit
    #[returns(RedeemableValueResponse)]
    RedeemableValue { deposit_hash: Binary },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub messenger: Addr,
    pub counterpart: Option<String>,
    pub denom: String,
    pub paused: bool,
}

#[cw_serde]
pub struct DepositResponse {
    pub deposit_hash: Binary,
    pub sequence_marker: u64,
    pub token: String,
    pub holder: Addr,
    pub locked: Uint128,
    pub price: Decimal,
}

#[cw_serde]
pub struct RedeemableValueResponse {
    pub value: Uint128,
}
