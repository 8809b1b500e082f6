use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;

use common::relay::FinalizeLstWithdrawal;

// ============================================================================
// Instantiate / Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub messenger: String,
    pub oracle: String,
    /// Destination bridge, if already deployed
    pub counterpart: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// CW20 `Send` hook carrying a [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),

    /// Relayed from the destination bridge: release redeemed tokens
    FinalizeLstWithdrawal(FinalizeLstWithdrawal),

    /// Owner: mark a token as listed
    Whitelist { token: String },

    /// Owner: mark a token as unlisted
    Blacklist { token: String },

    /// Owner: set the destination bridge address
    SetCounterpart { counterpart: String },

    Pause {},

    Unpause {},
}

/// Hook messages accepted through CW20 `Send`.
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock for the sender's own address on the destination chain.
    /// The sender must not be a contract.
    DepositLst {
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Lock on behalf of `to` on the destination chain.
    DepositLstTo {
        to: String,
        min_gas_limit: u32,
        extra_data: Binary,
    },
}

// ============================================================================
// Query
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Amount still locked under a deposit hash (zero if unknown)
    #[returns(LockedResponse)]
    Locked { deposit_hash: Binary },

    #[returns(DepositsCountResponse)]
    DepositsCount { token: String, holder: String },

    /// Deposit hashes of a holder, oldest first
    #[returns(DepositHashesResponse)]
    DepositHashes {
        token: String,
        holder: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { token: String },

    /// Hash a would-be deposit, for off-chain tooling
    #[returns(ComputeHashResponse)]
    ComputeDepositHash {
        height: u64,
        token: String,
        from: String,
        to: String,
        amount: Uint128,
        value: Uint128,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub messenger: Addr,
    pub oracle: Addr,
    pub counterpart: Option<String>,
    pub paused: bool,
}

#[cw_serde]
pub struct LockedResponse {
    pub deposit_hash: Binary,
    pub locked: Uint128,
}

#[cw_serde]
pub struct DepositsCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct DepositHashEntry {
    pub index: u64,
    pub deposit_hash: Binary,
}

#[cw_serde]
pub struct DepositHashesResponse {
    pub deposits: Vec<DepositHashEntry>,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub whitelisted: bool,
}

#[cw_serde]
pub struct ComputeHashResponse {
    pub deposit_hash: Binary,
}
