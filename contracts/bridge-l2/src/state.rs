use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:lst-bridge-l2";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Cross-domain messenger on this chain
    pub messenger: Addr,
    /// Source bridge address (other domain, not validated here)
    pub counterpart: Option<String>,
    /// Native denom credited on deposit and paid on redemption
    pub denom: String,
    pub paused: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");
