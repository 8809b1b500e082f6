use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:lst-bridge-l1";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Cross-domain messenger on this chain
    pub messenger: Addr,
    /// Price oracle used to value each lock
    pub oracle: Addr,
    /// Destination bridge address (other domain, not validated here)
    pub counterpart: Option<String>,
    pub paused: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");
