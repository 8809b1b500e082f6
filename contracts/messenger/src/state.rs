use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:cross-domain-messenger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id used while a relayed message executes
pub const RELAY_REPLY_ID: u64 = 1;

/// Reply id for a replayed message; only successes come back
pub const REPLAY_REPLY_ID: u64 = 2;

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Native denom delivered as message value on this domain
    pub denom: String,
    /// Messenger on the other domain whose outbox this instance relays
    pub counterpart: Option<Addr>,
}

/// A message queued for the other domain
#[cw_serde]
pub struct SentMessage {
    pub nonce: u64,
    pub sender: Addr,
    pub target: String,
    pub message: Binary,
    pub value: Uint128,
    pub min_gas_limit: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Outbox, keyed by send nonce
pub const OUTBOX: Map<u64, SentMessage> = Map::new("outbox");

pub const NEXT_SEND_NONCE: Item<u64> = Item::new("next_send_nonce");

/// Next counterpart nonce to relay (strict FIFO)
pub const NEXT_RELAY_NONCE: Item<u64> = Item::new("next_relay_nonce");

/// Other-domain sender of the message being relayed; absent outside a relay
pub const XDOMAIN_SENDER: Item<String> = Item::new("xdomain_sender");

/// Nonce of the message being relayed; absent outside a relay
pub const IN_FLIGHT: Item<u64> = Item::new("in_flight");

/// Counterpart nonces whose delivery failed, with the error it failed on.
/// Removed once a replay succeeds.
pub const FAILED: Map<u64, String> = Map::new("failed");
