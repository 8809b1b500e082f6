//! Cross-Domain Messenger (local)
//!
//! A pair of these contracts, one per domain, stands in for the real
//! cross-domain transport on devnets and in tests. Each instance keeps an
//! outbox of sent messages; its counterpart relays them in nonce order,
//! exposing the original sender through `XDomainMessageSender` for the
//! duration of the relay and delivering the message's `value` in the local
//! native denom from its own balance.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
