//! LST Bridge - Source Chain
//!
//! Locks liquid staking tokens received through the CW20 `Send` hook, values
//! each lock through the price oracle and relays it to the destination bridge.
//! Redemptions relayed back from the destination release the converted token
//! amount from the lock.
//!
//! The implementation is modularized into:
//! - `ledger` - The deposit book (locked amounts, per-holder history, whitelist)
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

pub mod contract;
pub mod error;
pub mod execute;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
