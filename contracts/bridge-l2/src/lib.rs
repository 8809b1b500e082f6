//! LST Bridge - Destination Chain
//!
//! Finalizes deposits relayed from the source bridge: the lock is mirrored
//! with a price fixed at arrival and the recipient is credited the relayed
//! value in native currency. The holder redeems by paying native currency
//! back, which is converted into token units at the fixed price and relayed
//! to the source bridge for release.

pub mod contract;
pub mod error;
pub mod execute;
pub mod mirror;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
