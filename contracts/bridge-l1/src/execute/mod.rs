//! Execute handlers for the source-chain LST bridge.
//!
//! - `deposit` - CW20 receive hook that locks tokens and relays the deposit
//! - `withdraw` - Relayed redemption that releases locked tokens
//! - `admin` - Whitelist, counterpart and pause management

mod admin;
mod deposit;
mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use withdraw::*;
