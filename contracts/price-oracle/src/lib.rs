//! LST Price Oracle
//!
//! Values an amount of liquid staking token shares in base currency. Each token
//! is classified by the owner and priced by the policy of its class:
//!
//! - `OneToOne` - fixed 1e18 per lookup
//! - `PooledShares` - the token's own share → pooled value conversion
//! - `ExchangeRate` - `shares * total_value / total_supply` from the rate manager
//! - `Vault` - the token's own redeem preview
//!
//! Unclassified tokens cannot be priced.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
