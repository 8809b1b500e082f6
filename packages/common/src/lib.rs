//! Common - Shared Types and Utilities for the LST Bridge Contracts
//!
//! This package provides the pieces both sides of the bridge must agree on
//! bit-for-bit (deposit hash derivation, cross-domain payloads, price
//! arithmetic) together with the access guards and the `Ledger` abstraction
//! implemented by the source and destination deposit books.

pub mod access;
pub mod hash;
pub mod ledger;
pub mod oracle;
pub mod pricing;
pub mod relay;

pub use access::AccessError;
pub use hash::{bytes32_to_hex, compute_deposit_hash, keccak256, parse_deposit_hash};
pub use ledger::{Ledger, LedgerError};
pub use pricing::{PricingError, PRICE_PRECISION};
