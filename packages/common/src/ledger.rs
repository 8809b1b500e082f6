//! Deposit book abstraction shared by the source ledger and the destination
//! mirror.
//!
//! Both books key records by the 32-byte deposit hash and only ever decrease
//! the locked amount after creation; they differ in what a record holds.

use cosmwasm_std::{BlockInfo, StdError, StdResult, Storage, Uint128};
use thiserror::Error;

use crate::pricing::PricingError;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Pricing(#[from] PricingError),

    #[error("Invalid amount: deposit amount must be greater than zero")]
    ZeroAmount,

    #[error("Invalid value: deposit value must be greater than zero")]
    ZeroValue,

    #[error("Deposit not found: {deposit_hash}")]
    DepositNotFound { deposit_hash: String },

    #[error("Insufficient locked balance: locked {locked}, requested {requested}")]
    InsufficientLocked { locked: Uint128, requested: Uint128 },
}

pub trait Ledger {
    /// What a new deposit carries into the book.
    type Deposit;

    /// Record a deposit and return its identifier.
    fn deposit(
        &self,
        storage: &mut dyn Storage,
        block: &BlockInfo,
        deposit: Self::Deposit,
    ) -> Result<[u8; 32], LedgerError>;

    /// Release `amount` from a deposit, returning what stays locked.
    fn withdraw(
        &self,
        storage: &mut dyn Storage,
        deposit_hash: &[u8; 32],
        amount: Uint128,
    ) -> Result<Uint128, LedgerError>;

    /// Amount currently locked under `deposit_hash` (zero if unknown).
    fn locked(&self, storage: &dyn Storage, deposit_hash: &[u8; 32]) -> StdResult<Uint128>;
}

/// Checked decrement used by both books.
pub fn release(locked: Uint128, requested: Uint128) -> Result<Uint128, LedgerError> {
    locked
        .checked_sub(requested)
        .map_err(|_| LedgerError::InsufficientLocked { locked, requested })
}
