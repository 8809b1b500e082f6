//! Source-side deposit book.
//!
//! Records every lock under its deposit hash, keeps an append-only history of
//! hashes per `(token, recipient)`, and holds the token whitelist. Storage is
//! private to this module; the coordinator handlers are the only writers.

use cosmwasm_std::{BlockInfo, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Map};

use common::hash::compute_deposit_hash;
use common::ledger::{release, Ledger, LedgerError};

/// Locked token amount, keyed by deposit hash
const LOCKED: Map<&[u8], Uint128> = Map::new("locked");

/// Deposit hashes per (token, recipient), keyed by position
const HISTORY: Map<(&str, &str, u64), [u8; 32]> = Map::new("deposit_history");

/// History length per (token, recipient)
const HISTORY_LEN: Map<(&str, &str), u64> = Map::new("deposit_history_len");

/// Owner-maintained token list. Not consulted when locking.
const WHITELIST: Map<&str, bool> = Map::new("whitelist");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// A lock as reported by the coordinator.
pub struct LstDeposit {
    pub token: String,
    pub from: String,
    pub to: String,
    pub amount: Uint128,
    /// Oracle valuation of `amount`
    pub value: Uint128,
}

pub struct DepositLedger;

impl Ledger for DepositLedger {
    type Deposit = LstDeposit;

    fn deposit(
        &self,
        storage: &mut dyn Storage,
        block: &BlockInfo,
        deposit: LstDeposit,
    ) -> Result<[u8; 32], LedgerError> {
        if deposit.amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        if deposit.value.is_zero() {
            return Err(LedgerError::ZeroValue);
        }

        let deposit_hash = compute_deposit_hash(
            block.height,
            &deposit.token,
            &deposit.from,
            &deposit.to,
            deposit.amount,
            deposit.value,
        );

        let holder = (deposit.token.as_str(), deposit.to.as_str());
        let index = HISTORY_LEN.may_load(storage, holder)?.unwrap_or_default();
        HISTORY.save(storage, (holder.0, holder.1, index), &deposit_hash)?;
        HISTORY_LEN.save(storage, holder, &(index + 1))?;

        // Same-height duplicates collapse onto one hash; the later lock wins.
        LOCKED.save(storage, &deposit_hash, &deposit.amount)?;

        Ok(deposit_hash)
    }

    fn withdraw(
        &self,
        storage: &mut dyn Storage,
        deposit_hash: &[u8; 32],
        amount: Uint128,
    ) -> Result<Uint128, LedgerError> {
        let locked = self.locked(storage, deposit_hash)?;
        let remaining = release(locked, amount)?;
        LOCKED.save(storage, deposit_hash, &remaining)?;
        Ok(remaining)
    }

    fn locked(&self, storage: &dyn Storage, deposit_hash: &[u8; 32]) -> StdResult<Uint128> {
        Ok(LOCKED.may_load(storage, deposit_hash)?.unwrap_or_default())
    }
}

impl DepositLedger {
    /// Number of locks ever recorded for `holder` in `token`.
    pub fn deposits_count(
        &self,
        storage: &dyn Storage,
        token: &str,
        holder: &str,
    ) -> StdResult<u64> {
        Ok(HISTORY_LEN
            .may_load(storage, (token, holder))?
            .unwrap_or_default())
    }

    /// Page through a holder's deposit hashes in creation order.
    pub fn deposit_hashes(
        &self,
        storage: &dyn Storage,
        token: &str,
        holder: &str,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<(u64, [u8; 32])>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        HISTORY
            .prefix((token, holder))
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .collect()
    }

    pub fn set_whitelisted(
        &self,
        storage: &mut dyn Storage,
        token: &str,
        whitelisted: bool,
    ) -> StdResult<()> {
        WHITELIST.save(storage, token, &whitelisted)
    }

    pub fn is_whitelisted(&self, storage: &dyn Storage, token: &str) -> StdResult<bool> {
        Ok(WHITELIST.may_load(storage, token)?.unwrap_or_default())
    }
}
