//! Destination-side deposit book.
//!
//! Each entry mirrors a source lock together with the price fixed when it
//! arrived. The price never changes afterwards and the locked amount only goes
//! down as the holder redeems.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, BlockInfo, Decimal, StdResult, Storage, Uint128};
use cw_storage_plus::Map;

use common::hash::bytes32_to_hex;
use common::ledger::{release, Ledger, LedgerError};
use common::pricing::price_from_deposit;

#[cw_serde]
pub struct MirrorDeposit {
    /// Block height at which the entry was written
    pub sequence_marker: u64,
    /// Token contract on the source chain
    pub token: String,
    pub holder: Addr,
    pub locked: Uint128,
    /// Base value per token unit, fixed at creation
    pub price: Decimal,
}

/// Mirror entries, keyed by deposit hash
const MIRROR: Map<&[u8], MirrorDeposit> = Map::new("mirror");

/// A relayed lock together with the value paid for it.
pub struct RelayedDeposit {
    pub deposit_hash: [u8; 32],
    pub token: String,
    pub holder: Addr,
    pub amount: Uint128,
    pub value: Uint128,
}

pub struct DepositMirror;

impl Ledger for DepositMirror {
    type Deposit = RelayedDeposit;

    /// Writes unconditionally; a repeated hash replaces the earlier entry.
    fn deposit(
        &self,
        storage: &mut dyn Storage,
        block: &BlockInfo,
        deposit: RelayedDeposit,
    ) -> Result<[u8; 32], LedgerError> {
        let price = price_from_deposit(deposit.amount, deposit.value)?;
        MIRROR.save(
            storage,
            &deposit.deposit_hash,
            &MirrorDeposit {
                sequence_marker: block.height,
                token: deposit.token,
                holder: deposit.holder,
                locked: deposit.amount,
                price,
            },
        )?;
        Ok(deposit.deposit_hash)
    }

    fn withdraw(
        &self,
        storage: &mut dyn Storage,
        deposit_hash: &[u8; 32],
        amount: Uint128,
    ) -> Result<Uint128, LedgerError> {
        let mut entry = self.get_deposit(storage, deposit_hash)?;
        entry.locked = release(entry.locked, amount)?;
        MIRROR.save(storage, deposit_hash, &entry)?;
        Ok(entry.locked)
    }

    fn locked(&self, storage: &dyn Storage, deposit_hash: &[u8; 32]) -> StdResult<Uint128> {
        Ok(MIRROR
            .may_load(storage, deposit_hash)?
            .map(|entry| entry.locked)
            .unwrap_or_default())
    }
}

impl DepositMirror {
    pub fn get_deposit(
        &self,
        storage: &dyn Storage,
        deposit_hash: &[u8; 32],
    ) -> Result<MirrorDeposit, LedgerError> {
        MIRROR
            .may_load(storage, deposit_hash)?
            .ok_or_else(|| LedgerError::DepositNotFound {
                deposit_hash: bytes32_to_hex(deposit_hash),
            })
    }
}
