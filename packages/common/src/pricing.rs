//! Fixed-point price arithmetic shared by the mirror and the L2 coordinator.
//!
//! A mirror price is `value * 1e18 / amount`, held as a `Decimal` whose atomics
//! carry the 18 fractional digits. All products go through a 256-bit
//! intermediate and every division truncates.

use cosmwasm_std::{CheckedFromRatioError, CheckedMultiplyRatioError, Decimal, Uint128};
use thiserror::Error;

/// One whole unit in 18-decimal fixed point.
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("Invalid price: deposit amount is zero")]
    ZeroAmount,

    #[error("Invalid price: price is zero")]
    ZeroPrice,

    #[error("Price arithmetic overflow")]
    Overflow,
}

/// Price fixed at mirror creation: `value * 1e18 / amount`.
pub fn price_from_deposit(amount: Uint128, value: Uint128) -> Result<Decimal, PricingError> {
    Decimal::checked_from_ratio(value, amount).map_err(|e| match e {
        CheckedFromRatioError::DivideByZero => PricingError::ZeroAmount,
        CheckedFromRatioError::Overflow => PricingError::Overflow,
    })
}

/// Base-currency value still redeemable against `locked`: `locked * price / 1e18`.
pub fn redeemable_value(locked: Uint128, price: Decimal) -> Result<Uint128, PricingError> {
    locked
        .checked_multiply_ratio(price.atomics(), PRICE_PRECISION)
        .map_err(ratio_error)
}

/// Token units released for a payment: `paid * 1e18 / price`.
pub fn converted_amount(paid: Uint128, price: Decimal) -> Result<Uint128, PricingError> {
    if price.is_zero() {
        return Err(PricingError::ZeroPrice);
    }
    paid.checked_multiply_ratio(PRICE_PRECISION, price.atomics())
        .map_err(ratio_error)
}

fn ratio_error(e: CheckedMultiplyRatioError) -> PricingError {
    match e {
        CheckedMultiplyRatioError::DivideByZero => PricingError::ZeroPrice,
        CheckedMultiplyRatioError::Overflow => PricingError::Overflow,
    }
}
