//! Bonding-curve pricing.
//!
//! Share `k` (0-based) has marginal price `(k + 1)^2 * LAMPORTS_PER_SOL / CURVE_DIVISOR`.
//! Trades are priced as differences of the floored cumulative [`curve_value`], so
//! any sequence of buys and sells telescopes and the pot holds exactly
//! `curve_value(supply)` for every subject.

use anchor_lang::prelude::*;

use crate::{
    constants::{CURVE_DIVISOR, LAMPORTS_PER_SOL},
    error::ErrorCode,
    helpers::{checked_add, checked_sub, mul_bps_u64},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSchedule {
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TradeQuote {
    /// Curve value of the traded units, paid into or out of the pot.
    pub base: u64,
    pub protocol_fee: u64,
    pub subject_fee: u64,
}

impl TradeQuote {
    pub fn fee(&self) -> Result<u64> {
        checked_add(self.protocol_fee, self.subject_fee)
    }

    pub fn buy_total(&self) -> Result<u64> {
        checked_add(self.base, self.fee()?)
    }

    pub fn sell_proceeds(&self) -> Result<u64> {
        checked_sub(self.base, self.fee()?)
    }
}

pub fn curve_value(supply: u64) -> Result<u64> {
    let n = supply as u128;
    let sum_of_squares = n
        .checked_mul(n + 1)
        .and_then(|v| v.checked_mul(2 * n + 1))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / 6;

    let lamports = sum_of_squares
        .checked_mul(LAMPORTS_PER_SOL as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / CURVE_DIVISOR;

    u64::try_from(lamports).map_err(|_| error!(ErrorCode::MathOverflow))
}

pub fn quote(
    supply: u64,
    amount: u64,
    direction: Direction,
    fees: FeeSchedule,
) -> Result<TradeQuote> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let (lo, hi) = match direction {
        Direction::Buy => (supply, checked_add(supply, amount)?),
        Direction::Sell => {
            require!(amount <= supply, ErrorCode::InsufficientShares);
            (supply - amount, supply)
        }
    };
    let base = checked_sub(curve_value(hi)?, curve_value(lo)?)?;

    Ok(TradeQuote {
        base,
        protocol_fee: mul_bps_u64(base, fees.protocol_fee_bps as u64)?,
        subject_fee: mul_bps_u64(base, fees.subject_fee_bps as u64)?,
    })
}

pub fn quote_buy(supply: u64, amount: u64, fees: FeeSchedule) -> Result<TradeQuote> {
    quote(supply, amount, Direction::Buy, fees)
}

pub fn quote_sell(supply: u64, amount: u64, fees: FeeSchedule) -> Result<TradeQuote> {
    quote(supply, amount, Direction::Sell, fees)
}

/// Returns `(total, fee)`: what the caller pays on a buy, or receives on a sell.
pub fn price(
    supply: u64,
    amount: u64,
    direction: Direction,
    fees: FeeSchedule,
) -> Result<(u64, u64)> {
    let q = quote(supply, amount, direction, fees)?;
    let total = match direction {
        Direction::Buy => q.buy_total()?,
        Direction::Sell => q.sell_proceeds()?,
    };
    Ok((total, q.fee()?))
}

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*};

    const FEES: FeeSchedule = FeeSchedule {
        protocol_fee_bps: 500,
        subject_fee_bps: 500,
    };

    #[test]
    fn first_share_is_not_free() {
        assert_eq!(curve_value(0).unwrap(), 0);
        assert_eq!(curve_value(1).unwrap(), 62_500);

        let q = quote_buy(0, 1, FEES).unwrap();
        assert_eq!(q.base, 62_500);
        assert_eq!(q.protocol_fee, 3_125);
        assert_eq!(q.subject_fee, 3_125);
        assert_eq!(q.buy_total().unwrap(), 68_750);
    }

    #[test]
    fn buy_five_then_sell_one() {
        let buy = quote_buy(0, 5, FEES).unwrap();
        assert_eq!(buy.base, 3_437_500);
        assert_eq!(buy.fee().unwrap(), 343_750);

        let sell = quote_sell(5, 1, FEES).unwrap();
        assert_eq!(sell.base, 1_562_500);
        assert_eq!(sell.sell_proceeds().unwrap(), 1_406_250);
    }

    #[test]
    fn price_matches_quote_totals() {
        let (total, fee) = price(10, 3, Direction::Buy, FEES).unwrap();
        let q = quote_buy(10, 3, FEES).unwrap();
        assert_eq!(total, q.base + fee);

        let (total, fee) = price(13, 3, Direction::Sell, FEES).unwrap();
        assert_eq!(total, q.base - fee);
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert!(quote_buy(0, 0, FEES).is_err());
        assert!(quote_sell(10, 0, FEES).is_err());
    }

    #[test]
    fn selling_more_than_supply_is_rejected() {
        assert!(quote_sell(2, 3, FEES).is_err());
        assert!(quote_sell(0, 1, FEES).is_err());
    }

    #[test]
    fn huge_supply_errors_instead_of_wrapping() {
        assert!(curve_value(u64::MAX).is_err());
        assert!(quote_buy(u64::MAX, 1, FEES).is_err());
        assert!(quote_buy(1_000_000, 1_000_000, FEES).is_err());
    }

    #[test]
    fn zero_fee_schedule_charges_only_the_curve() {
        let none = FeeSchedule {
            protocol_fee_bps: 0,
            subject_fee_bps: 0,
        };
        let q = quote_buy(3, 2, none).unwrap();
        assert_eq!(q.fee().unwrap(), 0);
        assert_eq!(q.buy_total().unwrap(), q.base);
    }

    proptest! {
        #[test]
        fn check_no_steal(supply in 0u64..90_000, amount in 1u64..6_000) {
            let buy = quote_buy(supply, amount, FEES).unwrap();
            let sell = quote_sell(supply + amount, amount, FEES).unwrap();
            prop_assert_eq!(buy, sell);
            prop_assert!(sell.sell_proceeds().unwrap() <= buy.buy_total().unwrap());
        }

        #[test]
        fn same_supply_buy_and_sell_match(supply in 0u64..50_000, amount in 1u64..10_000) {
            let buy = quote_buy(supply, amount, FEES).unwrap();
            let sell = quote_sell(supply + amount, amount, FEES).unwrap();
            prop_assert_eq!(buy, sell);
            prop_assert!(sell.sell_proceeds().unwrap() <= buy.buy_total().unwrap());
        }

        #[test]
        fn price_rises_with_supply(supply in 0u64..50_000, amount in 1u64..5_000) {
            let lower = quote_buy(supply, amount, FEES).unwrap();
            let higher = quote_buy(supply + 1, amount, FEES).unwrap();
            prop_assert!(higher.base > lower.base);
        }

        #[test]
        fn split_trades_cost_the_same(
            supply in 0u64..20_000,
            first in 1u64..2_000,
            second in 1u64..2_000,
        ) {
            let whole = quote_buy(supply, first + second, FEES).unwrap().base;
            let a = quote_buy(supply, first, FEES).unwrap().base;
            let b = quote_buy(supply + first, second, FEES).unwrap().base;
            prop_assert_eq!(whole, a + b);
        }
    }
}
