use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn mul_bps_u64(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .and_then(|v| u64::try_from(v).map_err(|_| error!(ErrorCode::MathOverflow)))
}

pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or_else(|| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_bps() {
        assert_eq!(mul_bps_u64(1_000_000, 500).unwrap(), 50_000);
        assert_eq!(mul_bps_u64(2_500_000, 10_000).unwrap(), 2_500_000);
        assert_eq!(mul_bps_u64(19, 500).unwrap(), 0);
        assert_eq!(mul_bps_u64(u64::MAX, 10_000).unwrap(), u64::MAX);
        assert!(mul_bps_u64(u64::MAX, 10_001).is_err());
    }

    #[test]
    fn test_checked_bounds() {
        assert!(checked_add(u64::MAX, 1).is_err());
        assert!(checked_sub(0, 1).is_err());
        assert_eq!(checked_sub(5, 5).unwrap(), 0);
    }
}
