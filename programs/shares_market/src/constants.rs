pub const PROTOCOL_SEED: &[u8] = b"PROTOCOL";
pub const POT_SEED: &[u8] = b"POT";
pub const MINT_SEED: &[u8] = b"MINT";
pub const TOKEN_SEED: &[u8] = b"TOKEN";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const BPS_DENOM: u64 = 10_000;

/// Marginal price of share `k` (0-based) is `(k + 1)^2 * LAMPORTS_PER_SOL / CURVE_DIVISOR`.
pub const CURVE_DIVISOR: u128 = 16_000;

pub const DEFAULT_PROTOCOL_FEE_BPS: u16 = 500;
pub const DEFAULT_SUBJECT_FEE_BPS: u16 = 500;
pub const DEFAULT_MINT_FEE_LAMPORTS: u64 = LAMPORTS_PER_SOL / 2;

/// Upper bound on `protocol_fee_bps + subject_fee_bps`.
pub const MAX_TOTAL_FEE_BPS: u16 = 2_500;
