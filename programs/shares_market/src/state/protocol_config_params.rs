use anchor_lang::prelude::*;

use crate::{
    constants::{
        DEFAULT_MINT_FEE_LAMPORTS, DEFAULT_PROTOCOL_FEE_BPS, DEFAULT_SUBJECT_FEE_BPS,
        MAX_TOTAL_FEE_BPS,
    },
    error::ErrorCode,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ProtocolConfigParams {
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
    pub mint_fee: u64,
}

impl Default for ProtocolConfigParams {
    fn default() -> Self {
        Self {
            protocol_fee_bps: DEFAULT_PROTOCOL_FEE_BPS,
            subject_fee_bps: DEFAULT_SUBJECT_FEE_BPS,
            mint_fee: DEFAULT_MINT_FEE_LAMPORTS,
        }
    }
}

impl ProtocolConfigParams {
    pub fn validate(&self) -> Result<()> {
        let total = self
            .protocol_fee_bps
            .checked_add(self.subject_fee_bps)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        require!(total <= MAX_TOTAL_FEE_BPS, ErrorCode::InvalidBps);

        Ok(())
    }
}
