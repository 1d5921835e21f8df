use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::FeeSchedule, state::ProtocolConfigParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolLifecycle {
    Uninitialized,
    Initialized,
}

/// Global treasury and configuration. Fees owed to the authority are held as
/// lamports on this account on top of its rent reserve.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Protocol {
    pub authority: Pubkey,
    pub fee_balance: u64,
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
    pub mint_fee: u64,
    pub bump: u8,
}

impl Protocol {
    pub fn lifecycle(&self) -> ProtocolLifecycle {
        if self.authority == Pubkey::default() {
            ProtocolLifecycle::Uninitialized
        } else {
            ProtocolLifecycle::Initialized
        }
    }

    pub fn open(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        require!(
            self.lifecycle() == ProtocolLifecycle::Uninitialized,
            ErrorCode::AlreadyExists
        );
        require_keys_neq!(authority, Pubkey::default(), ErrorCode::Unauthorized);

        let params = ProtocolConfigParams::default();
        self.authority = authority;
        self.fee_balance = 0;
        self.protocol_fee_bps = params.protocol_fee_bps;
        self.subject_fee_bps = params.subject_fee_bps;
        self.mint_fee = params.mint_fee;
        self.bump = bump;

        Ok(())
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, ErrorCode::Unauthorized);
        Ok(())
    }

    pub fn apply_config(&mut self, params: &ProtocolConfigParams) -> Result<()> {
        params.validate()?;
        self.protocol_fee_bps = params.protocol_fee_bps;
        self.subject_fee_bps = params.subject_fee_bps;
        self.mint_fee = params.mint_fee;
        Ok(())
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            protocol_fee_bps: self.protocol_fee_bps,
            subject_fee_bps: self.subject_fee_bps,
        }
    }
}
