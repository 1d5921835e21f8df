use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintLifecycle {
    Nonexistent,
    Active,
}

/// Per-subject share ledger. `balance` is the subject's accrued trading fee
/// income, held as lamports on this account.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Mint {
    pub subject: Pubkey,
    pub supply: u64,
    pub balance: u64,
    pub bump: u8,
}

impl Mint {
    pub fn lifecycle(&self) -> MintLifecycle {
        if self.subject == Pubkey::default() {
            MintLifecycle::Nonexistent
        } else {
            MintLifecycle::Active
        }
    }

    pub fn open(&mut self, subject: Pubkey, bump: u8) -> Result<()> {
        require!(
            self.lifecycle() == MintLifecycle::Nonexistent,
            ErrorCode::AlreadyExists
        );
        require_keys_neq!(subject, Pubkey::default(), ErrorCode::AddressMismatch);

        self.subject = subject;
        self.supply = 0;
        self.balance = 0;
        self.bump = bump;

        Ok(())
    }

    pub fn require_active_for(&self, subject: &Pubkey) -> Result<()> {
        require!(
            self.lifecycle() == MintLifecycle::Active,
            ErrorCode::MintNotFound
        );
        require_keys_eq!(self.subject, *subject, ErrorCode::AddressMismatch);
        Ok(())
    }
}
