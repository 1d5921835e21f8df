use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenLifecycle {
    Nonexistent,
    Holding(u64),
    Empty,
}

/// A holder's position in one subject's shares.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Token {
    pub owner: Pubkey,
    pub subject: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Token {
    pub fn lifecycle(&self) -> TokenLifecycle {
        if self.owner == Pubkey::default() {
            TokenLifecycle::Nonexistent
        } else if self.amount == 0 {
            TokenLifecycle::Empty
        } else {
            TokenLifecycle::Holding(self.amount)
        }
    }

    pub fn require_identity(&self, owner: &Pubkey, subject: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *owner, ErrorCode::AddressMismatch);
        require_keys_eq!(self.subject, *subject, ErrorCode::AddressMismatch);
        Ok(())
    }
}
