use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::ProtocolLifecycle};

/// Shared reserve backing every outstanding share.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Pot {
    pub balance: u64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl Pot {
    pub fn lifecycle(&self) -> ProtocolLifecycle {
        if self.is_initialized {
            ProtocolLifecycle::Initialized
        } else {
            ProtocolLifecycle::Uninitialized
        }
    }

    pub fn open(&mut self, bump: u8) -> Result<()> {
        require!(
            self.lifecycle() == ProtocolLifecycle::Uninitialized,
            ErrorCode::AlreadyExists
        );
        self.balance = 0;
        self.is_initialized = true;
        self.bump = bump;
        Ok(())
    }
}
