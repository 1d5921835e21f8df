use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub authority: Pubkey,
    pub protocol: Pubkey,
    pub pot: Pubkey,
}

#[event]
pub struct SubjectMinted {
    pub subject: Pubkey,
    pub mint: Pubkey,
    pub mint_fee: u64,
}

#[event]
pub struct Trade {
    pub trader: Pubkey,
    pub subject: Pubkey,
    pub is_buy: bool,
    pub share_amount: u64,
    pub base_amount: u64,
    pub protocol_fee: u64,
    pub subject_fee: u64,
    pub supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct MintWithdrawal {
    pub subject: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ProtocolWithdrawal {
    pub authority: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ProtocolConfigUpdated {
    pub protocol_fee_bps: u16,
    pub subject_fee_bps: u16,
    pub mint_fee: u64,
}
