use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Account address does not match its canonical derivation")]
    AddressMismatch,
    #[msg("Account already exists")]
    AlreadyExists,
    #[msg("Protocol has not been initialized")]
    ProtocolNotFound,
    #[msg("Subject mint not found")]
    MintNotFound,
    #[msg("Token account not found")]
    TokenNotFound,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient shares")]
    InsufficientShares,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Pot balance cannot cover payout")]
    PotInsolvent,
    #[msg("Nothing to withdraw")]
    NothingToWithdraw,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Math overflow")]
    MathOverflow,
}
