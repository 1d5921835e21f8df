//! Ledger transitions for every entry point.
//!
//! Each function validates its guards and computes every new value before
//! writing any of them, so a failed call leaves the records untouched. Lamport
//! movement is left to the caller, driven by the returned amounts.

use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::{checked_add, checked_sub, quote_buy, quote_sell, TradeQuote},
    state::{Mint, Pot, Protocol, ProtocolLifecycle, Token, TokenLifecycle},
};

pub struct MarketLedger<'a> {
    pub protocol: &'a mut Protocol,
    pub pot: &'a mut Pot,
    pub mint: &'a mut Mint,
    pub token: &'a mut Token,
}

/// Opens `mint` for `subject` and books the creation fee. Returns the fee the
/// subject owes the protocol.
pub fn settle_mint_creation(
    protocol: &mut Protocol,
    mint: &mut Mint,
    subject: Pubkey,
    bump: u8,
    payer_lamports: u64,
) -> Result<u64> {
    require!(
        protocol.lifecycle() == ProtocolLifecycle::Initialized,
        ErrorCode::ProtocolNotFound
    );
    let fee = protocol.mint_fee;
    require!(payer_lamports >= fee, ErrorCode::InsufficientFunds);
    let fee_balance = checked_add(protocol.fee_balance, fee)?;

    mint.open(subject, bump)?;
    protocol.fee_balance = fee_balance;

    Ok(fee)
}

pub fn settle_buy(
    ledger: MarketLedger<'_>,
    trader: Pubkey,
    subject: Pubkey,
    amount: u64,
    token_bump: u8,
    payer_lamports: u64,
) -> Result<TradeQuote> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    ledger.mint.require_active_for(&subject)?;
    if ledger.token.lifecycle() != TokenLifecycle::Nonexistent {
        ledger.token.require_identity(&trader, &subject)?;
    }

    let quote = quote_buy(ledger.mint.supply, amount, ledger.protocol.fee_schedule())?;
    require!(
        payer_lamports >= quote.buy_total()?,
        ErrorCode::InsufficientFunds
    );

    let pot_balance = checked_add(ledger.pot.balance, quote.base)?;
    let fee_balance = checked_add(ledger.protocol.fee_balance, quote.protocol_fee)?;
    let mint_balance = checked_add(ledger.mint.balance, quote.subject_fee)?;
    let supply = checked_add(ledger.mint.supply, amount)?;
    let held = checked_add(ledger.token.amount, amount)?;

    if ledger.token.lifecycle() == TokenLifecycle::Nonexistent {
        ledger.token.owner = trader;
        ledger.token.subject = subject;
        ledger.token.bump = token_bump;
    }
    ledger.token.amount = held;
    ledger.mint.supply = supply;
    ledger.mint.balance = mint_balance;
    ledger.pot.balance = pot_balance;
    ledger.protocol.fee_balance = fee_balance;

    Ok(quote)
}

pub fn settle_sell(
    ledger: MarketLedger<'_>,
    trader: Pubkey,
    subject: Pubkey,
    amount: u64,
) -> Result<TradeQuote> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    let held = match ledger.token.lifecycle() {
        TokenLifecycle::Nonexistent => return err!(ErrorCode::TokenNotFound),
        TokenLifecycle::Empty => 0,
        TokenLifecycle::Holding(held) => held,
    };
    ledger.token.require_identity(&trader, &subject)?;
    ledger.mint.require_active_for(&subject)?;
    require!(held >= amount, ErrorCode::InsufficientShares);

    let quote = quote_sell(ledger.mint.supply, amount, ledger.protocol.fee_schedule())?;
    require!(ledger.pot.balance >= quote.base, ErrorCode::PotInsolvent);
    quote.sell_proceeds()?;

    let pot_balance = checked_sub(ledger.pot.balance, quote.base)?;
    let fee_balance = checked_add(ledger.protocol.fee_balance, quote.protocol_fee)?;
    let mint_balance = checked_add(ledger.mint.balance, quote.subject_fee)?;
    let supply = checked_sub(ledger.mint.supply, amount)?;
    let held = checked_sub(held, amount)?;

    ledger.token.amount = held;
    ledger.mint.supply = supply;
    ledger.mint.balance = mint_balance;
    ledger.pot.balance = pot_balance;
    ledger.protocol.fee_balance = fee_balance;

    Ok(quote)
}

/// Zeroes the subject's accrued fee income and returns the amount to pay out.
pub fn settle_mint_withdrawal(mint: &mut Mint, caller: &Pubkey) -> Result<u64> {
    require_keys_eq!(mint.subject, *caller, ErrorCode::Unauthorized);
    let amount = mint.balance;
    require!(amount > 0, ErrorCode::NothingToWithdraw);

    mint.balance = 0;
    Ok(amount)
}

/// Zeroes the protocol fee balance and returns the amount to pay out.
pub fn settle_protocol_withdrawal(protocol: &mut Protocol, caller: &Pubkey) -> Result<u64> {
    protocol.require_authority(caller)?;
    let amount = protocol.fee_balance;
    require!(amount > 0, ErrorCode::NothingToWithdraw);

    protocol.fee_balance = 0;
    Ok(amount)
}
