use anchor_lang::prelude::*;

use crate::{
    constants::{MINT_SEED, POT_SEED, PROTOCOL_SEED, TOKEN_SEED},
    events::Trade,
    helpers::{pay_out, settle_sell, MarketLedger},
    state::{Mint, Pot, Protocol, Token},
};

pub fn handler(ctx: Context<SellShares>, subject: Pubkey, amount: u64) -> Result<()> {
    let trader = ctx.accounts.authority.key();

    let quote = settle_sell(
        MarketLedger {
            protocol: &mut ctx.accounts.protocol,
            pot: &mut ctx.accounts.pot,
            mint: &mut ctx.accounts.mint,
            token: &mut ctx.accounts.token,
        },
        trader,
        subject,
        amount,
    )?;

    let accounts = &ctx.accounts;
    let pot = accounts.pot.to_account_info();
    pay_out(&pot, &accounts.protocol.to_account_info(), quote.protocol_fee)?;
    pay_out(&pot, &accounts.mint.to_account_info(), quote.subject_fee)?;
    pay_out(&pot, &accounts.authority.to_account_info(), quote.sell_proceeds()?)?;

    let timestamp = Clock::get()?.unix_timestamp;
    msg!(
        "Sell: trader={} subject={} amount={} price={} fee={} supply={}",
        trader,
        subject,
        amount,
        quote.base,
        quote.fee()?,
        accounts.mint.supply
    );
    emit!(Trade {
        trader,
        subject,
        is_buy: false,
        share_amount: amount,
        base_amount: quote.base,
        protocol_fee: quote.protocol_fee,
        subject_fee: quote.subject_fee,
        supply: accounts.mint.supply,
        timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(subject: Pubkey, amount: u64)]
pub struct SellShares<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, Protocol>,
    #[account(
        mut,
        seeds = [POT_SEED],
        bump = pot.bump,
    )]
    pub pot: Account<'info, Pot>,
    #[account(
        mut,
        seeds = [MINT_SEED, subject.as_ref()],
        bump = mint.bump,
    )]
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        seeds = [TOKEN_SEED, authority.key().as_ref(), subject.as_ref()],
        bump = token.bump,
    )]
    pub token: Account<'info, Token>,
}
