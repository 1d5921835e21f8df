use anchor_lang::prelude::*;

use crate::{
    constants::{MINT_SEED, POT_SEED, PROTOCOL_SEED, TOKEN_SEED},
    events::Trade,
    helpers::{pay_in, settle_buy, spendable_lamports, MarketLedger},
    state::{Mint, Pot, Protocol, Token},
};

pub fn handler(ctx: Context<BuyShares>, subject: Pubkey, amount: u64) -> Result<()> {
    let trader = ctx.accounts.authority.key();
    let payer_lamports = spendable_lamports(&ctx.accounts.authority)?;

    let quote = settle_buy(
        MarketLedger {
            protocol: &mut ctx.accounts.protocol,
            pot: &mut ctx.accounts.pot,
            mint: &mut ctx.accounts.mint,
            token: &mut ctx.accounts.token,
        },
        trader,
        subject,
        amount,
        ctx.bumps.token,
        payer_lamports,
    )?;

    let accounts = &ctx.accounts;
    pay_in(
        &accounts.authority,
        accounts.pot.to_account_info(),
        &accounts.system_program,
        quote.base,
    )?;
    pay_in(
        &accounts.authority,
        accounts.protocol.to_account_info(),
        &accounts.system_program,
        quote.protocol_fee,
    )?;
    pay_in(
        &accounts.authority,
        accounts.mint.to_account_info(),
        &accounts.system_program,
        quote.subject_fee,
    )?;

    let timestamp = Clock::get()?.unix_timestamp;
    msg!(
        "Buy: trader={} subject={} amount={} price={} fee={} supply={}",
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
        is_buy: true,
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
pub struct BuyShares<'info> {
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
        init_if_needed,
        payer = authority,
        seeds = [TOKEN_SEED, authority.key().as_ref(), subject.as_ref()],
        bump,
        space = 8 + Token::INIT_SPACE,
    )]
    pub token: Account<'info, Token>,
    pub system_program: Program<'info, System>,
}
