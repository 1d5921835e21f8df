use anchor_lang::prelude::*;

use crate::{
    constants::MINT_SEED,
    events::MintWithdrawal,
    helpers::{pay_out, settle_mint_withdrawal},
    state::Mint,
};

pub fn handler(ctx: Context<WithdrawFromMint>) -> Result<()> {
    let subject = ctx.accounts.authority.key();
    let amount = settle_mint_withdrawal(&mut ctx.accounts.mint, &subject)?;

    pay_out(
        &ctx.accounts.mint.to_account_info(),
        &ctx.accounts.authority.to_account_info(),
        amount,
    )?;

    msg!("Mint withdrawal: subject={} amount={}", subject, amount);
    emit!(MintWithdrawal { subject, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFromMint<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [MINT_SEED, authority.key().as_ref()],
        bump = mint.bump,
    )]
    pub mint: Account<'info, Mint>,
}
