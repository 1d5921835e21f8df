use anchor_lang::prelude::*;

use crate::{
    constants::{MINT_SEED, PROTOCOL_SEED},
    events::SubjectMinted,
    helpers::{pay_in, settle_mint_creation, spendable_lamports},
    state::{Mint, Protocol},
};

pub fn handler(ctx: Context<CreateMint>) -> Result<()> {
    let subject = ctx.accounts.authority.key();
    let payer_lamports = spendable_lamports(&ctx.accounts.authority)?;

    let mint_fee = settle_mint_creation(
        &mut ctx.accounts.protocol,
        &mut ctx.accounts.mint,
        subject,
        ctx.bumps.mint,
        payer_lamports,
    )?;
    pay_in(
        &ctx.accounts.authority,
        ctx.accounts.protocol.to_account_info(),
        &ctx.accounts.system_program,
        mint_fee,
    )?;

    msg!("Mint created for subject: {}, fee: {}", subject, mint_fee);
    emit!(SubjectMinted {
        subject,
        mint: ctx.accounts.mint.key(),
        mint_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateMint<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, Protocol>,
    #[account(
        init,
        payer = authority,
        seeds = [MINT_SEED, authority.key().as_ref()],
        bump,
        space = 8 + Mint::INIT_SPACE,
    )]
    pub mint: Account<'info, Mint>,
    pub system_program: Program<'info, System>,
}
