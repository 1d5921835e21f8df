use anchor_lang::prelude::*;

use crate::{
    constants::{POT_SEED, PROTOCOL_SEED},
    events::ProtocolInitialized,
    state::{Pot, Protocol},
};

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.protocol.open(authority, ctx.bumps.protocol)?;
    ctx.accounts.pot.open(ctx.bumps.pot)?;

    msg!("Pot and Protocol accounts initialized, authority: {}", authority);
    emit!(ProtocolInitialized {
        authority,
        protocol: ctx.accounts.protocol.key(),
        pot: ctx.accounts.pot.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init,
        payer = authority,
        seeds = [PROTOCOL_SEED],
        bump,
        space = 8 + Protocol::INIT_SPACE,
    )]
    pub protocol: Account<'info, Protocol>,
    #[account(
        init,
        payer = authority,
        seeds = [POT_SEED],
        bump,
        space = 8 + Pot::INIT_SPACE,
    )]
    pub pot: Account<'info, Pot>,
    pub system_program: Program<'info, System>,
}
