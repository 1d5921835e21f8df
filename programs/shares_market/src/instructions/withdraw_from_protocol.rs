use anchor_lang::prelude::*;

use crate::{
    constants::PROTOCOL_SEED,
    events::ProtocolWithdrawal,
    helpers::{pay_out, settle_protocol_withdrawal},
    state::Protocol,
};

pub fn handler(ctx: Context<WithdrawFromProtocol>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let amount = settle_protocol_withdrawal(&mut ctx.accounts.protocol, &authority)?;

    pay_out(
        &ctx.accounts.protocol.to_account_info(),
        &ctx.accounts.authority.to_account_info(),
        amount,
    )?;

    msg!("Protocol withdrawal: authority={} amount={}", authority, amount);
    emit!(ProtocolWithdrawal { authority, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFromProtocol<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, Protocol>,
}
