use anchor_lang::prelude::*;

use crate::{
    constants::PROTOCOL_SEED,
    events::ProtocolConfigUpdated,
    state::{Protocol, ProtocolConfigParams},
};

pub fn handler(ctx: Context<UpdateProtocolConfig>, params: ProtocolConfigParams) -> Result<()> {
    let protocol = &mut ctx.accounts.protocol;
    protocol.require_authority(&ctx.accounts.authority.key())?;
    protocol.apply_config(&params)?;

    msg!(
        "Protocol config updated: protocol_fee_bps={} subject_fee_bps={} mint_fee={}",
        params.protocol_fee_bps,
        params.subject_fee_bps,
        params.mint_fee
    );
    emit!(ProtocolConfigUpdated {
        protocol_fee_bps: params.protocol_fee_bps,
        subject_fee_bps: params.subject_fee_bps,
        mint_fee: params.mint_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateProtocolConfig<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, Protocol>,
}
