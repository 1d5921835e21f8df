use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::ErrorCode;
pub use events::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("4XDbT5GZM7o4TMqM4ekTXdSqj8SJ4yrsJLnPeRESm4Qc");

#[program]
pub mod shares_market {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn mint(ctx: Context<CreateMint>) -> Result<()> {
        instructions::create_mint::handler(ctx)
    }

    pub fn buy_shares(ctx: Context<BuyShares>, subject: Pubkey, amount: u64) -> Result<()> {
        instructions::buy_shares::handler(ctx, subject, amount)
    }

    pub fn sell_shares(ctx: Context<SellShares>, subject: Pubkey, amount: u64) -> Result<()> {
        instructions::sell_shares::handler(ctx, subject, amount)
    }

    pub fn withdraw_from_mint(ctx: Context<WithdrawFromMint>) -> Result<()> {
        instructions::withdraw_from_mint::handler(ctx)
    }

    pub fn withdraw_from_protocol(ctx: Context<WithdrawFromProtocol>) -> Result<()> {
        instructions::withdraw_from_protocol::handler(ctx)
    }

    pub fn update_protocol_config(
        ctx: Context<UpdateProtocolConfig>,
        params: ProtocolConfigParams,
    ) -> Result<()> {
        instructions::update_protocol_config::handler(ctx, params)
    }
}
