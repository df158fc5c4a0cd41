use anchor_lang::prelude::*;

use crate::{events::FallbackFeeChangedEvent, helpers::require_owner, state::Pool};

pub fn handler(ctx: Context<SetFallbackFee>, fallback_fee: u64) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;

    ctx.accounts.pool.fallback_fee = fallback_fee;

    emit!(FallbackFeeChangedEvent {
        fallback_fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetFallbackFee<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
