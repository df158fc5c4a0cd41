use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM, error::ErrorCode, events::CommonReferralRateChangedEvent,
    helpers::require_owner, state::Pool,
};

pub fn handler(ctx: Context<SetCommonReferralRate>, bips: u16) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;
    // The common rate must leave the protocol a nonzero share.
    require!((bips as u64) < BPS_DENOM, ErrorCode::InvalidRefBips);

    ctx.accounts.pool.common_ref_bips = bips;

    emit!(CommonReferralRateChangedEvent {
        bips,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCommonReferralRate<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
