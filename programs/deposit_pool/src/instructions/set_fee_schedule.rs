use anchor_lang::prelude::*;

use crate::{events::FeeScheduleChangedEvent, helpers::require_owner, state::Pool};

pub fn handler(
    ctx: Context<SetFeeSchedule>,
    thresholds: Vec<u64>,
    fees: Vec<u64>,
    fallback_fee: u64,
) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;

    let pool = &mut ctx.accounts.pool;
    pool.replace_schedule(&thresholds, &fees, fallback_fee)?;

    emit!(FeeScheduleChangedEvent {
        thresholds,
        fees,
        fallback_fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeSchedule<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
