use anchor_lang::prelude::*;

use crate::{
    events::FeeEarningsClaimedEvent,
    helpers::{pay_from_pool, require_fee_collector},
    state::Pool,
};

pub fn handler(ctx: Context<ClaimFeeEarnings>) -> Result<()> {
    let clock = Clock::get()?;
    require_fee_collector(&ctx.accounts.fee_collector, &ctx.accounts.pool)?;

    let amount = ctx.accounts.pool.take_fee_earnings()?;
    pay_from_pool(
        &ctx.accounts.pool.to_account_info(),
        &ctx.accounts.fee_collector.to_account_info(),
        amount,
    )?;

    msg!("Claiming {} lamports of protocol fees", amount);

    emit!(FeeEarningsClaimedEvent {
        fee_collector: ctx.accounts.fee_collector.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimFeeEarnings<'info> {
    #[account(mut)]
    pub fee_collector: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
