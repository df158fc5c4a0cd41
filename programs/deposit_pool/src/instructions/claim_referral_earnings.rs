use anchor_lang::prelude::*;

use crate::{
    events::ReferralEarningsClaimedEvent,
    helpers::pay_from_pool,
    state::{Pool, ReferrerRecord},
};

pub fn handler(ctx: Context<ClaimReferralEarnings>) -> Result<()> {
    let clock = Clock::get()?;

    // Zero the accrued share before moving value out.
    let amount = ctx.accounts.referrer_record.take_earnings()?;
    pay_from_pool(
        &ctx.accounts.pool.to_account_info(),
        &ctx.accounts.referrer.to_account_info(),
        amount,
    )?;

    msg!("Claiming {} lamports of referral earnings", amount);

    emit!(ReferralEarningsClaimedEvent {
        referrer: ctx.accounts.referrer.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimReferralEarnings<'info> {
    #[account(mut)]
    pub referrer: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [b"referrer", pool.key().as_ref(), referrer.key().as_ref()],
        bump = referrer_record.bump,
    )]
    pub referrer_record: Account<'info, ReferrerRecord>,
}
