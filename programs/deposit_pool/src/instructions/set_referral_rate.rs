use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    events::ReferralRateChangedEvent,
    helpers::require_owner,
    state::{Pool, ReferrerRecord},
};

pub fn handler(ctx: Context<SetReferralRate>, bips: u16) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;
    // An override may hand the referrer the whole fee, but no more.
    require!((bips as u64) <= BPS_DENOM, ErrorCode::InvalidRefBips);

    let pool_key = ctx.accounts.pool.key();
    let referrer_key = ctx.accounts.referrer.key();

    let record = &mut ctx.accounts.referrer_record;
    if record.referrer == Pubkey::default() {
        record.pool = pool_key;
        record.referrer = referrer_key;
        record.bump = ctx.bumps.referrer_record;
    }
    record.bips_override = Some(bips);

    emit!(ReferralRateChangedEvent {
        referrer: referrer_key,
        bips,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetReferralRate<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    /// CHECK: referral beneficiary; only its key is recorded.
    pub referrer: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [b"referrer", pool.key().as_ref(), referrer.key().as_ref()],
        bump,
        space = 8 + ReferrerRecord::INIT_SPACE,
    )]
    pub referrer_record: Account<'info, ReferrerRecord>,
    pub system_program: Program<'info, System>,
}
