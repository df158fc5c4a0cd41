use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode, state::Pool};

pub fn handler(ctx: Context<InitializePool>, fallback_fee: u64, common_ref_bips: u16) -> Result<()> {
    require!(
        (common_ref_bips as u64) < BPS_DENOM,
        ErrorCode::InvalidRefBips
    );

    let pool = &mut ctx.accounts.pool;
    pool.owner = ctx.accounts.owner.key();
    pool.fee_collector = ctx.accounts.owner.key();
    pool.fallback_fee = fallback_fee;
    pool.tiers = Vec::new();
    pool.common_ref_bips = common_ref_bips;
    pool.fee_earned = 0;
    pool.fee_claimed = 0;
    pool.deposits_count = 0;
    pool.deposits_volume = 0;
    pool.paused = false;
    pool.bump = ctx.bumps.pool;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"pool", owner.key().as_ref()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    pub system_program: Program<'info, System>,
}
