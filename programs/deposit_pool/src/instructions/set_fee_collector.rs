use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode, events::FeeCollectorChangedEvent, helpers::require_owner, state::Pool,
};

pub fn handler(ctx: Context<SetFeeCollector>, new_collector: Pubkey) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;
    require_keys_neq!(new_collector, Pubkey::default(), ErrorCode::InvalidCollector);

    ctx.accounts.pool.fee_collector = new_collector;

    emit!(FeeCollectorChangedEvent {
        fee_collector: new_collector,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeCollector<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
