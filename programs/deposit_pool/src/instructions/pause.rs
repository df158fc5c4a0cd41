use anchor_lang::prelude::*;

use crate::{helpers::require_owner, state::Pool};

pub fn handler(ctx: Context<Pause>) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;

    ctx.accounts.pool.paused = true;

    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
