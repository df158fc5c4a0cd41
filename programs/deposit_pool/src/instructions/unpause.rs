use anchor_lang::prelude::*;

use crate::{helpers::require_owner, state::Pool};

pub fn handler(ctx: Context<Unpause>) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;

    ctx.accounts.pool.paused = false;

    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
