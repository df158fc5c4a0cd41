use anchor_lang::prelude::*;

use crate::{
    events::WithdrawEvent,
    helpers::pay_from_pool,
    state::{DepositAccount, Pool},
};

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let clock = Clock::get()?;

    // Zero the balance before moving value out.
    let amount = ctx.accounts.deposit_account.take_balance()?;
    pay_from_pool(
        &ctx.accounts.pool.to_account_info(),
        &ctx.accounts.depositor.to_account_info(),
        amount,
    )?;

    msg!("Withdrawing {} lamports", amount);

    emit!(WithdrawEvent {
        depositor: ctx.accounts.depositor.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [b"deposit", pool.key().as_ref(), depositor.key().as_ref()],
        bump = deposit_account.bump,
    )]
    pub deposit_account: Account<'info, DepositAccount>,
}
