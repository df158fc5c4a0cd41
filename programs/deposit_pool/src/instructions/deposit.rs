use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    events::DepositEvent,
    state::{DepositAccount, Pool},
};

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let (fee, net) = ctx.accounts.pool.deposit_accounting(amount)?;

    // The attached value lands in the pool account before any ledger write.
    system_program::transfer(ctx.accounts.fund_ctx(), amount)?;

    let pool_key = ctx.accounts.pool.key();
    let depositor_key = ctx.accounts.depositor.key();

    let pool = &mut ctx.accounts.pool;
    pool.record_deposit(fee, net)?;

    let account = &mut ctx.accounts.deposit_account;
    if account.owner == Pubkey::default() {
        account.pool = pool_key;
        account.owner = depositor_key;
        account.bump = ctx.bumps.deposit_account;
    }
    let balance = account.record_deposit(net)?;

    msg!("Deposit of {} lamports, fee {}", net, fee);

    emit!(DepositEvent {
        depositor: depositor_key,
        protocol_share: fee,
        amount: net,
        balance,
        referrer: Pubkey::default(),
        referrer_share: 0,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init_if_needed,
        payer = depositor,
        seeds = [b"deposit", pool.key().as_ref(), depositor.key().as_ref()],
        bump,
        space = 8 + DepositAccount::INIT_SPACE,
    )]
    pub deposit_account: Account<'info, DepositAccount>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    fn fund_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.depositor.to_account_info(),
            to: self.pool.to_account_info(),
        };
        CpiContext::new(self.system_program.to_account_info(), cpi_accounts)
    }
}
