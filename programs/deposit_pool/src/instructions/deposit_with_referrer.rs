use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    error::ErrorCode,
    events::DepositEvent,
    helpers::split_fee,
    state::{DepositAccount, Pool, ReferrerRecord},
};

pub fn handler(ctx: Context<DepositWithReferrer>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let (fee, net) = ctx.accounts.pool.deposit_accounting(amount)?;
    require_keys_neq!(
        ctx.accounts.referrer.key(),
        ctx.accounts.depositor.key(),
        ErrorCode::InvalidReferrer
    );

    system_program::transfer(ctx.accounts.fund_ctx(), amount)?;

    let pool_key = ctx.accounts.pool.key();
    let depositor_key = ctx.accounts.depositor.key();
    let referrer_key = ctx.accounts.referrer.key();
    let common_bips = ctx.accounts.pool.common_ref_bips;

    let record = &mut ctx.accounts.referrer_record;
    if record.referrer == Pubkey::default() {
        record.pool = pool_key;
        record.referrer = referrer_key;
        record.bump = ctx.bumps.referrer_record;
    }
    let (protocol_share, referrer_share) = split_fee(fee, record.effective_bips(common_bips))?;
    record.credit(referrer_share)?;

    let pool = &mut ctx.accounts.pool;
    pool.record_deposit(protocol_share, net)?;

    let account = &mut ctx.accounts.deposit_account;
    if account.owner == Pubkey::default() {
        account.pool = pool_key;
        account.owner = depositor_key;
        account.bump = ctx.bumps.deposit_account;
    }
    let balance = account.record_deposit(net)?;

    msg!(
        "Deposit of {} lamports, fee {} ({} to referrer)",
        net,
        fee,
        referrer_share
    );

    emit!(DepositEvent {
        depositor: depositor_key,
        protocol_share,
        amount: net,
        balance,
        referrer: referrer_key,
        referrer_share,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositWithReferrer<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,
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
        payer = depositor,
        seeds = [b"deposit", pool.key().as_ref(), depositor.key().as_ref()],
        bump,
        space = 8 + DepositAccount::INIT_SPACE,
    )]
    pub deposit_account: Account<'info, DepositAccount>,
    #[account(
        init_if_needed,
        payer = depositor,
        seeds = [b"referrer", pool.key().as_ref(), referrer.key().as_ref()],
        bump,
        space = 8 + ReferrerRecord::INIT_SPACE,
    )]
    pub referrer_record: Account<'info, ReferrerRecord>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositWithReferrer<'info> {
    fn fund_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.depositor.to_account_info(),
            to: self.pool.to_account_info(),
        };
        CpiContext::new(self.system_program.to_account_info(), cpi_accounts)
    }
}
