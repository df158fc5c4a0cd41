use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fv2KSFRnmDrxXiqDnyPZBHT7r73MH8GctF1q8onC7Ko6");

#[program]
pub mod deposit_pool {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        fallback_fee: u64,
        common_ref_bips: u16,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, fallback_fee, common_ref_bips)
    }

    pub fn set_fee_schedule(
        ctx: Context<SetFeeSchedule>,
        thresholds: Vec<u64>,
        fees: Vec<u64>,
        fallback_fee: u64,
    ) -> Result<()> {
        instructions::set_fee_schedule::handler(ctx, thresholds, fees, fallback_fee)
    }

    pub fn set_fallback_fee(ctx: Context<SetFallbackFee>, fallback_fee: u64) -> Result<()> {
        instructions::set_fallback_fee::handler(ctx, fallback_fee)
    }

    pub fn set_fee_collector(ctx: Context<SetFeeCollector>, new_collector: Pubkey) -> Result<()> {
        instructions::set_fee_collector::handler(ctx, new_collector)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::handler(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::handler(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn deposit_with_referrer(ctx: Context<DepositWithReferrer>, amount: u64) -> Result<()> {
        instructions::deposit_with_referrer::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    pub fn claim_fee_earnings(ctx: Context<ClaimFeeEarnings>) -> Result<()> {
        instructions::claim_fee_earnings::handler(ctx)
    }

    pub fn set_common_referral_rate(ctx: Context<SetCommonReferralRate>, bips: u16) -> Result<()> {
        instructions::set_common_referral_rate::handler(ctx, bips)
    }

    pub fn set_referral_rate(ctx: Context<SetReferralRate>, bips: u16) -> Result<()> {
        instructions::set_referral_rate::handler(ctx, bips)
    }

    pub fn set_referral_rates_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetReferralRatesBatch<'info>>,
        referrers: Vec<Pubkey>,
        bips: u16,
    ) -> Result<()> {
        instructions::set_referral_rates_batch::handler(ctx, referrers, bips)
    }

    pub fn claim_referral_earnings(ctx: Context<ClaimReferralEarnings>) -> Result<()> {
        instructions::claim_referral_earnings::handler(ctx)
    }
}
