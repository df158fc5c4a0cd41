use anchor_lang::prelude::*;

use crate::{
    constants::MAX_FEE_TIERS,
    error::ErrorCode,
};

/// One deposit-amount breakpoint and the fee charged at or below it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct FeeTier {
    pub threshold: u64,
    pub fee: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub owner: Pubkey,
    pub fee_collector: Pubkey,

    /// Fee applied when no tier threshold covers an amount, and the fee
    /// charged on the deposit path.
    pub fallback_fee: u64,

    /// Tier table in insertion order. Lookups take the last entry for a
    /// given threshold, so a re-inserted threshold overwrites its fee.
    #[max_len(MAX_FEE_TIERS)]
    pub tiers: Vec<FeeTier>,

    /// Default referral share rate, strictly below 10_000 bips.
    pub common_ref_bips: u16,

    pub fee_earned: u64,
    pub fee_claimed: u64,

    /// Pool-wide deposit statistics; volume counts net-of-fee amounts.
    pub deposits_count: u64,
    pub deposits_volume: u64,

    /// Gates deposits only; withdrawals and claims ignore it.
    pub paused: bool,

    pub bump: u8,
}

impl Pool {
    /// Replaces the whole tier table and the fallback fee. Thresholds absent
    /// from the new table lose their fee entry, they do not keep the old one.
    pub fn replace_schedule(
        &mut self,
        thresholds: &[u64],
        fees: &[u64],
        fallback_fee: u64,
    ) -> Result<()> {
        require!(
            thresholds.len() == fees.len(),
            ErrorCode::IncorrectFeeValues
        );
        require!(thresholds.len() <= MAX_FEE_TIERS, ErrorCode::TooManyFeeTiers);

        self.tiers.clear();
        for (&threshold, &fee) in thresholds.iter().zip(fees.iter()) {
            self.tiers.push(FeeTier { threshold, fee });
        }
        self.fallback_fee = fallback_fee;
        Ok(())
    }

    /// Fee entry for an exact threshold, 0 when absent. The last entry wins
    /// when a threshold appears more than once.
    pub fn tier_fee(&self, threshold: u64) -> u64 {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.threshold == threshold)
            .map(|tier| tier.fee)
            .unwrap_or(0)
    }

    /// Fee quote for a deposit amount: the smallest configured threshold at
    /// or above the amount answers, otherwise the fallback fee.
    ///
    /// The miss case shares its `u64::MAX` sentinel with a real tier at that
    /// threshold, so a `u64::MAX` tier whose fee is 0 also answers the
    /// fallback. Pinned by test, kept as-is.
    pub fn resolve_fee(&self, amount: u64) -> u64 {
        let mut best = u64::MAX;
        for tier in &self.tiers {
            if tier.threshold >= amount && tier.threshold < best {
                best = tier.threshold;
            }
        }
        let fee = self.tier_fee(best);
        if best == u64::MAX && fee == 0 {
            return self.fallback_fee;
        }
        fee
    }

    /// Validates an incoming deposit and answers `(fee, net)`.
    ///
    /// The fee must be known before the net amount exists, so the deposit
    /// path charges the flat fee currently configured as the fallback; the
    /// tier table backs `resolve_fee` quotes. An empty tier table with the
    /// flat fee as fallback is the single-fee configuration.
    pub fn deposit_accounting(&self, amount: u64) -> Result<(u64, u64)> {
        require!(!self.paused, ErrorCode::DepositsPaused);
        require!(amount > 0, ErrorCode::InvalidDeposit);
        let fee = self.fallback_fee;
        require!(amount > fee, ErrorCode::InvalidFee);
        Ok((fee, amount - fee))
    }

    pub fn record_deposit(&mut self, protocol_share: u64, net: u64) -> Result<()> {
        self.fee_earned = self
            .fee_earned
            .checked_add(protocol_share)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.deposits_count = self
            .deposits_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.deposits_volume = self
            .deposits_volume
            .checked_add(net)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Moves the whole accrued protocol fee balance into the claimed total
    /// and answers the amount to pay out.
    pub fn take_fee_earnings(&mut self) -> Result<u64> {
        let amount = self.fee_earned;
        require!(amount > 0, ErrorCode::InvalidBalance);
        self.fee_earned = 0;
        self.fee_claimed = self
            .fee_claimed
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const SOL: u64 = 1_000_000_000;

    fn test_pool() -> Pool {
        Pool {
            owner: Pubkey::new_unique(),
            fee_collector: Pubkey::new_unique(),
            fallback_fee: 0,
            tiers: Vec::new(),
            common_ref_bips: 0,
            fee_earned: 0,
            fee_claimed: 0,
            deposits_count: 0,
            deposits_volume: 0,
            paused: false,
            bump: 255,
        }
    }

    fn tiered_pool() -> Pool {
        let mut pool = test_pool();
        pool.replace_schedule(
            &[SOL / 100, SOL / 10, SOL, 10 * SOL],
            &[150_000, 200_000, 300_000, 400_000],
            500_000,
        )
        .unwrap();
        pool
    }

    #[test]
    fn resolves_smallest_covering_threshold() {
        let pool = tiered_pool();
        assert_eq!(pool.resolve_fee(SOL / 1_000), 150_000);
        assert_eq!(pool.resolve_fee(SOL / 20), 200_000);
        assert_eq!(pool.resolve_fee(SOL), 300_000);
        assert_eq!(pool.resolve_fee(SOL + 4 * SOL / 10), 400_000);
        assert_eq!(pool.resolve_fee(102 * SOL), 500_000);
    }

    #[test]
    fn empty_table_always_answers_fallback() {
        let mut pool = test_pool();
        pool.fallback_fee = 42;
        assert_eq!(pool.resolve_fee(0), 42);
        assert_eq!(pool.resolve_fee(1), 42);
        assert_eq!(pool.resolve_fee(u64::MAX), 42);
    }

    #[test]
    fn replacement_discards_absent_thresholds() {
        let mut pool = tiered_pool();
        assert_eq!(pool.tier_fee(SOL / 100), 150_000);

        pool.replace_schedule(&[2 * SOL], &[250_000], 600_000).unwrap();

        // A threshold only present in the first table keeps no fee entry.
        assert_eq!(pool.tier_fee(SOL / 100), 0);
        assert_eq!(pool.tier_fee(2 * SOL), 250_000);
        // Resolution reflects the new table immediately.
        assert_eq!(pool.resolve_fee(SOL / 1_000), 250_000);
        assert_eq!(pool.resolve_fee(3 * SOL), 600_000);
    }

    #[test]
    fn second_replacement_forgets_first_table_entirely() {
        let mut pool = test_pool();
        pool.replace_schedule(&[SOL], &[111], 500).unwrap();
        pool.replace_schedule(&[2 * SOL], &[222], 500).unwrap();
        assert_eq!(pool.tier_fee(SOL), 0);
    }

    #[test]
    fn duplicate_threshold_takes_later_fee() {
        let mut pool = test_pool();
        pool.replace_schedule(&[SOL, SOL], &[111, 222], 500).unwrap();
        assert_eq!(pool.tier_fee(SOL), 222);
        assert_eq!(pool.resolve_fee(SOL / 2), 222);
    }

    #[test]
    fn tier_at_max_threshold_with_zero_fee_falls_back() {
        // Pinned behavior: a tier at u64::MAX whose fee is 0 shares the miss
        // sentinel, so the fallback answers despite the matching threshold.
        let mut pool = test_pool();
        pool.replace_schedule(&[u64::MAX], &[0], 777).unwrap();
        assert_eq!(pool.resolve_fee(123), 777);

        pool.replace_schedule(&[u64::MAX], &[999], 777).unwrap();
        assert_eq!(pool.resolve_fee(123), 999);
    }

    #[test]
    fn schedule_length_mismatch_is_rejected() {
        let mut pool = test_pool();
        let err = pool.replace_schedule(&[1, 2], &[10], 0).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::IncorrectFeeValues));
        // Nothing was written.
        assert!(pool.tiers.is_empty());
    }

    #[test]
    fn oversized_schedule_is_rejected() {
        let mut pool = test_pool();
        let thresholds: Vec<u64> = (0..MAX_FEE_TIERS as u64 + 1).collect();
        let fees = vec![1u64; MAX_FEE_TIERS + 1];
        let err = pool
            .replace_schedule(&thresholds, &fees, 0)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::TooManyFeeTiers));
    }

    #[test]
    fn deposit_charges_current_flat_fee_not_a_tier() {
        let pool = tiered_pool();
        let (fee, net) = pool.deposit_accounting(SOL).unwrap();
        assert_eq!(fee, 500_000);
        assert_eq!(net, SOL - 500_000);
    }

    #[test]
    fn deposit_of_zero_is_rejected() {
        let pool = tiered_pool();
        let err = pool.deposit_accounting(0).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidDeposit));
    }

    #[test]
    fn deposit_equal_to_fee_is_rejected() {
        let pool = tiered_pool();
        let err = pool.deposit_accounting(500_000).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidFee));
    }

    #[test]
    fn deposit_one_above_fee_nets_one() {
        let pool = tiered_pool();
        let (fee, net) = pool.deposit_accounting(500_001).unwrap();
        assert_eq!(fee, 500_000);
        assert_eq!(net, 1);
    }

    #[test]
    fn paused_pool_rejects_deposits() {
        let mut pool = tiered_pool();
        pool.paused = true;
        let err = pool.deposit_accounting(SOL).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::DepositsPaused));
    }

    #[test]
    fn pause_gates_deposits_only() {
        let mut pool = tiered_pool();
        pool.record_deposit(500_000, SOL).unwrap();
        pool.paused = true;

        let err = pool.deposit_accounting(SOL).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::DepositsPaused));
        // Claims are never blocked by the pause flag.
        assert_eq!(pool.take_fee_earnings().unwrap(), 500_000);
    }

    #[test]
    fn deposit_updates_pool_totals() {
        let mut pool = tiered_pool();
        pool.record_deposit(500_000, SOL - 500_000).unwrap();
        pool.record_deposit(500_000, 2 * SOL - 500_000).unwrap();
        assert_eq!(pool.fee_earned, 1_000_000);
        assert_eq!(pool.deposits_count, 2);
        assert_eq!(pool.deposits_volume, 3 * SOL - 1_000_000);
    }

    #[test]
    fn fee_earnings_claim_is_not_repeatable() {
        let mut pool = tiered_pool();
        pool.record_deposit(500_000, SOL).unwrap();

        assert_eq!(pool.take_fee_earnings().unwrap(), 500_000);
        assert_eq!(pool.fee_earned, 0);
        assert_eq!(pool.fee_claimed, 500_000);

        let err = pool.take_fee_earnings().unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidBalance));
        assert_eq!(pool.fee_claimed, 500_000);
    }
}
