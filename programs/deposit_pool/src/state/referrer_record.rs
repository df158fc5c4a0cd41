use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Per-referrer ledger record, created on the first referred deposit or the
/// first rate override and never deleted.
#[account]
#[derive(InitSpace)]
pub struct ReferrerRecord {
    pub pool: Pubkey,
    pub referrer: Pubkey,

    /// `None` means the pool's common rate applies.
    pub bips_override: Option<u16>,

    /// Number of referred deposits credited to this referrer.
    pub tx_count: u64,

    /// Accrued but unclaimed share. Claim moves the whole amount into
    /// `claimed` and zeroes this.
    pub earned: u64,
    pub claimed: u64,

    pub bump: u8,
}

impl ReferrerRecord {
    pub fn effective_bips(&self, common_bips: u16) -> u16 {
        self.bips_override.unwrap_or(common_bips)
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.earned = self
            .earned
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.tx_count = self
            .tx_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Moves the whole accrued share into the claimed total and answers the
    /// amount to pay out.
    pub fn take_earnings(&mut self) -> Result<u64> {
        let amount = self.earned;
        require!(amount > 0, ErrorCode::InvalidRefEarnings);
        self.earned = 0;
        self.claimed = self
            .claimed
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn test_record() -> ReferrerRecord {
        ReferrerRecord {
            pool: Pubkey::new_unique(),
            referrer: Pubkey::new_unique(),
            bips_override: None,
            tx_count: 0,
            earned: 0,
            claimed: 0,
            bump: 255,
        }
    }

    #[test]
    fn common_rate_applies_without_override() {
        let record = test_record();
        assert_eq!(record.effective_bips(1_000), 1_000);
    }

    #[test]
    fn override_replaces_common_rate() {
        let mut record = test_record();
        record.bips_override = Some(2_500);
        assert_eq!(record.effective_bips(1_000), 2_500);
        // An explicit zero override silences the common rate too.
        record.bips_override = Some(0);
        assert_eq!(record.effective_bips(1_000), 0);
    }

    #[test]
    fn credited_share_accrues_with_tx_count() {
        let mut record = test_record();
        record.credit(30_000).unwrap();
        assert_eq!(record.earned, 30_000);
        assert_eq!(record.tx_count, 1);

        record.credit(12_345).unwrap();
        assert_eq!(record.earned, 42_345);
        assert_eq!(record.tx_count, 2);
    }

    #[test]
    fn referred_deposit_credits_the_common_rate_share() {
        // 10% common rate on a 0.0003 SOL fee.
        let mut record = test_record();
        let bips = record.effective_bips(1_000);
        let (protocol_share, referrer_share) =
            crate::helpers::split_fee(300_000, bips).unwrap();
        record.credit(referrer_share).unwrap();

        assert_eq!(referrer_share, 30_000);
        assert_eq!(protocol_share, 270_000);
        assert_eq!(record.earned, 30_000);
        assert_eq!(record.tx_count, 1);
    }

    #[test]
    fn earnings_claim_is_not_repeatable() {
        let mut record = test_record();
        record.credit(30_000).unwrap();

        assert_eq!(record.take_earnings().unwrap(), 30_000);
        assert_eq!(record.earned, 0);
        assert_eq!(record.claimed, 30_000);
        assert_eq!(record.tx_count, 1);

        let err = record.take_earnings().unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidRefEarnings));
    }
}
