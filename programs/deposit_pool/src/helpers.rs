use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    state::{Pool, ReferrerRecord},
};

pub fn require_owner(owner: &Signer<'_>, pool: &Account<Pool>) -> Result<()> {
    require_keys_eq!(owner.key(), pool.owner, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_fee_collector(collector: &Signer<'_>, pool: &Account<Pool>) -> Result<()> {
    require_keys_eq!(
        collector.key(),
        pool.fee_collector,
        ErrorCode::NotFeeCollector
    );
    Ok(())
}

pub fn mul_bps(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// Splits a fee into (protocol share, referrer share). The referrer share is
/// floored, so the truncation remainder always stays with the protocol and
/// the two shares sum to the fee exactly.
pub fn split_fee(fee: u64, bips: u16) -> Result<(u64, u64)> {
    let referrer_share = mul_bps(fee, bips as u64)?;
    let protocol_share = fee
        .checked_sub(referrer_share)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok((protocol_share, referrer_share))
}

/// Moves lamports out of the pool account by direct lamport manipulation.
/// Refuses to take the pool below its rent-exemption floor.
pub fn pay_from_pool<'info>(
    pool: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(pool.data_len());
    let remaining = pool
        .lamports()
        .checked_sub(amount)
        .ok_or_else(|| error!(ErrorCode::InsufficientPoolBalance))?;
    require!(remaining >= rent_floor, ErrorCode::InsufficientPoolBalance);

    **pool.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

/// Creates an empty referrer record at a derived address. The record PDA
/// signs its own creation via `signer_seeds`.
pub fn create_referrer_record<'info>(
    payer: &Signer<'info>,
    record: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let space = 8 + ReferrerRecord::INIT_SPACE;
    let lamports = Rent::get()?.minimum_balance(space);
    system_program::create_account(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            CreateAccount {
                from: payer.to_account_info(),
                to: record.clone(),
            },
            &[signer_seeds],
        ),
        lamports,
        space as u64,
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_shares_sum_to_fee_exactly() {
        // 10% of a 0.0003 SOL fee.
        let (protocol, referrer) = split_fee(300_000, 1_000).unwrap();
        assert_eq!(referrer, 30_000);
        assert_eq!(protocol, 270_000);
        assert_eq!(protocol + referrer, 300_000);
    }

    #[test]
    fn split_truncation_remainder_stays_with_protocol() {
        // 333 * 2500 / 10000 = 83.25, floored to 83.
        let (protocol, referrer) = split_fee(333, 2_500).unwrap();
        assert_eq!(referrer, 83);
        assert_eq!(protocol, 250);
        assert_eq!(protocol + referrer, 333);
    }

    #[test]
    fn split_at_full_bips_gives_whole_fee_to_referrer() {
        let (protocol, referrer) = split_fee(1_000, 10_000).unwrap();
        assert_eq!(referrer, 1_000);
        assert_eq!(protocol, 0);
    }

    #[test]
    fn split_at_zero_bips_gives_whole_fee_to_protocol() {
        let (protocol, referrer) = split_fee(1_000, 0).unwrap();
        assert_eq!(referrer, 0);
        assert_eq!(protocol, 1_000);
    }

    #[test]
    fn mul_bps_survives_large_values() {
        assert_eq!(mul_bps(u64::MAX, 10_000).unwrap(), u64::MAX);
        assert_eq!(mul_bps(u64::MAX, 0).unwrap(), 0);
    }
}
