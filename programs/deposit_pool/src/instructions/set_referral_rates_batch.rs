use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    events::ReferralRatesBatchChangedEvent,
    helpers::{create_referrer_record, require_owner},
    state::{Pool, ReferrerRecord},
};

/// Applies one share-rate override to a whole batch of referrers.
///
/// remaining_accounts:
/// - One writable referrer-record PDA per entry of `referrers`, same order.
///   Records missing on chain are created here, owner pays the rent.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetReferralRatesBatch<'info>>,
    referrers: Vec<Pubkey>,
    bips: u16,
) -> Result<()> {
    let clock = Clock::get()?;
    require_owner(&ctx.accounts.owner, &ctx.accounts.pool)?;
    require!((bips as u64) <= BPS_DENOM, ErrorCode::InvalidRefBips);
    require!(
        referrers.len() == ctx.remaining_accounts.len(),
        ErrorCode::InvalidReferrerRecord
    );

    let pool_key = ctx.accounts.pool.key();

    for (referrer, record_info) in referrers.iter().zip(ctx.remaining_accounts.iter()) {
        let (expected, bump) = Pubkey::find_program_address(
            &[b"referrer", pool_key.as_ref(), referrer.as_ref()],
            &crate::ID,
        );
        require_keys_eq!(
            record_info.key(),
            expected,
            ErrorCode::InvalidReferrerRecord
        );
        require!(record_info.is_writable, ErrorCode::InvalidReferrerRecord);

        if record_info.data_is_empty() {
            create_referrer_record(
                &ctx.accounts.owner,
                record_info,
                &ctx.accounts.system_program,
                &[b"referrer", pool_key.as_ref(), referrer.as_ref(), &[bump]],
            )?;
            let record = ReferrerRecord {
                pool: pool_key,
                referrer: *referrer,
                bips_override: Some(bips),
                tx_count: 0,
                earned: 0,
                claimed: 0,
                bump,
            };
            let mut data = record_info.try_borrow_mut_data()?;
            record.try_serialize(&mut *data)?;
        } else {
            require_keys_eq!(
                *record_info.owner,
                crate::ID,
                ErrorCode::InvalidReferrerRecord
            );
            let mut data = record_info.try_borrow_mut_data()?;
            let mut record = ReferrerRecord::try_deserialize(&mut &data[..])?;
            require_keys_eq!(record.pool, pool_key, ErrorCode::InvalidReferrerRecord);
            require_keys_eq!(record.referrer, *referrer, ErrorCode::InvalidReferrerRecord);
            record.bips_override = Some(bips);
            record.try_serialize(&mut *data)?;
        }
    }

    msg!("Set {} referral overrides to {} bips", referrers.len(), bips);

    emit!(ReferralRatesBatchChangedEvent {
        referrers,
        bips,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetReferralRatesBatch<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.owner.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    pub system_program: Program<'info, System>,
}
