use anchor_lang::prelude::*;

/// Event emitted when the fee tier table is replaced
#[event]
pub struct FeeScheduleChangedEvent {
    /// New tier thresholds, in insertion order
    pub thresholds: Vec<u64>,

    /// Fee per threshold, same order
    pub fees: Vec<u64>,

    /// New fallback fee
    pub fallback_fee: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when only the fallback fee is replaced
#[event]
pub struct FallbackFeeChangedEvent {
    pub fallback_fee: u64,
    pub timestamp: i64,
}

/// Event emitted when the fee collector role is handed over
#[event]
pub struct FeeCollectorChangedEvent {
    pub fee_collector: Pubkey,
    pub timestamp: i64,
}

/// Event emitted on every successful deposit
#[event]
pub struct DepositEvent {
    pub depositor: Pubkey,

    /// Fee portion kept by the protocol after any referral split
    pub protocol_share: u64,

    /// Net amount credited to the depositor, after the fee
    pub amount: u64,

    /// Depositor balance after this deposit
    pub balance: u64,

    /// `Pubkey::default()` means no referrer
    pub referrer: Pubkey,

    /// Fee portion credited to the referrer
    pub referrer_share: u64,

    pub timestamp: i64,
}

/// Event emitted when a depositor withdraws their full balance
#[event]
pub struct WithdrawEvent {
    pub depositor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the fee collector claims accrued protocol fees
#[event]
pub struct FeeEarningsClaimedEvent {
    pub fee_collector: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the default referral share rate changes
#[event]
pub struct CommonReferralRateChangedEvent {
    pub bips: u16,
    pub timestamp: i64,
}

/// Event emitted when a single referrer's share rate override changes
#[event]
pub struct ReferralRateChangedEvent {
    pub referrer: Pubkey,
    pub bips: u16,
    pub timestamp: i64,
}

/// Event emitted when a batch of referrer share rate overrides changes
#[event]
pub struct ReferralRatesBatchChangedEvent {
    pub referrers: Vec<Pubkey>,
    pub bips: u16,
    pub timestamp: i64,
}

/// Event emitted when a referrer claims accrued earnings
#[event]
pub struct ReferralEarningsClaimedEvent {
    pub referrer: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
