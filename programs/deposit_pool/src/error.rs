use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Not the fee collector")]
    NotFeeCollector,
    #[msg("Invalid fee collector address")]
    InvalidCollector,
    #[msg("Deposits are paused")]
    DepositsPaused,
    #[msg("Invalid deposit")]
    InvalidDeposit,
    #[msg("Invalid fee")]
    InvalidFee,
    #[msg("Invalid balance")]
    InvalidBalance,
    #[msg("Invalid referrer")]
    InvalidReferrer,
    #[msg("Threshold and fee lists differ in length")]
    IncorrectFeeValues,
    #[msg("Too many fee tiers")]
    TooManyFeeTiers,
    #[msg("Invalid referral bips")]
    InvalidRefBips,
    #[msg("No referral earnings to claim")]
    InvalidRefEarnings,
    #[msg("Invalid referrer record")]
    InvalidReferrerRecord,
    #[msg("Insufficient pool balance")]
    InsufficientPoolBalance,
    #[msg("Math overflow")]
    MathOverflow,
}
