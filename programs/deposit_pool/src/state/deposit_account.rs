use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Per-depositor ledger record, created on first deposit and never deleted.
#[account]
#[derive(InitSpace)]
pub struct DepositAccount {
    pub pool: Pubkey,
    pub owner: Pubkey,

    /// Withdrawable remainder net of fees. Only grows via deposits and is
    /// zeroed in full by withdraw.
    pub balance: u64,

    pub deposits_count: u64,
    pub deposits_volume: u64,

    pub bump: u8,
}

impl DepositAccount {
    /// Credits a net deposit and answers the new balance.
    pub fn record_deposit(&mut self, net: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(net)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.deposits_count = self
            .deposits_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.deposits_volume = self
            .deposits_volume
            .checked_add(net)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(self.balance)
    }

    /// Zeroes the balance and answers the amount to pay out.
    pub fn take_balance(&mut self) -> Result<u64> {
        let amount = self.balance;
        require!(amount > 0, ErrorCode::InvalidBalance);
        self.balance = 0;
        Ok(amount)
    }
}
