pub const BPS_DENOM: u64 = 10_000;

// The tier table lives inside the pool account, so the schedule is bounded.
pub const MAX_FEE_TIERS: usize = 16;
