pub mod claim_fee_earnings;
pub mod claim_referral_earnings;
pub mod deposit;
pub mod deposit_with_referrer;
pub mod initialize_pool;
pub mod pause;
pub mod set_common_referral_rate;
pub mod set_fallback_fee;
pub mod set_fee_collector;
pub mod set_fee_schedule;
pub mod set_referral_rate;
pub mod set_referral_rates_batch;
pub mod unpause;
pub mod withdraw;

pub use claim_fee_earnings::*;
pub use claim_referral_earnings::*;
pub use deposit::*;
pub use deposit_with_referrer::*;
pub use initialize_pool::*;
pub use pause::*;
pub use set_common_referral_rate::*;
pub use set_fallback_fee::*;
pub use set_fee_collector::*;
pub use set_fee_schedule::*;
pub use set_referral_rate::*;
pub use set_referral_rates_batch::*;
pub use unpause::*;
pub use withdraw::*;
