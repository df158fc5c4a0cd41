pub mod deposit_account;
pub mod pool;
pub mod referrer_record;

pub use deposit_account::*;
pub use pool::*;
pub use referrer_record::*;
