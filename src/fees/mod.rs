mod errors;
mod fee_engine;
mod schedule;

pub use errors::FeeError;
pub use fee_engine::{FeeEngine, Quote};
pub use schedule::FeeSchedule;
