pub mod display;
pub mod engine;
pub mod session;
pub mod units;
