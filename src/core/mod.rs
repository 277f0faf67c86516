pub mod adjust;
pub mod calculator;
pub mod log;
pub mod logic;
pub mod record;
pub mod scenario_io;
pub mod setup;
pub mod store;
