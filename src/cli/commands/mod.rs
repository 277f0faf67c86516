pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod product;
pub mod record;
pub mod scenario;
pub mod schedule;
pub mod select;
pub mod setup;
pub mod status;
pub mod trend;
