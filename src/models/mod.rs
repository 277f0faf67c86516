pub mod event;
pub mod metrics;
pub mod product;
pub mod production_log;
pub mod scenario;
pub mod schedule;
pub mod shift;
