//! Fitness-tracker calculator: turns raw workout packages into distance,
//! average speed and calories, and formats a one-line report.

pub mod batch;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod kind;
pub mod packages;
pub mod report;
pub mod utils;
pub mod workout;
