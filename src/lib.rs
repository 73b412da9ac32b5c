pub mod cli;
pub mod error;
pub mod reminder;
pub mod shared;
pub mod telemetry;
