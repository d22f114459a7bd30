pub mod assessment;
pub mod config;
pub mod error;
pub mod http;
pub mod import;
pub mod prediction;
pub mod quality;
pub mod telemetry;
