pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

pub use config::BotConfig;
pub use errors::{Result, ServiceError};
pub use telemetry::init_tracing;
pub use types::Submission;
