//! System startup, shutdown and tracing setup.

pub mod telemetry;
pub mod user_system;

pub use telemetry::*;
pub use user_system::*;
