pub mod app;
pub mod core;

// Curated re-exports
pub use crate::app::driver::run_driver;
pub use crate::core::ball::Ball;
pub use crate::core::config::config::{DemoConfig, DiagConfig};
