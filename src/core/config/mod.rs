pub mod config;

pub use config::{DemoConfig, DiagConfig};
