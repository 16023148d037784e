pub mod ball;
pub mod config;
