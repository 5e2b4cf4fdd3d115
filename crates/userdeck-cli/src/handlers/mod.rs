pub mod browse;
pub mod config;
pub mod export;
pub mod guidance;
pub mod list;
pub mod show;
