pub mod config;
pub mod error;
pub mod loader;

pub use config::{ApiConfig, Config, resolve_workspace_path};
pub use error::{Error, Result};
pub use loader::{SourceOptions, build_source, fetch_blocking, spawn_fetch};
