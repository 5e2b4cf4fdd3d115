pub mod config;
pub mod directory;

pub use config::{present_config, present_config_init};
pub use directory::{present_detail, present_export, present_gallery, present_grid};
