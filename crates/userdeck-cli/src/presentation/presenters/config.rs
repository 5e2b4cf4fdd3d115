use std::path::Path;

use userdeck_runtime::Config;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub fn present_config(config: &Config, path: &Path, input: Option<&Path>) -> ConfigViewModel {
    ConfigViewModel {
        path: path.to_path_buf(),
        exists: path.exists(),
        base_url: config.api.base_url.clone(),
        results: config.api.results,
        nationalities: config.api.nationalities.clone(),
        timeout_secs: config.api.timeout_secs,
        input: input.map(Path::to_path_buf),
    }
}

pub fn present_config_init(path: &Path, overwritten: bool) -> ConfigInitViewModel {
    ConfigInitViewModel {
        path: path.to_path_buf(),
        overwritten,
    }
}
