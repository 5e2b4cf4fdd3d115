use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use userdeck_engine::DirectoryController;
use userdeck_runtime::{Config, SourceOptions};
use userdeck_types::UserRecord;

use crate::args::OutputFormat;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    api_url: Option<String>,
    source: SourceOptions,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        api_url: Option<String>,
        input: Option<PathBuf>,
        format: OutputFormat,
    ) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            api_url,
            source: SourceOptions { input },
            format,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn input(&self) -> Option<&Path> {
        self.source.input.as_deref()
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// config.toml with command-line overrides applied
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let path = self.config_path();
            let mut config = Config::load_from(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            if let Some(url) = &self.api_url {
                config
                    .override_base_url(url.as_str())
                    .context("Invalid --api-url")?;
            }
            Ok(config)
        })
    }

    /// Fetch once and build a controller, filtered by `search` when given.
    ///
    /// A failed fetch leaves the directory unloaded and empty; a rejected
    /// search leaves the full grid. Both are only logged.
    pub fn load_directory(&self, search: Option<&str>) -> Result<DirectoryController> {
        let config = self.config()?;
        let source = userdeck_runtime::build_source(&config.api, &self.source)?;
        let users = userdeck_runtime::fetch_blocking(source.as_ref(), &config.api.fetch_request())?;

        let mut controller = match users {
            Some(users) => DirectoryController::with_collection(users),
            None => DirectoryController::new(),
        };
        if let Some(query) = search {
            // Rejection is logged by the controller; the full grid stays
            if let Err(err) = controller.apply_filter(query) {
                tracing::debug!(error = %err, "search ignored");
            }
        }
        Ok(controller)
    }

    /// Start the fetch on a helper thread
    pub fn spawn_fetch(&self) -> Result<Receiver<Vec<UserRecord>>> {
        let config = self.config()?;
        let source = userdeck_runtime::build_source(&config.api, &self.source)?;
        Ok(userdeck_runtime::spawn_fetch(
            source,
            config.api.fetch_request(),
        ))
    }
}
