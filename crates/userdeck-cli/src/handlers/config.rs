use anyhow::{Context, Result, bail};
use userdeck_runtime::Config;

use crate::args::hints::cmd;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Guidance, Renderer, StatusBadge, ViewMode,
};

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let content = present_config(config, &ctx.config_path(), ctx.input());

    let mut result = CommandResultViewModel::new(content);
    if !ctx.config_path().exists() {
        result = result
            .with_suggestion(Guidance::new("Write these defaults to disk").with_command(cmd::CONFIG_INIT));
    }

    ConsoleRenderer::new(ctx.is_json(), ViewMode::default()).render(result)
}

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let existed = path.exists();

    if existed && !force {
        bail!(
            "{} already exists; use --force to overwrite it",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "config written");

    let label = if existed {
        "Config overwritten with defaults"
    } else {
        "Config created"
    };
    let result = CommandResultViewModel::new(present_config_init(&path, existed))
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Review the settings").with_command(cmd::CONFIG_SHOW));

    ConsoleRenderer::new(ctx.is_json(), ViewMode::default()).render(result)
}
