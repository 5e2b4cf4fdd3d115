use anyhow::Result;

use crate::args::hints::cmd;
use crate::context::ExecutionContext;
use crate::presentation::view_models::GuidanceViewModel;
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Guidance, Renderer, ViewMode,
};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_exists = ctx.config_path().exists();
    let content = GuidanceViewModel {
        data_dir: ctx.data_dir().to_path_buf(),
        config_exists,
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Write a config.toml to change the API or batch size")
                .with_command(cmd::CONFIG_INIT),
        );
    }

    ConsoleRenderer::new(ctx.is_json(), ViewMode::default()).render(result)
}
