use anyhow::Result;
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;

/// Whether `browse` can take over the terminal
pub fn can_use_tui(ctx: &ExecutionContext) -> bool {
    !ctx.is_json() && std::io::stdout().is_terminal()
}

pub fn handle(ctx: &ExecutionContext, search: Option<String>) -> Result<()> {
    if !can_use_tui(ctx) {
        tracing::info!("stdout is not an interactive terminal; printing the grid instead");
        return super::list::handle(ctx, search, false);
    }

    let rx = ctx.spawn_fetch()?;
    TuiRenderer::new(search).run(rx)
}
