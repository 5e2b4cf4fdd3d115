use anyhow::Result;

use crate::args::hints::{cmd, fmt};
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_grid;
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Guidance, Renderer, ViewMode,
};

pub fn handle(ctx: &ExecutionContext, search: Option<String>, compact: bool) -> Result<()> {
    let controller = ctx.load_directory(search.as_deref())?;
    let grid = present_grid(&controller);

    let suggestion = match grid.cards.first() {
        Some(card) => Some(
            Guidance::new("Open a card's detail view").with_command(fmt::show(card.number)),
        ),
        None if grid.placeholder.is_some() => {
            Some(Guidance::new("Show everyone again").with_command(cmd::LIST))
        }
        None => None,
    };

    let mut result = CommandResultViewModel::new(grid);
    if let Some(guide) = suggestion {
        result = result.with_suggestion(guide);
    }

    let view_mode = if compact {
        ViewMode::Compact
    } else {
        ViewMode::Standard
    };
    ConsoleRenderer::new(ctx.is_json(), view_mode).render(result)
}
