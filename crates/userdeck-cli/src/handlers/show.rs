use anyhow::{Context, Result, anyhow};
use userdeck_engine::CardKey;

use crate::args::Step;
use crate::args::hints::fmt;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_detail;
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Guidance, Renderer, ViewMode,
};

pub fn handle(
    ctx: &ExecutionContext,
    card: usize,
    search: Option<String>,
    steps: Vec<Step>,
) -> Result<()> {
    let mut controller = ctx.load_directory(search.as_deref())?;

    let key = CardKey::from_number(card).ok_or_else(|| anyhow!("Card numbers start at 1"))?;
    controller.select_card(key)?;

    for step in steps {
        controller.advance(step.into())?;
    }

    let detail = present_detail(&controller).context("No detail view is open")?;
    let (prev, next) = (detail.prev_number, detail.next_number);

    let result = CommandResultViewModel::new(detail)
        .with_suggestion(Guidance::new("Previous card").with_command(fmt::show(prev)))
        .with_suggestion(Guidance::new("Next card").with_command(fmt::show(next)));

    ConsoleRenderer::new(ctx.is_json(), ViewMode::default()).render(result)
}
