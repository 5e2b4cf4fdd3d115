use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_export, present_gallery};
use crate::presentation::views::GalleryPage;
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Renderer, StatusBadge, ViewMode,
};

pub fn handle(ctx: &ExecutionContext, output: PathBuf, search: Option<String>) -> Result<()> {
    let mut controller = ctx.load_directory(search.as_deref())?;
    let gallery = present_gallery(&mut controller);

    let html = GalleryPage::new(&gallery).to_string();
    std::fs::write(&output, &html)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(output = %output.display(), cards = gallery.grid.cards.len(), "gallery exported");

    let content = present_export(&output, gallery.grid.cards.len(), html.len());
    let badge = StatusBadge::success(format!("Exported {} card(s)", content.cards));

    ConsoleRenderer::new(ctx.is_json(), ViewMode::default())
        .render(CommandResultViewModel::new(content).with_badge(badge))
}
