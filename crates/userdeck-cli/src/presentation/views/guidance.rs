use std::fmt;

use crate::args::hints::cmd;
use crate::presentation::view_models::GuidanceViewModel;

pub struct GuidanceView<'a> {
    model: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(model: &'a GuidanceViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "userdeck - Random user directory\n")?;

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  {:<34}# Print the card grid", cmd::LIST)?;
        writeln!(f, "  {:<34}# Filter by first or last name", cmd::LIST_SEARCH)?;
        writeln!(f, "  {:<34}# Open a card's detail view", cmd::SHOW)?;
        writeln!(f, "  {:<34}# Step to the next card", cmd::SHOW_STEP)?;
        writeln!(f, "  {:<34}# Interactive terminal UI", cmd::BROWSE)?;
        writeln!(f, "  {:<34}# Static HTML gallery", cmd::EXPORT)?;
        writeln!(f)?;

        writeln!(f, "Data directory: {}", self.model.data_dir.display())?;
        if !self.model.config_exists {
            writeln!(f, "No config.toml yet; built-in defaults are used.")?;
        }
        Ok(())
    }
}
