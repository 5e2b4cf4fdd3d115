use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    view_mode: ViewMode,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, view_mode: ViewMode) -> Self {
        Self {
            json_mode,
            view_mode,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.view_mode))?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
