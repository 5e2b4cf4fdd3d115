use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    model: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(model: &'a ConfigViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.model;
        let origin = if m.exists { "" } else { " (not written, defaults)" };

        writeln!(f, "Config file:   {}{}", m.path.display(), origin)?;
        writeln!(f, "Base URL:      {}", m.base_url)?;
        writeln!(f, "Results:       {}", m.results)?;
        writeln!(f, "Nationalities: {}", m.nationalities.join(","))?;
        match m.timeout_secs {
            Some(secs) => writeln!(f, "Timeout:       {}s", secs)?,
            None => writeln!(f, "Timeout:       none")?,
        }
        if let Some(input) = &m.input {
            writeln!(f, "Input file:    {}", input.display())?;
        }
        Ok(())
    }
}

pub struct ConfigInitView<'a> {
    model: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(model: &'a ConfigInitViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Path: {}", self.model.path.display())
    }
}
