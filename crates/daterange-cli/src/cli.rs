//! Command handlers wiring parsed arguments to the core library.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use daterange_core::{previews, PatternFormatter, RangeInput, StrftimeFormatter, StyleProfile};
use jiff::Zoned;
use log::debug;

use crate::args::RenderArgs;

/// CLI handler holding any custom profiles loaded from a profiles file.
pub struct Cli {
    custom_profiles: HashMap<String, StyleProfile>,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(custom_profiles: HashMap<String, StyleProfile>) -> Self {
        Self { custom_profiles }
    }

    /// Render a range and print it on stdout.
    pub fn render(&self, args: &RenderArgs) -> Result<()> {
        let start: Zoned = args
            .start
            .parse()
            .with_context(|| format!("Failed to parse start instant '{}'", args.start))?;
        let end: Zoned = args
            .end
            .parse()
            .with_context(|| format!("Failed to parse end instant '{}'", args.end))?;

        let params = args.to_params();
        // Custom profiles shadow built-in names; otherwise fall back to
        // the built-in lookup.
        let profile = match self.custom_profiles.get(&params.profile) {
            Some(custom) => custom.clone(),
            None => params
                .profile()
                .with_context(|| format!("Failed to resolve profile '{}'", params.profile))?,
        };
        let formatter = params
            .formatter()
            .context("Failed to resolve timezone override")?;

        debug!("rendering with profile '{}'", profile.label);

        let input = RangeInput {
            start: &start,
            end: &end,
            profile: &profile,
            separator: &params.separator,
        };
        let rendered =
            daterange_core::render(&input, |instant, pattern| formatter.format(instant, pattern))
                .context("Failed to render range")?;

        println!("{rendered}");
        Ok(())
    }

    /// List built-in and custom profiles with a sample rendering of the
    /// current moment.
    pub fn profiles(&self) -> Result<()> {
        let now = Zoned::now();
        let formatter = StrftimeFormatter::new();

        for (label, sample) in
            previews(&now, &formatter).context("Failed to preview built-in profiles")?
        {
            println!("{label} ({sample})");
        }

        let mut names: Vec<&String> = self.custom_profiles.keys().collect();
        names.sort();
        for name in names {
            let profile = &self.custom_profiles[name];
            match profile
                .same_instant
                .as_deref()
                .map(|pattern| formatter.format(&now, pattern))
            {
                Some(Ok(sample)) => println!("{} ({sample})", profile.label),
                _ => println!("{}", profile.label),
            }
        }
        Ok(())
    }
}

/// Load a map of named profiles from a JSON file.
pub fn load_profiles(path: &Path) -> Result<HashMap<String, StyleProfile>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles file '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse profiles file '{}'", path.display()))
}
