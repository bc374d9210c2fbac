//! Daterange CLI application
//!
//! Command-line interface for rendering date ranges without redundant
//! repetition of shared calendar fields.

mod args;
mod cli;

use std::collections::HashMap;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::{load_profiles, Cli};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let Args { profiles_file, command } = Args::parse();

    let custom_profiles = match profiles_file {
        Some(path) => load_profiles(&path)?,
        None => HashMap::new(),
    };

    info!("Daterange started");

    let cli = Cli::new(custom_profiles);
    match command {
        Commands::Render(render_args) => cli.render(&render_args),
        Commands::Profiles => cli.profiles(),
    }
}
