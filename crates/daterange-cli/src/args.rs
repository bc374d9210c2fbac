use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use daterange_core::RenderParams;

/// Main command-line interface for the daterange rendering tool
///
/// Renders a start/end instant pair as a human-readable range, dropping
/// the calendar fields the two endpoints share. Instants are given as
/// RFC 9557 strings carrying their own timezone, e.g.
/// `2024-06-01T10:00:00[America/New_York]` or
/// `2024-06-01T10:00:00+00:00[UTC]`.
#[derive(Parser)]
#[command(version, about, name = "dr")]
pub struct Args {
    /// Path to a JSON file of additional named style profiles
    #[arg(long, global = true)]
    pub profiles_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the daterange CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a date range
    #[command(alias = "r")]
    Render(RenderArgs),
    /// List available style profiles with a sample rendering
    #[command(alias = "p")]
    Profiles,
}

/// Arguments for the render command.
///
/// CLI wrapper around the core `RenderParams` configuration surface;
/// `to_params` performs the explicit conversion so clap concerns stay in
/// this layer.
#[derive(ClapArgs)]
pub struct RenderArgs {
    /// Start of the range
    pub start: String,

    /// End of the range
    pub end: String,

    /// Style profile to render with (built-in: long, short)
    #[arg(short, long, default_value = "long")]
    pub profile: String,

    /// Literal separator placed between the start and end text
    #[arg(short, long, default_value = "-")]
    pub separator: String,

    /// Format both endpoints in this timezone instead of their own
    #[arg(short, long)]
    pub timezone: Option<String>,
}

impl RenderArgs {
    /// Convert CLI arguments into core rendering parameters.
    pub fn to_params(&self) -> RenderParams {
        RenderParams {
            profile: self.profile.clone(),
            separator: self.separator.clone(),
            timezone_override: self.timezone.clone(),
        }
    }
}
