//! Command-line interface for band_of_the_hour.

use clap::Parser;

/// Band of the Hour - seat marching band musicians by weight
#[derive(Parser, Debug)]
#[command(name = "band_of_the_hour")]
#[command(about = "Interactive stadium roster for a marching band", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with the row layout; skips the setup questions
    #[arg(short, long)]
    pub layout: Option<std::path::PathBuf>,
}
