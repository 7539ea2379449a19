//! docbundle CLI - bundles the platform documentation into one HTML page.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "docbundle")]
#[command(about = "Bundle the platform Markdown documentation into a single HTML page")]
#[command(version)]
pub struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Fixed filter; the command reads no environment
    fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    commands::generate::run()
}
