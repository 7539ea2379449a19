//! Documentation page generation command.

use anyhow::{Context, Result};
use docbundle_static::{BuildConfig, StaticBuilder};

/// Run the generate command with the shipped document list.
pub fn run() -> Result<()> {
    run_with(BuildConfig::default())
}

/// Run the generate command with an explicit configuration.
pub fn run_with(config: BuildConfig) -> Result<()> {
    let result = StaticBuilder::new(config)
        .build()
        .context("Failed to generate documentation page")?;

    if result.missing > 0 {
        tracing::warn!(
            "{} of {} documents were not found and contain a placeholder",
            result.missing,
            result.sections
        );
    }

    tracing::info!(
        "Documentation generated in {} ({} sections, {}ms)",
        result.output_path.display(),
        result.sections,
        result.duration_ms
    );
    tracing::info!("Open the file in your browser:");
    tracing::info!("   open {}", result.output_path.display());

    Ok(())
}
