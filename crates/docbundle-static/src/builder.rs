//! Single-page documentation builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assets::AssetPipeline;
use crate::entries::{default_entries, DocEntry};
use crate::escape::escape_for_script;
use crate::source::read_source;
use crate::templates::{
    join_nav_links, join_sections, RenderedSection, SiteInfo, Skeleton, TemplateEngine,
};

/// Configuration for building the documentation page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Documents to bundle, in page order
    pub entries: Vec<DocEntry>,

    /// Output file, overwritten on every build
    pub output_path: PathBuf,

    /// Page chrome
    pub site: SiteInfo,

    /// Custom page skeleton; must contain both markers
    pub skeleton: Option<String>,

    /// Minify the inline stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            output_path: PathBuf::from("docs/documentacion-completa.html"),
            site: SiteInfo::default(),
            skeleton: None,
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sections written
    pub sections: usize,

    /// Sections whose source file could not be read
    pub missing: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output file
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Page skeleton has no {0} marker")]
    MissingMarker(&'static str),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// The assembled page before it is written.
#[derive(Debug)]
pub struct RenderedPage {
    /// Complete HTML document
    pub html: String,

    /// Sections in page order
    pub sections: Vec<RenderedSection>,
}

/// Documentation page builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the page and write it to the output path.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        tracing::info!("Generating documentation...");

        let page = self.render()?;
        write_output(&self.config.output_path, &page.html)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            sections: page.sections.len(),
            missing: page.sections.iter().filter(|s| s.missing).count(),
            duration_ms: duration.as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }

    /// Assemble the full page in memory.
    pub fn render(&self) -> Result<RenderedPage, BuildError> {
        let sections = self.collect_sections();

        let nav_links = self
            .templates
            .render_nav_links(&sections)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let fragments = self
            .templates
            .render_sections(&sections)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let skeleton = self.skeleton()?;
        let html = skeleton.fill(&join_nav_links(&nav_links), &join_sections(&fragments))?;

        Ok(RenderedPage { html, sections })
    }

    /// Read and escape every entry. Missing files still produce a section.
    fn collect_sections(&self) -> Vec<RenderedSection> {
        self.config
            .entries
            .iter()
            .map(|entry| {
                let source = read_source(&entry.path);
                if !source.missing {
                    tracing::info!("  Adding: {}", entry.title);
                }

                RenderedSection {
                    id: entry.id.clone(),
                    title: entry.title.clone(),
                    body: escape_for_script(&source.text),
                    missing: source.missing,
                }
            })
            .collect()
    }

    /// The configured skeleton, or the default one rendered from the site info.
    fn skeleton(&self) -> Result<Skeleton, BuildError> {
        if let Some(ref skeleton) = self.config.skeleton {
            return Ok(Skeleton::new(skeleton.clone()));
        }

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };

        self.templates
            .render_skeleton(&self.config.site, &css)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }
}

/// Write `html` to `path`, creating parent directories and replacing any previous file.
pub fn write_output(path: &Path, html: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
    }

    fs::write(path, html).map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}
