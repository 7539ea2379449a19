//! Single-page documentation assembler.
//!
//! Bundles an ordered list of Markdown files into one HTML document. Each
//! body is embedded as an escaped string literal and rendered in the browser
//! by the client-side Markdown and diagram libraries the page references.

pub mod assets;
pub mod builder;
pub mod entries;
pub mod escape;
pub mod source;
pub mod templates;

pub use builder::{write_output, BuildConfig, BuildError, BuildResult, RenderedPage, StaticBuilder};
pub use entries::{default_entries, DocEntry};
pub use escape::{decode_script_literal, escape_for_script};
pub use source::{missing_placeholder, read_source, SourceText};
pub use templates::{RenderedSection, SiteInfo};
