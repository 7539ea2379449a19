//! Template engine for the bundled documentation page.
//!
//! The page is produced in two steps. The [`Skeleton`] (head, header, footer
//! and loader script) is rendered from [`SiteInfo`] and keeps one slot for the
//! navigation links and one for the sections; [`Skeleton::fill`] then replaces
//! each slot with the joined fragments.
//!
//! Custom skeletons mark their slots with the literal [`NAV_MARKER`] and
//! [`SECTIONS_MARKER`]. The rendered default skeleton uses HTML comment slots
//! instead, which autoescaped site text cannot produce.

use minijinja::{context, Environment};

use crate::assets::AssetPipeline;
use crate::builder::BuildError;

/// Where the navigation links go.
pub const NAV_MARKER: &str = "{nav_links}";

/// Where the sections go.
pub const SECTIONS_MARKER: &str = "{sections}";

const NAV_SLOT: &str = "<!--{nav_links}-->";
const SECTIONS_SLOT: &str = "<!--{sections}-->";

const NAV_SEPARATOR: &str = "\n            ";
const SECTION_SEPARATOR: &str = "\n        ";

/// Page chrome shown around the bundled documents.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteInfo {
    /// `lang` attribute of the document
    pub lang: String,
    /// Browser tab title
    pub title: String,
    /// Header heading
    pub heading: String,
    /// Header subtitle
    pub tagline: String,
    /// Footer lines; the first is emphasized
    pub footer: Vec<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            title: "Backstage GitOps Platform - Documentación Completa".to_string(),
            heading: "🚀 Backstage GitOps Platform".to_string(),
            tagline: "Documentación Completa - Arquitectura, Setup y Guías".to_string(),
            footer: vec![
                "Backstage GitOps Platform v1.0.0".to_string(),
                "Documentación generada automáticamente".to_string(),
                "Estado: ✅ Implementación Completa y Funcional".to_string(),
            ],
        }
    }
}

/// One document ready to be placed in the page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderedSection {
    /// Anchor id
    pub id: String,
    /// Navigation label
    pub title: String,
    /// Markdown source as a script-safe string literal
    pub body: String,
    /// Whether the body is the missing-file placeholder
    pub missing: bool,
}

/// A page skeleton together with the markers that locate its two slots.
#[derive(Debug, Clone)]
pub struct Skeleton {
    html: String,
    nav_marker: &'static str,
    sections_marker: &'static str,
}

impl Skeleton {
    /// Wrap a hand-written skeleton marked with [`NAV_MARKER`] and [`SECTIONS_MARKER`].
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            nav_marker: NAV_MARKER,
            sections_marker: SECTIONS_MARKER,
        }
    }

    /// Skeleton text, slots included.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace each slot once with the joined fragments.
    pub fn fill(&self, nav_links: &str, sections: &str) -> Result<String, BuildError> {
        fill_markers(
            &self.html,
            (self.nav_marker, nav_links),
            (self.sections_marker, sections),
        )
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        env.add_template_owned("nav_link.html".to_string(), NAV_LINK_TEMPLATE.to_string())
            .expect("Failed to add nav link template");

        env.add_template_owned("section.html".to_string(), SECTION_TEMPLATE.to_string())
            .expect("Failed to add section template");

        Self { env }
    }

    /// Render the page skeleton with empty slots.
    pub fn render_skeleton(
        &self,
        site: &SiteInfo,
        stylesheet: &str,
    ) -> Result<Skeleton, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        let html = tmpl.render(context! {
            site => site,
            stylesheet => stylesheet,
            script => AssetPipeline::generate_js(),
            scripts => AssetPipeline::scripts(),
            stylesheets => AssetPipeline::stylesheets(),
            nav_slot => NAV_SLOT,
            sections_slot => SECTIONS_SLOT,
        })?;

        Ok(Skeleton {
            html,
            nav_marker: NAV_SLOT,
            sections_marker: SECTIONS_SLOT,
        })
    }

    /// Render one navigation link per section, in order.
    pub fn render_nav_links(
        &self,
        sections: &[RenderedSection],
    ) -> Result<Vec<String>, minijinja::Error> {
        let tmpl = self.env.get_template("nav_link.html")?;

        sections
            .iter()
            .map(|s| tmpl.render(context! { id => &s.id, title => &s.title }))
            .collect()
    }

    /// Render one section fragment per section, in order.
    pub fn render_sections(
        &self,
        sections: &[RenderedSection],
    ) -> Result<Vec<String>, minijinja::Error> {
        let tmpl = self.env.get_template("section.html")?;

        sections
            .iter()
            .map(|s| tmpl.render(context! { id => &s.id, body => &s.body }))
            .collect()
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Join rendered navigation links the way they sit inside the nav bar.
pub fn join_nav_links(links: &[String]) -> String {
    links.join(NAV_SEPARATOR)
}

/// Join rendered sections the way they sit inside the content container.
pub fn join_sections(sections: &[String]) -> String {
    sections.join(SECTION_SEPARATOR)
}

/// Replace the first occurrence of each marker in `skeleton`.
///
/// Both markers are located in the skeleton before anything is inserted, so
/// marker text that happens to appear inside a replacement is left alone.
fn fill_markers(
    skeleton: &str,
    (nav_marker, nav_links): (&'static str, &str),
    (sections_marker, sections): (&'static str, &str),
) -> Result<String, BuildError> {
    let nav_at = skeleton
        .find(nav_marker)
        .ok_or(BuildError::MissingMarker(nav_marker))?;
    let sections_at = skeleton
        .find(sections_marker)
        .ok_or(BuildError::MissingMarker(sections_marker))?;

    let mut slots = [
        (nav_at, nav_marker.len(), nav_links),
        (sections_at, sections_marker.len(), sections),
    ];
    slots.sort_by_key(|(at, _, _)| *at);

    let mut html = String::with_capacity(skeleton.len() + nav_links.len() + sections.len());
    let mut cursor = 0;
    for (at, len, replacement) in slots {
        html.push_str(&skeleton[cursor..at]);
        html.push_str(replacement);
        cursor = at + len;
    }
    html.push_str(&skeleton[cursor..]);

    Ok(html)
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ site.lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ site.title }}</title>
    {% for src in scripts %}<script src="{{ src | safe }}"></script>
    {% endfor %}{% for href in stylesheets %}<link rel="stylesheet" href="{{ href | safe }}">
    {% endfor %}<style>
{{ stylesheet | safe }}
    </style>
</head>
<body>
    <div class="header">
        <h1>{{ site.heading }}</h1>
        <p>{{ site.tagline }}</p>
    </div>

    <nav class="nav">
        <div class="nav-content">
            {{ nav_slot | safe }}
        </div>
    </nav>

    <div class="container">
        {{ sections_slot | safe }}
    </div>

    <div class="footer">
        {% for line in site.footer %}{% if loop.first %}<p><strong>{{ line }}</strong></p>{% else %}<p>{{ line }}</p>{% endif %}
        {% endfor %}
    </div>

    <script>
{{ script | safe }}
    </script>
</body>
</html>
"##;

const NAV_LINK_TEMPLATE: &str = r##"<a href="#{{ id }}">{{ title }}</a>"##;

const SECTION_TEMPLATE: &str = r##"
<section id="{{ id }}" class="section">
    <div class="markdown-content"></div>
    <script>
        (function() {
            const markdown = {{ body | safe }};
            const html = marked.parse(markdown);
            document.currentScript.previousElementSibling.innerHTML = html;
        })();
    </script>
</section>
"##;
