//! Inline stylesheet, loader script and the client-side libraries the page pulls in.

/// Markdown renderer used by every section script.
pub const MARKED_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/marked/marked.min.js";

/// Diagram renderer for ```mermaid blocks.
pub const MERMAID_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js";

/// Syntax highlighter for the remaining code blocks.
pub const HIGHLIGHT_SCRIPT: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

/// Highlighter theme.
pub const HIGHLIGHT_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css";

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// External scripts, in load order. The renderers must load before any section script runs.
    pub fn scripts() -> Vec<&'static str> {
        vec![MERMAID_SCRIPT, MARKED_SCRIPT, HIGHLIGHT_SCRIPT]
    }

    /// External stylesheets.
    pub fn stylesheets() -> Vec<&'static str> {
        vec![HIGHLIGHT_STYLESHEET]
    }

    /// Generate the inline page stylesheet.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the script that runs after all sections are in the page.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }

:root {
  --primary: #4A90E2;
  --secondary: #FF6B35;
  --success: #28A745;
  --dark: #2C3E50;
  --code-bg: #282C34;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: #333;
  background: #f5f7fa;
}

.header {
  background: linear-gradient(135deg, var(--primary) 0%, #357ABD 100%);
  color: white;
  padding: 2rem;
  text-align: center;
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
  position: sticky;
  top: 0;
  z-index: 1000;
}

.header h1 { font-size: 2.5rem; margin-bottom: 0.5rem; }
.header p { font-size: 1.2rem; opacity: 0.9; }

.nav {
  background: white;
  position: sticky;
  top: 100px;
  z-index: 999;
  box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
  padding: 1rem 0;
}

.nav-content {
  max-width: 1200px;
  margin: 0 auto;
  display: flex;
  gap: 1rem;
  padding: 0 2rem;
  flex-wrap: wrap;
}

.nav a {
  color: var(--dark);
  text-decoration: none;
  padding: 0.5rem 1rem;
  border-radius: 5px;
  transition: all 0.3s;
  white-space: nowrap;
}

.nav a:hover {
  background: var(--primary);
  color: white;
}

.container {
  max-width: 1200px;
  margin: 2rem auto;
  padding: 0 2rem;
}

.section {
  background: white;
  border-radius: 10px;
  padding: 2rem;
  margin-bottom: 2rem;
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.05);
}

.section h1 {
  color: var(--primary);
  font-size: 2.5rem;
  margin-bottom: 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 3px solid var(--primary);
}

.section h2 {
  color: var(--secondary);
  font-size: 2rem;
  margin: 2rem 0 1rem 0;
  padding-bottom: 0.5rem;
  border-bottom: 2px solid var(--secondary);
}

.section h3 {
  color: var(--dark);
  font-size: 1.5rem;
  margin: 1.5rem 0 1rem 0;
}

.section p { margin: 1rem 0; line-height: 1.8; }

.section ul, .section ol { margin: 1rem 0 1rem 2rem; line-height: 1.8; }

.section pre {
  background: var(--code-bg);
  color: #ABB2BF;
  padding: 1.5rem;
  border-radius: 8px;
  overflow-x: auto;
  margin: 1rem 0;
}

.section code {
  background: #f4f4f4;
  color: #e83e8c;
  padding: 0.2rem 0.4rem;
  border-radius: 3px;
  font-family: 'Courier New', monospace;
}

.section pre code { background: none; color: inherit; padding: 0; }

.section table { width: 100%; border-collapse: collapse; margin: 1.5rem 0; }

.section th {
  background: var(--primary);
  color: white;
  padding: 1rem;
  text-align: left;
}

.section td { padding: 0.75rem 1rem; border-bottom: 1px solid #ddd; }

.section tr:hover { background: #f5f5f5; }

.mermaid {
  background: white;
  padding: 2rem;
  border-radius: 8px;
  margin: 2rem 0;
  border: 1px solid #e0e0e0;
}

.footer {
  background: var(--dark);
  color: white;
  text-align: center;
  padding: 2rem;
  margin-top: 3rem;
}

@media (max-width: 768px) {
  .header h1 { font-size: 1.8rem; }
  .nav-content { flex-direction: column; }
}
"#;

// Section scripts have already filled every placeholder by the time this runs;
// the delay lets the browser lay out the rendered markup first.
const DEFAULT_JS: &str = r##"(function() {
  marked.setOptions({
    highlight: function(code, lang) {
      if (lang && hljs.getLanguage(lang)) {
        return hljs.highlight(code, { language: lang }).value;
      }
      return hljs.highlightAuto(code).value;
    },
    breaks: true,
    gfm: true
  });

  mermaid.initialize({
    startOnLoad: false,
    theme: 'default',
    securityLevel: 'loose'
  });

  document.querySelectorAll('a[href^="#"]').forEach((anchor) => {
    anchor.addEventListener('click', function(e) {
      e.preventDefault();
      const target = document.querySelector(this.getAttribute('href'));
      if (target) {
        target.scrollIntoView({ behavior: 'smooth', block: 'start' });
      }
    });
  });

  setTimeout(() => {
    document.querySelectorAll('pre code:not(.language-mermaid)').forEach((block) => {
      hljs.highlightElement(block);
    });

    document.querySelectorAll('pre code.language-mermaid').forEach((block) => {
      const pre = block.parentElement;
      const diagram = document.createElement('div');
      diagram.className = 'mermaid';
      diagram.textContent = block.textContent;
      pre.parentElement.replaceChild(diagram, pre);
    });

    mermaid.run({ querySelector: '.mermaid' });
  }, 500);
})();
"##;
