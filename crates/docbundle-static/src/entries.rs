//! The ordered list of documents bundled into the page.

use std::path::PathBuf;

/// One document to bundle.
///
/// `id` doubles as the section anchor and the navigation href, so ids must be
/// unique within a list. Duplicates are not detected; they produce colliding
/// anchors in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Anchor id
    pub id: String,
    /// Navigation label
    pub title: String,
    /// Markdown source location
    pub path: PathBuf,
}

impl DocEntry {
    /// Create a new entry.
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
        }
    }
}

/// The documents shipped with the platform repository, in page order.
pub fn default_entries() -> Vec<DocEntry> {
    [
        ("readme", "📖 README", "README.md"),
        ("acceso", "📚 Acceso a Documentación", "ACCESO_DOCUMENTACION.md"),
        ("resumen", "📊 Resumen Final", "RESUMEN_FINAL.md"),
        ("arquitectura", "🏗️ Arquitectura", "ARQUITECTURA_DIAGRAMA.md"),
        ("setup-argocd", "⚙️ Setup ArgoCD", "ARGOCD_SETUP.md"),
        ("setup-gitops", "🔄 Setup GitOps", "GITOPS_SETUP.md"),
        ("quick-start", "🚀 Quick Start", "DEVELOPER_QUICK_START.md"),
        ("chart", "📦 Actualización Chart", "ACTUALIZACION_CHART_TRANSVERSAL.md"),
        ("plugin", "🔌 Agregar Plugin", "GUIA_AGREGAR_PLUGIN.md"),
        ("scaffolder", "📝 Crear Scaffolder", "GUIA_CREAR_SCAFFOLDER.md"),
        ("seguridad", "🔐 Seguridad", "SECURITY_CRITICAL.md"),
        ("inicio", "🐛 Como Iniciar", "COMO_INICIAR.md"),
        ("produccion", "✅ Producción", "PRODUCTION_CHECKLIST.md"),
    ]
    .into_iter()
    .map(|(id, title, path)| DocEntry::new(id, title, path))
    .collect()
}
