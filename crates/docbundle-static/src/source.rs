//! Markdown source loading.

use std::fs;
use std::path::Path;

/// Text loaded for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// File contents, or the placeholder when the file could not be read
    pub text: String,
    /// Whether `text` is the placeholder
    pub missing: bool,
}

/// Placeholder body used in place of a file that could not be read.
pub fn missing_placeholder(path: &Path) -> String {
    format!("# Archivo no encontrado: {}", path.display())
}

/// Read a whole Markdown file.
///
/// Never fails: a missing or unreadable file (including one that is not
/// valid UTF-8) yields [`missing_placeholder`] instead.
pub fn read_source(path: &Path) -> SourceText {
    match fs::read_to_string(path) {
        Ok(text) => SourceText {
            text,
            missing: false,
        },
        Err(e) => {
            tracing::warn!("Skipping content of {}: {}", path.display(), e);
            SourceText {
                text: missing_placeholder(path),
                missing: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_whole_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "# Title\n\nBody with \"quotes\"\n").unwrap();

        let source = read_source(&path);

        assert!(!source.missing);
        assert_eq!(source.text, "# Title\n\nBody with \"quotes\"\n");
    }

    #[test]
    fn missing_file_yields_placeholder() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("NOPE.md");

        let source = read_source(&path);

        assert!(source.missing);
        assert_eq!(source.text, format!("# Archivo no encontrado: {}", path.display()));
    }

    #[test]
    fn directory_is_treated_as_missing() {
        let temp = tempdir().unwrap();

        let source = read_source(temp.path());

        assert!(source.missing);
        assert!(source.text.starts_with("# Archivo no encontrado: "));
    }

    #[test]
    fn invalid_utf8_is_treated_as_missing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(read_source(&path).missing);
    }
}
