use std::path::{Path, PathBuf};

/// A markup source on disk together with the page title derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    path: PathBuf,
    title: String,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let title = Self::extract_title(&path);
        Self { path, title }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file stem, used as the page title when none is given.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn extract_title(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
