use std::fs;
use std::path::{Path, PathBuf};

use crate::models::SourceFile;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(String),
}

/// File extensions treated as exported page markup.
pub const MARKUP_EXTENSIONS: &[&str] = &["txt", "html", "divi"];

/// Read a markup file and return its content
pub fn read_markup(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write converted output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markup files under `root`, sorted by path
pub fn scan_markup_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidInputDir(format!(
            "input directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Expand a list of files and directories into the markup sources to convert.
///
/// Files are kept as given, in order; directories contribute their sorted
/// markup files.
pub fn collect_sources(inputs: &[PathBuf]) -> Result<Vec<SourceFile>, IoError> {
    let mut sources = Vec::new();
    for input in inputs {
        if input.is_dir() {
            sources.extend(scan_markup_files(input)?.into_iter().map(SourceFile::new));
        } else if input.exists() {
            sources.push(SourceFile::new(input.clone()));
        } else {
            return Err(IoError::NotFound(input.clone()));
        }
    }
    Ok(sources)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && MARKUP_EXTENSIONS.iter().any(|m| ext == *m)
        {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_scan_and_load_files() {
        // Given an export directory with markup files
        let dir = create_test_dir();
        create_test_file(&dir, "home.divi", "[et_pb_section][/et_pb_section]");
        create_test_file(&dir, "about.html", "[et_pb_section][/et_pb_section]");

        // When scanning for files
        let files = scan_markup_files(dir.path()).unwrap();

        // Then we find both, sorted
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "about.html");
        assert_eq!(files[1].file_name().unwrap(), "home.divi");
    }

    #[test]
    fn test_handle_invalid_input_directory() {
        let result = scan_markup_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("input directory"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = create_test_dir();
        create_test_file(&dir, "root.txt", "root");

        let sub_dir = dir.path().join("pages");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.divi"), "nested").unwrap();

        let files = scan_markup_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "root.txt"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.divi"));
    }

    #[test]
    fn test_ignore_non_markup_files() {
        let dir = create_test_dir();
        create_test_file(&dir, "page.divi", "markup");
        create_test_file(&dir, "image.png", "fake image data");
        create_test_file(&dir, "config.json", "{}");

        let files = scan_markup_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "page.divi");
    }

    #[test]
    fn test_read_markup_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "page.divi", "[et_pb_text]Hi[/et_pb_text]");

        let content = read_markup(&path).unwrap();
        assert_eq!(content, "[et_pb_text]Hi[/et_pb_text]");
    }

    #[test]
    fn test_read_markup_not_found() {
        let dir = create_test_dir();
        let result = read_markup(&dir.path().join("missing.divi"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_output_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("out").join("nested").join("pages.ndjson");

        write_output(&path, "{}\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
        assert!(dir.path().join("out").join("nested").is_dir());
    }

    #[test]
    fn test_write_output_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "out.json", "old");

        write_output(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_collect_sources_mixes_files_and_directories() {
        let dir = create_test_dir();
        let single = create_test_file(&dir, "single.txt", "x");
        let sub_dir = dir.path().join("site");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("b.divi"), "b").unwrap();
        std::fs::write(sub_dir.join("a.divi"), "a").unwrap();

        let sources = collect_sources(&[single, sub_dir]).unwrap();
        let titles: Vec<_> = sources.iter().map(|s| s.title()).collect();

        assert_eq!(titles, vec!["single", "a", "b"]);
    }

    #[test]
    fn test_collect_sources_missing_input() {
        let result = collect_sources(&[PathBuf::from("/nope/page.divi")]);
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
