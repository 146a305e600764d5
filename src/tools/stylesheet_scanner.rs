use crate::tools::validate_directory_exists;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 掃描到的樣式檔案，`selected` 預設為 true（全部預先勾選）
#[derive(Debug, Clone)]
pub struct StylesheetFile {
    pub path: PathBuf,
    pub selected: bool,
}

/// 遞迴掃描目錄下所有符合副檔名的樣式檔案
///
/// 副檔名比對區分大小寫，直接比對檔名結尾。不追蹤符號連結。
/// 回傳順序為走訪順序（深度優先），不做排序。
pub fn scan_stylesheet_files(
    directory: &Path,
    extensions: &[String],
) -> Result<Vec<StylesheetFile>> {
    validate_directory_exists(directory)?;

    let files = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            matches_extension(&name, extensions)
        })
        .map(|entry| StylesheetFile {
            path: entry.into_path(),
            selected: true,
        })
        .collect();

    Ok(files)
}

fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn default_extensions() -> Vec<String> {
        vec![".css".to_string(), ".xhtml".to_string()]
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.css"), ".a {}").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "not a stylesheet").unwrap();
        fs::write(temp_dir.path().join("c.xhtml"), "<html/>").unwrap();

        let files = scan_stylesheet_files(temp_dir.path(), &default_extensions()).unwrap();

        // 走訪順序不保證，只比對集合內容
        let names: HashSet<String> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            HashSet::from(["a.css".to_string(), "c.xhtml".to_string()])
        );
    }

    #[test]
    fn test_scan_finds_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("theme").join("dark");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("colors.css"), ".x {}").unwrap();

        let files = scan_stylesheet_files(temp_dir.path(), &default_extensions()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("theme/dark/colors.css"));
    }

    #[test]
    fn test_scan_extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("UPPER.CSS"), ".a {}").unwrap();
        fs::write(temp_dir.path().join("lower.css"), ".b {}").unwrap();

        let files = scan_stylesheet_files(temp_dir.path(), &default_extensions()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("lower.css"));
    }

    #[test]
    fn test_scan_marks_all_files_selected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.css"), ".a {}").unwrap();
        fs::write(temp_dir.path().join("b.css"), ".b {}").unwrap();

        let files = scan_stylesheet_files(temp_dir.path(), &default_extensions()).unwrap();

        assert!(files.iter().all(|f| f.selected));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = scan_stylesheet_files(temp_dir.path(), &default_extensions()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no_such_dir");

        assert!(scan_stylesheet_files(&missing, &default_extensions()).is_err());
    }
}
