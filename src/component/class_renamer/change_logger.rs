//! 變更記錄模組
//!
//! 以附加模式把每一筆行變更寫進批次專屬的記錄檔

use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 變更記錄器
///
/// 記錄檔名為 `log_<群組名稱>.txt`，群組名稱取自根目錄的最後一段路徑，
/// 用來區分不同位置批次的記錄。檔案只附加、不清空。
pub struct ChangeLogger {
    log_path: PathBuf,
}

impl ChangeLogger {
    /// 建立記錄器，記錄檔目錄不存在時會先建立
    pub fn new(log_directory: &Path, group_name: &str) -> Result<Self> {
        ensure_directory_exists(log_directory)?;

        Ok(Self {
            log_path: log_directory.join(format!("log_{group_name}.txt")),
        })
    }

    /// 附加一筆變更記錄
    ///
    /// 格式固定為 `File: <路徑>, Line modified: <行號>`，與既有記錄檔相容。
    pub fn log_change(&self, file_path: &Path, line_number: usize) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("無法開啟記錄檔: {}", self.log_path.display()))?;

        writeln!(
            file,
            "File: {}, Line modified: {}",
            file_path.display(),
            line_number
        )
        .with_context(|| format!("無法寫入記錄檔: {}", self.log_path.display()))?;

        Ok(())
    }

    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// 取根目錄的最後一段路徑作為記錄群組名稱，沒有最後一段時回傳空字串
#[must_use]
pub fn derive_group_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_log_line_format() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ChangeLogger::new(temp_dir.path(), "theme").unwrap();

        logger.log_change(Path::new("/site/style.css"), 7).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("log_theme.txt")).unwrap();
        assert_eq!(content, "File: /site/style.css, Line modified: 7\n");
    }

    #[test]
    fn test_log_appends_across_calls() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ChangeLogger::new(temp_dir.path(), "theme").unwrap();

        logger.log_change(Path::new("/site/a.css"), 1).unwrap();
        logger.log_change(Path::new("/site/b.css"), 12).unwrap();

        let content = fs::read_to_string(logger.log_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "File: /site/a.css, Line modified: 1");
        assert_eq!(lines[1], "File: /site/b.css, Line modified: 12");
    }

    #[test]
    fn test_logger_creates_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs").join("batch");

        let logger = ChangeLogger::new(&log_dir, "site").unwrap();
        logger.log_change(Path::new("/a.css"), 3).unwrap();

        assert!(log_dir.join("log_site.txt").exists());
    }

    #[test]
    fn test_derive_group_name_from_last_segment() {
        assert_eq!(derive_group_name(Path::new("/var/www/theme")), "theme");
        assert_eq!(derive_group_name(Path::new("/var/www/theme/")), "theme");
        assert_eq!(derive_group_name(Path::new("relative/dir")), "dir");
    }

    #[test]
    fn test_derive_group_name_without_last_segment() {
        assert_eq!(derive_group_name(Path::new("/")), "");
    }
}
