use anyhow::{Result, bail};
use std::path::Path;

/// 確認路徑存在且為資料夾，掃描前先驗證根目錄用
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("找不到路徑: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 目錄不存在時建立（含中間層），記錄檔目錄用
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_validate_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("style.css");
        fs::write(&file, ".a {}").unwrap();

        assert!(validate_directory_exists(&file).is_err());
    }

    #[test]
    fn test_ensure_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("logs").join("batch");

        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
