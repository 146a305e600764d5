//! 批次替換模組
//!
//! 依輸入順序處理勾選的檔案：每個檔案重新載入對應表、
//! 逐行替換、把變更行寫進變更記錄檔

use super::change_logger::{ChangeLogger, derive_group_name};
use super::line_rewriter::LineRewriter;
use crate::config::UserSettings;
use crate::tools::{RenameMapping, StylesheetFile, load_mapping};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一檔案的失敗記錄
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// 批次替換結果
#[derive(Debug, Default)]
pub struct ReplaceResult {
    /// 成功改寫的檔案數
    pub files_replaced: usize,
    /// 未勾選而跳過的檔案數
    pub files_skipped: usize,
    /// 變更的總行數
    pub lines_changed: usize,
    /// 對應表載入失敗的次數（該檔案以空對應表繼續）
    pub mapping_errors: usize,
    /// 改寫失敗的檔案與原因
    pub failures: Vec<FileFailure>,
    /// 本批次的變更記錄檔位置
    pub log_path: PathBuf,
}

impl ReplaceResult {
    #[must_use]
    pub fn files_failed(&self) -> usize {
        self.failures.len()
    }

    /// 取得總檔案數
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files_replaced + self.files_failed() + self.files_skipped
    }
}

/// 批次替換器
pub struct BatchReplacer {
    mapping_path: PathBuf,
    log_directory: PathBuf,
    group_name: String,
    shutdown_signal: Arc<AtomicBool>,
}

impl BatchReplacer {
    pub fn new(settings: &UserSettings, root: &Path, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            mapping_path: PathBuf::from(&settings.mapping_path),
            log_directory: PathBuf::from(&settings.log_directory),
            group_name: derive_group_name(root),
            shutdown_signal,
        }
    }

    /// 依輸入順序處理所有勾選的檔案
    ///
    /// 未勾選的檔案完全不碰（不讀、不寫、不記錄）。單一檔案失敗只記下
    /// 原因，批次繼續處理後面的檔案；中斷訊號只在檔案之間檢查，
    /// 不會中斷單一檔案的改寫。
    pub fn replace_selected(&self, files: &[StylesheetFile]) -> Result<ReplaceResult> {
        let logger = ChangeLogger::new(&self.log_directory, &self.group_name)?;
        let rewriter = LineRewriter::new();
        let mut result = ReplaceResult {
            log_path: logger.log_path().to_path_buf(),
            ..ReplaceResult::default()
        };

        let progress_bar = ProgressBar::new(files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("替換檔案中...");

        for file in files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                progress_bar.abandon_with_message("操作已中斷");
                break;
            }

            if !file.selected {
                result.files_skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            let mapping = self.load_mapping_or_empty(&mut result);

            match rewriter.rewrite_file(&file.path, &mapping) {
                Ok(outcome) => {
                    for line_number in &outcome.changed_lines {
                        if let Err(e) = logger.log_change(&file.path, *line_number) {
                            warn!("寫入變更記錄失敗 {}: {e}", file.path.display());
                        }
                    }

                    debug!(
                        "已改寫 {} (變更 {} 行)",
                        file.path.display(),
                        outcome.changed_lines.len()
                    );
                    result.lines_changed += outcome.changed_lines.len();
                    result.files_replaced += 1;
                }
                Err(e) => {
                    warn!("改寫檔案失敗 {}: {e}", file.path.display());
                    result.failures.push(FileFailure {
                        path: file.path.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("完成");

        Ok(result)
    }

    /// 每個檔案都重新載入對應表（保留原始行為，表在批次中途修改會生效）；
    /// 載入失敗時記一筆並以空對應表繼續
    fn load_mapping_or_empty(&self, result: &mut ReplaceResult) -> RenameMapping {
        match load_mapping(&self.mapping_path) {
            Ok(mapping) => mapping,
            Err(e) => {
                warn!("無法載入對應表 {}: {e}", self.mapping_path.display());
                result.mapping_errors += 1;
                RenameMapping::default()
            }
        }
    }
}
