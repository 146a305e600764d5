//! 行替換模組
//!
//! 核心演算法：逐行套用對應表、追蹤變更行號、一次寫回檔案

use crate::tools::RenameMapping;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 單一檔案的替換結果
#[derive(Debug, Default)]
pub struct RewriteOutcome {
    /// 內容有變更的行號（從 1 開始）
    pub changed_lines: Vec<usize>,
}

/// 行替換器
pub struct LineRewriter;

impl Default for LineRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRewriter {
    pub const fn new() -> Self {
        Self
    }

    /// 對檔案逐行套用對應表並就地改寫
    ///
    /// 整個檔案先讀進記憶體，逐行替換後一次寫回，
    /// 讀取途中發生錯誤不會動到原檔案。輸出使用平台換行符號：
    /// 混用的換行風格會被統一，檔尾沒有換行時會補上（已知限制）。
    ///
    /// # Arguments
    /// * `path` - 要改寫的檔案
    /// * `mapping` - 替換規則，依表中順序連鎖套用
    ///
    /// # Returns
    /// 變更行號清單（從 1 開始）；對應表為空時檔案仍會被寫回一次
    pub fn rewrite_file(&self, path: &Path, mapping: &RenameMapping) -> Result<RewriteOutcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("無法讀取檔案: {}", path.display()))?;

        let separator = line_separator();
        let mut rewritten = String::with_capacity(content.len());
        let mut outcome = RewriteOutcome::default();

        for (index, line) in content.lines().enumerate() {
            let replaced = mapping.apply(line);
            if replaced != line {
                outcome.changed_lines.push(index + 1);
            }
            rewritten.push_str(&replaced);
            rewritten.push_str(separator);
        }

        fs::write(path, &rewritten)
            .with_context(|| format!("無法寫入檔案: {}", path.display()))?;

        Ok(outcome)
    }
}

fn line_separator() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}
