use super::batch::{BatchReplacer, ReplaceResult};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{StylesheetFile, scan_stylesheet_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// CSS 類別批次替換元件
pub struct ClassRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl ClassRenamer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== CSS 類別批次替換 ===").cyan().bold());

        // 取得輸入路徑
        let Some(input_path) = self.prompt_input_path()? else {
            return Ok(()); // ESC pressed
        };
        let directory = PathBuf::from(&input_path);

        validate_directory_exists(&directory)?;

        // 更新路徑歷史並儲存
        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存路徑歷史: {e}");
            }
        }

        // 掃描樣式檔案
        println!("{}", style("掃描樣式檔案中...").dim());
        let mut files = scan_stylesheet_files(&directory, &self.config.settings.extensions)?;

        if files.is_empty() {
            println!("{}", style("找不到任何樣式檔案").yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(format!("找到 {} 個樣式檔案", files.len())).green()
        );

        // 勾選要處理的檔案（預設全選）
        let Some(selected_count) = self.prompt_file_selection(&mut files)? else {
            return Ok(()); // ESC pressed
        };

        if selected_count == 0 {
            println!("{}", style("未選擇任何檔案").yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(format!("對應表: {}", self.config.settings.mapping_path)).dim()
        );
        println!(
            "{}",
            style(format!("記錄資料夾: {}", self.config.settings.log_directory)).dim()
        );

        // 確認是否執行
        if !self.confirm_replace(selected_count)? {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        // 檢查中斷訊號
        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止處理");
            return Ok(());
        }

        // 執行批次替換
        println!("{}", style("替換類別名稱中...").cyan());
        let replacer = BatchReplacer::new(
            &self.config.settings,
            &directory,
            Arc::clone(&self.shutdown_signal),
        );
        let result = replacer.replace_selected(&files)?;

        self.print_result(&result);

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<Option<String>> {
        let recent_paths = &self.config.settings.recent_paths;

        // 如果沒有歷史路徑，直接輸入
        if recent_paths.is_empty() {
            let path: String = Input::new()
                .with_prompt("請輸入要處理的資料夾路徑")
                .interact_text()?;
            return Ok(Some(path.trim().to_string()));
        }

        // 建立選項清單：歷史路徑 + 輸入新路徑
        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let exists = Path::new(p).exists();
                let indicator = if exists { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push("輸入新路徑...".to_string());

        println!("{}", style("(按 ESC 返回主選單)").dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇路徑")
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => {
                let path: String = Input::new()
                    .with_prompt("請輸入要處理的資料夾路徑")
                    .interact_text()?;
                Ok(Some(path.trim().to_string()))
            }
        }
    }

    /// 讓使用者勾選要替換的檔案，回傳勾選數量；按 ESC 回傳 `None`
    fn prompt_file_selection(&self, files: &mut [StylesheetFile]) -> Result<Option<usize>> {
        let items: Vec<String> = files.iter().map(|f| f.path.display().to_string()).collect();
        let defaults = vec![true; files.len()];

        println!("{}", style("(空白鍵切換勾選，按 ESC 返回主選單)").dim());

        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇要替換的檔案")
            .items(&items)
            .defaults(&defaults)
            .interact_opt()?;

        let Some(indices) = selection else {
            return Ok(None);
        };

        for file in files.iter_mut() {
            file.selected = false;
        }
        for idx in &indices {
            files[*idx].selected = true;
        }

        Ok(Some(indices.len()))
    }

    fn confirm_replace(&self, count: usize) -> Result<bool> {
        // 就地覆寫檔案內容，無法復原，預設為否
        let confirm = Confirm::new()
            .with_prompt(format!("確定要替換這 {count} 個檔案的類別名稱嗎？"))
            .default(false)
            .interact()?;
        Ok(confirm)
    }

    fn print_result(&self, result: &ReplaceResult) {
        println!();
        println!("{}", style("=== 替換結果 ===").cyan().bold());
        println!("  成功替換: {} 個檔案", style(result.files_replaced).green());
        println!("  變更行數: {} 行", style(result.lines_changed).green());

        if result.files_skipped > 0 {
            println!("  已跳過: {} 個檔案", style(result.files_skipped).yellow());
        }

        if result.mapping_errors > 0 {
            println!(
                "  對應表載入失敗: {} 次",
                style(result.mapping_errors).yellow()
            );
        }

        if result.files_failed() > 0 {
            println!("  失敗: {} 個檔案", style(result.files_failed()).red());

            for failure in &result.failures {
                println!(
                    "  {} {}: {}",
                    style("•").dim(),
                    failure.path.display(),
                    failure.reason
                );
            }
        }

        if result.lines_changed > 0 {
            println!();
            println!(
                "{}",
                style(format!("變更記錄: {}", result.log_path.display())).dim()
            );
        }

        info!(
            "類別替換完成 - 替換: {}, 跳過: {}, 失敗: {}, 變更行數: {}",
            result.files_replaced,
            result.files_skipped,
            result.files_failed(),
            result.lines_changed
        );
    }
}
