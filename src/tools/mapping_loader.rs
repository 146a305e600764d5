//! 對應表載入模組
//!
//! 將兩欄逗號分隔的對應表檔案解析成有序的替換規則清單

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 單一替換規則（舊類別名稱 → 新類別名稱）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    pub old_class: String,
    pub new_class: String,
}

/// 有序的替換規則清單
///
/// 規則依對應表中出現的順序儲存，替換時依序套用，
/// 前一條規則的結果會作為下一條規則的輸入（連鎖替換）。
/// 順序對重疊的類別名稱有影響，因此不能使用無序的 map。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMapping {
    rules: Vec<RenameRule>,
}

impl RenameMapping {
    /// 解析對應表內容
    ///
    /// 每行格式為 `舊名稱,新名稱`，以第一個逗號分割，兩欄皆去除前後空白。
    /// 沒有逗號的行（包含空白行）會被直接略過，不視為錯誤。
    /// 重複的舊名稱以最後載入的新名稱為準，規則位置維持第一次出現的順序。
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut mapping = Self::default();

        for line in content.lines() {
            let Some((old_class, new_class)) = line.split_once(',') else {
                continue;
            };
            mapping.push_rule(old_class.trim(), new_class.trim());
        }

        mapping
    }

    fn push_rule(&mut self, old_class: &str, new_class: &str) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.old_class == old_class) {
            rule.new_class = new_class.to_string();
        } else {
            self.rules.push(RenameRule {
                old_class: old_class.to_string(),
                new_class: new_class.to_string(),
            });
        }
    }

    /// 對單行文字依序套用所有規則
    ///
    /// # Arguments
    /// * `line` - 原始行內容（不含換行符號）
    ///
    /// # Returns
    /// 替換後的行內容；沒有任何規則命中時與輸入相同
    #[must_use]
    pub fn apply(&self, line: &str) -> String {
        let mut result = line.to_string();

        for rule in &self.rules {
            result = result.replace(&rule.old_class, &rule.new_class);
        }

        result
    }

    #[must_use]
    pub fn rules(&self) -> &[RenameRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// 從檔案載入對應表
///
/// 對應表很小，直接整個讀進記憶體。檔案無法讀取時回傳錯誤，
/// 由呼叫端決定是否以空的對應表繼續執行。
pub fn load_mapping(path: &Path) -> Result<RenameMapping> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("無法讀取對應表: {}", path.display()))?;

    Ok(RenameMapping::parse(&content))
}
