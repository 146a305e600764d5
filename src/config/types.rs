use serde::{Deserialize, Serialize};
use std::fmt;

/// 路徑歷史保留的數量上限
pub const MAX_RECENT_PATHS: usize = 5;

/// 設定檔名稱，存放在目前工作目錄
pub const SETTINGS_FILE: &str = "settings.json";

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja-JP")]
    JaJp,
}

impl Language {
    /// 對應 rust-i18n 的 locale 代碼
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
            Self::ZhCn => "zh-CN",
            Self::JaJp => "ja-JP",
        }
    }

    /// 以各語言母語顯示的名稱
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EnUs => "English",
            Self::ZhTw => "繁體中文",
            Self::ZhCn => "简体中文",
            Self::JaJp => "日本語",
        }
    }

}

impl Default for Language {
    fn default() -> Self {
        Self::EnUs
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 使用者設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 類別對應表（CSV）的路徑
    pub mapping_path: String,
    /// 變更記錄檔的存放資料夾
    pub log_directory: String,
    /// 要掃描的檔名結尾（區分大小寫）
    pub extensions: Vec<String>,
    pub language: Language,
    /// 最近使用過的資料夾路徑
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            mapping_path: "mapping.csv".to_string(),
            log_directory: "logs".to_string(),
            extensions: vec![".css".to_string(), ".xhtml".to_string()],
            language: Language::default(),
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}
