//! 類別對應表檢視元件
//!
//! 讀取設定中的對應表並依序列出所有替換規則

mod main;

pub use main::MappingViewer;
