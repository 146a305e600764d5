//! CSS 類別批次替換元件
//!
//! 掃描資料夾中的樣式檔案，依照對應表就地替換類別名稱並記錄變更行

mod batch;
mod change_logger;
mod line_rewriter;
mod main;

pub use batch::{BatchReplacer, FileFailure, ReplaceResult};
pub use change_logger::{ChangeLogger, derive_group_name};
pub use line_rewriter::{LineRewriter, RewriteOutcome};
pub use main::ClassRenamer;
