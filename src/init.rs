//! 程式初始化
//!
//! 設定 env_logger，輸出到工作目錄的記錄檔；開不了檔時退回 stderr

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

/// 程式執行記錄檔名稱
const LOG_FILE: &str = "css_class_renamer.log";

pub fn init() {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(Target::Stderr);
        }
    }

    builder.init();
}
