//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("Invalid scene: {0}")]
    InvalidScene(u8),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
