//! # 统一错误处理模块
//!
//! 定义 zhstrip 的所有错误类型，使用 `thiserror` 派生。
//!
//! 文件系统错误与解码错误都不会被捕获或重试，直接终止本次运行；
//! 已经写回的文件保持写回后的状态。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// zhstrip 统一错误类型
#[derive(Error, Debug)]
pub enum ZhstripError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("File is not valid UTF-8: {path}")]
    DecodeError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Cannot determine document kind for: {0} (use --kind)")]
    UnsupportedFile(String),

    // ─────────────────────────────────────────────────────────────
    // 检查结果
    // ─────────────────────────────────────────────────────────────
    #[error("{count} file(s) contain Chinese text that strip would remove")]
    PendingChanges { count: usize },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ZhstripError>;
