//! # 文本处理模块
//!
//! 删除文档与代码注释中的中文。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: cleaner, markdown, comments

pub mod cleaner;
pub mod comments;
pub mod markdown;

use crate::error::{Result, ZhstripError};
use crate::models::{DocumentKind, Processed};

use std::fs;
use std::path::Path;

/// 按文档类型选择处理器
pub fn strip_content(kind: DocumentKind, content: &str) -> Processed {
    match kind {
        DocumentKind::Markdown => markdown::strip_markdown(content),
        DocumentKind::Code => comments::strip_comments(content),
    }
}

/// 读取整个文件并按 UTF-8 解码
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ZhstripError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    String::from_utf8(bytes).map_err(|e| ZhstripError::DecodeError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 整体覆盖写回文件
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ZhstripError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 处理单个文件；`write` 为 false 时只计算不写回
pub fn strip_file(path: &Path, kind: DocumentKind, write: bool) -> Result<(Processed, bool)> {
    let original = read_document(path)?;
    let processed = strip_content(kind, &original);
    let changed = processed.content != original;

    if write {
        write_document(path, &processed.content)?;
    }

    Ok((processed, changed))
}
