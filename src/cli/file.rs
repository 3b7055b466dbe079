//! # file 子命令 CLI 定义
//!
//! 处理命令行上直接指定的文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/file.rs`

use crate::models::DocumentKind;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 文档类型参数
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KindArg {
    /// Line-based text document
    Markdown,
    /// Source file, only comments are rewritten
    Code,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Markdown => DocumentKind::Markdown,
            KindArg::Code => DocumentKind::Code,
        }
    }
}

/// file 子命令参数
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Files to strip
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Document kind (inferred from the extension by default)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Print the result to stdout instead of overwriting the file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}
