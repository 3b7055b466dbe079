//! # strip 子命令 CLI 定义
//!
//! 扫描根目录下的文档与源码，删除其中的中文并写回。
//! 不带子命令运行时等同于 `strip`。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `ScanArgs` 被 `cli/check.rs` 复用
//! - 参数传递给 `commands/strip.rs`

use crate::batch::collector::{CODE_PATTERNS, DOC_PATTERNS, EXCLUDED_NAMES};

use clap::Args;
use std::path::PathBuf;

/// 文件扫描参数
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Repository root to scan
    #[arg(short = 'C', long, env = "ZHSTRIP_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Glob patterns for documentation files, relative to the root (comma separated)
    #[arg(long = "doc-pattern", value_name = "GLOB", value_delimiter = ',', default_values_t = to_strings(DOC_PATTERNS))]
    pub doc_patterns: Vec<String>,

    /// Glob patterns for source files, relative to the root (comma separated)
    #[arg(long = "code-pattern", value_name = "GLOB", value_delimiter = ',', default_values_t = to_strings(CODE_PATTERNS))]
    pub code_patterns: Vec<String>,

    /// File names to skip (exact name match)
    #[arg(long = "exclude", value_name = "NAME", value_delimiter = ',', default_values_t = to_strings(EXCLUDED_NAMES))]
    pub excluded: Vec<String>,

    /// Skip documentation files
    #[arg(long, default_value_t = false)]
    pub no_docs: bool,

    /// Skip source files
    #[arg(long, default_value_t = false)]
    pub no_code: bool,

    /// Hide per-file progress lines
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// strip 子命令参数
#[derive(Args, Debug, Clone)]
pub struct StripArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Report what would change without writing any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
