//! # check 命令实现
//!
//! 按 strip 相同的规则处理但不写回，列出 strip 会从中删除中文的文件。
//! 只折叠空行的文件不算。存在这样的文件时返回错误，进程以非零状态退出。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 复用 `commands/strip.rs` 的扫描逻辑
//! - 使用 `utils/output.rs`

use super::strip;
use crate::cli::check::CheckArgs;
use crate::error::{Result, ZhstripError};
use crate::utils::output;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Checking for Chinese Text");

    let summary = strip::scan(&args.scan, false)?;
    let total = summary.docs.total() + summary.code.total();

    let pending: Vec<_> = summary
        .docs
        .cjk_files
        .iter()
        .chain(summary.code.cjk_files.iter())
        .collect();

    if pending.is_empty() {
        output::print_success(&format!("No Chinese text to strip in {} files", total));
        return Ok(());
    }

    for path in &pending {
        output::print_warning(&format!("{}", path.display()));
    }

    Err(ZhstripError::PendingChanges {
        count: pending.len(),
    })
}
