//! # check 子命令 CLI 定义
//!
//! 只检查不写回，存在待删除的中文时以非零状态退出，用于发布前的 CI 检查。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/strip.rs` 的 `ScanArgs`
//! - 参数传递给 `commands/check.rs`

use super::strip::ScanArgs;
use clap::Args;

/// check 子命令参数
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scan: ScanArgs,
}
