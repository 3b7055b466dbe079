//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `text/`, `models/`, `utils/`
//! - 子模块: strip, check, file

pub mod check;
pub mod file;
pub mod strip;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Strip(args) => strip::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::File(args) => file::execute(args),
    }
}
