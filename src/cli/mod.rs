//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - 无子命令: 等同于 `strip`，无必需参数，在仓库根目录运行
//! - `strip`: 删除文档与源码注释中的中文并写回
//! - `check`: 只检查，有待删除内容时非零退出
//! - `file`: 处理指定文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: strip, check, file

pub mod check;
pub mod file;
pub mod strip;

use clap::{Parser, Subcommand};

/// zhstrip - 发布前删除中文文本
#[derive(Parser)]
#[command(name = "zhstrip")]
#[command(version)]
#[command(about = "Strip Chinese text from bilingual docs and source comments", long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub strip: strip::StripArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// 未指定子命令时执行 strip
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Strip(self.strip))
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Remove Chinese text from docs and source comments in place (default)
    Strip(strip::StripArgs),

    /// Report files with Chinese text that strip would remove and fail if any exist
    Check(check::CheckArgs),

    /// Strip specific files
    File(file::FileArgs),
}
