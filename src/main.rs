//! # zhstrip - 发布前删除中文文本
//!
//! 双语仓库发布英文版前的清理工具：删除 Markdown 文档中的中文行与中文片段，
//! 以及 TypeScript/JavaScript 源码注释中的中文，保留英文内容与文档结构。
//!
//! ## 子命令
//! - （默认）/ `strip` - 扫描 `*.md`、`docs/**/*.md`、`src/**/*.ts`、`src/**/*.js` 并原地写回
//! - `check` - 只检查，存在待删除内容时非零退出
//! - `file`  - 处理指定文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件收集与批量执行)
//!   │     ├── text/     (清理器、文档与注释处理器)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod text;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.into_command()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
