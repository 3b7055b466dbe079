//! # 批量执行器
//!
//! 顺序执行批量处理任务。
//!
//! ## 功能
//! - 逐个文件处理，处理前打印进度行
//! - 进度条显示
//! - 改动统计汇总
//! - 遇到第一个错误立即中止，已写回的文件不回滚
//!
//! ## 依赖关系
//! - 被 `commands/strip.rs`, `commands/check.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印进度行

use crate::error::Result;
use crate::models::{ChangeStats, DocumentKind};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 内容有改动
    Modified(PathBuf, ChangeStats),
    /// 内容无改动
    Unchanged,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 有改动的数量
    pub modified: usize,
    /// 无改动的数量
    pub unchanged: usize,
    /// 合并后的改动统计
    pub stats: ChangeStats,
    /// 有改动的文件
    pub modified_files: Vec<PathBuf>,
    /// 删除过中文的文件（不含只折叠空行的文件）
    pub cjk_files: Vec<PathBuf>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Modified(path, stats) => {
                self.modified += 1;
                self.stats.merge(&stats);
                if stats.removes_cjk() {
                    self.cjk_files.push(path.clone());
                }
                self.modified_files.push(path);
            }
            ProcessResult::Unchanged => self.unchanged += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.modified + self.unchanged
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 文档类型，决定进度行的前缀
    kind: DocumentKind,
    /// 是否隐藏进度行与进度条
    quiet: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(kind: DocumentKind) -> Self {
        Self { kind, quiet: false }
    }

    /// 设置是否安静模式
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> Result<BatchResult>
    where
        F: FnMut(&Path) -> Result<ProcessResult>,
    {
        let pb = if self.quiet {
            ProgressBar::hidden()
        } else {
            progress::create_progress_bar(files.len() as u64, &format!("Stripping {}", self.kind))
        };

        let label = match self.kind {
            DocumentKind::Markdown => "Processing",
            DocumentKind::Code => "Processing code",
        };

        let mut batch_result = BatchResult::default();

        for file in files {
            if !self.quiet {
                pb.suspend(|| output::print_processing(label, file));
            }

            match processor(file) {
                Ok(result) => batch_result.merge(result),
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();

        Ok(batch_result)
    }
}
